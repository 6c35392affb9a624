use logos::Logos;

/// Represents a lexical token of an arithmetic expression.
///
/// Every character of the input belongs to exactly one token, except
/// whitespace, which is skipped wherever it appears. Characters that have no
/// meaning in the grammar are kept as [`Token::Unknown`] so the splice
/// strategy can carry them along verbatim.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A run of digits and dots, such as `3`, `3.5`, `.5` or even `1.2.3`.
    /// The text is kept as-is; it is only converted to a number at a leaf.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any run of characters the grammar does not know about.
    #[regex(r"[^0-9.+\-*/()\s]+", |lex| lex.slice().to_owned())]
    Unknown(String),
    /// Spaces, tabs, newlines and other whitespace.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl Token {
    /// The source text this token stands for.
    ///
    /// # Example
    /// ```
    /// use tiercalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Number("3.5".to_string()).as_str(), "3.5");
    /// assert_eq!(Token::Star.as_str(), "*");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(text) | Self::Unknown(text) => text,
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Ignored => "",
        }
    }
}

/// Splits an expression into tokens paired with their byte offsets.
///
/// Lexing never fails: anything unrecognised becomes [`Token::Unknown`].
///
/// # Example
/// ```
/// use tiercalc::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("(3 - 2)");
///
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Number("3".to_string()), 1),
///                 (Token::Minus, 3),
///                 (Token::Number("2".to_string()), 5),
///                 (Token::RParen, 6)]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => tokens.push((Token::Unknown(lexer.slice().to_owned()), position)),
        }
    }

    tokens
}
