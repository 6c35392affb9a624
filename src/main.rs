use std::{fs, process};

use clap::{Parser, ValueEnum};
use tiercalc::{
    ast::Expression,
    interpreter::evaluator::core::{Evaluator, SPLICE_PRECISION, Strategy},
};

/// tiercalc evaluates arithmetic expressions with `+ - * /`, parentheses and
/// decimal literals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a file path and evaluate every non-blank line.
    #[arg(short, long)]
    file: bool,

    /// Print every reduced segment and its tree to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// How the expression is evaluated.
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Splice)]
    strategy: StrategyArg,

    /// Decimal places used when splicing group results back into text.
    #[arg(short, long, default_value_t = SPLICE_PRECISION, conflicts_with = "round_trip")]
    precision: usize,

    /// Splice group results using the shortest text that reads back exactly.
    #[arg(long)]
    round_trip: bool,

    /// Evaluate the innermost group instead of failing on an unclosed '('.
    #[arg(long)]
    allow_unclosed: bool,

    contents: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Resolve parentheses by splicing results back as text.
    Splice,
    /// Parse with a recursive-descent grammar.
    Descent,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Splice => Self::Splice,
            StrategyArg::Descent => Self::Descent,
        }
    }
}

fn main() {
    let args = Args::parse();

    let evaluator = Evaluator::new().with_strategy(args.strategy.into())
                                    .with_splice_precision((!args.round_trip).then_some(args.precision))
                                    .with_allow_unclosed(args.allow_unclosed);

    let expressions = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   &args.contents);
                         process::exit(1);
                     });
        script.lines()
              .filter(|line| !line.trim().is_empty())
              .map(Expression::from)
              .collect()
    } else {
        vec![Expression::new(args.contents)]
    };

    let mut failed = false;
    for expression in &expressions {
        match evaluator.evaluate_traced(expression) {
            Ok((value, steps)) => {
                if args.verbose {
                    for step in &steps {
                        eprintln!("{} => {} = {}", step.segment, step.tree, step.value);
                    }
                }
                println!("{value}");
            },
            Err(e) => {
                eprintln!("{expression}: {e}");
                failed = true;
            },
        }
    }

    if failed {
        process::exit(1);
    }
}
