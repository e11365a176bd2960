use clap::Parser;
use expreval::{eval, evaluate, parse, render};

/// expreval evaluates an arithmetic expression over `+ - * /` and
/// parentheses. All tokens must be separated by whitespace.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the expression tree diagram after the result.
    #[arg(short, long)]
    tree: bool,

    /// Evaluates while parsing, without building a tree. Cannot be
    /// combined with --tree.
    #[arg(short, long, conflicts_with = "tree")]
    fold: bool,

    expression: String,
}

fn main() {
    let args = Args::parse();

    let result = if args.fold {
        evaluate(&args.expression).map(|value| (value, None))
    } else {
        parse(&args.expression).and_then(|expr| {
                                   let value = eval(&expr)?;
                                   Ok((value, args.tree.then(|| render(&expr))))
                               })
    };

    match result {
        Ok((value, diagram)) => {
            println!("{value}");
            if let Some(diagram) = diagram {
                println!("{diagram}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
