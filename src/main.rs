use std::fs;

use calcyard::compute;
use clap::Parser;

/// calcyard evaluates arithmetic expressions with constants, functions,
/// operator precedence and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcyard to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate, or a path to a file containing it when
    /// --file is set.
    expression: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    match compute(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
