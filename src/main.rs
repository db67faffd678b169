use std::fs;

use clap::Parser;
use stylefn::{evaluate, interpreter::evaluator::function::core::builtin_names};

/// stylefn evaluates a CSS preprocessor value expression and prints the
/// result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stylefn to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Name to report in error messages when the expression is passed
    /// inline.
    #[arg(long)]
    file_name: Option<String>,

    /// Prints every builtin function name and exits.
    #[arg(long)]
    list: bool,

    #[arg(required_unless_present = "list")]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.list {
        for name in builtin_names() {
            println!("{name}");
        }
        return;
    }

    let Some(contents) = args.contents else {
        eprintln!("No expression given.");
        std::process::exit(1);
    };

    let (source, name) = if args.file {
        let source = fs::read_to_string(&contents).unwrap_or_else(|_| {
                                                      eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                                      std::process::exit(1);
                                                  });
        (source, args.file_name.or(Some(contents)))
    } else {
        (contents, args.file_name)
    };

    match evaluate(&source, name.as_deref()) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
