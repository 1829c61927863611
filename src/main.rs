use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use scoperes::analyze;
use scoperes::lexer::Lexer;
use scoperes::parser::{ParseError, ParseErrorType};
use std::fs;
use std::io::{self, Read};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of the program to resolve (reads standard input when omitted)
    file: Option<String>,

    /// Dump the symbol table and raw assignments to stderr
    #[arg(long, short)]
    debug: bool,

    /// Print the token stream instead of resolving
    #[arg(long, short)]
    tokens: bool,
}

fn read_input(file: &Option<String>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read {path}")),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read standard input")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let text = read_input(&cli.file)?;

    if cli.tokens {
        for token in Lexer::new(&text).tokenize() {
            println!("{}", token);
        }
        return Ok(());
    }

    let output = match analyze(&text, cli.debug) {
        Ok(output) => output,
        Err(err) => {
            let err = err.downcast::<ParseError>()?;

            eprintln!("{}", err.to_string().red());
            if cli.debug {
                let ParseErrorType::Expected { got, .. } = &err.error;
                eprintln!("{}", format!("  found {:?}", got).red());
            }

            std::process::exit(1);
        }
    };

    print!("{}", output);
    Ok(())
}
