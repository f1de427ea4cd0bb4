// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/main.rs
// Command-line entry point for the shell

use clap::{ArgAction, Parser, Subcommand};
use primrec_calculus::{Registry, Shell};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "primrec")]
#[command(about = "Build and evaluate primitive recursive functions")]
#[command(version)]
struct Cli {
    /// Log more (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive shell (the default)
    Repl,
    /// Evaluate a single expression and print the result
    Eval {
        /// Expression such as `add(3, mult(2, 2))`
        expr: String,
    },
    /// List every name the shell knows
    List,
}

fn main() -> io::Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let shell = Shell::new(Registry::standard());

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            println!("Primitive Recursive Functions v{}", env!("CARGO_PKG_VERSION"));
            println!("Primitives: zero, succ, proj, compose, prim_rec, search");
            println!("Type 'quit' to exit, 'help' for examples.");
            println!();

            shell.run(io::stdin().lock(), io::stdout())?;
            println!("Goodbye!");
        }

        Commands::Eval { expr } => match shell.eval_line(&expr) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("error: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        },

        Commands::List => {
            let mut out = io::stdout().lock();
            shell.write_listing(&mut out)?;
            out.flush()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
