//! Solves a single Sudoku puzzle read from a file.
//!
//! # Usage
//!
//! ```sh
//! rapidoku puzzle.txt
//! ```
//!
//! The file holds one puzzle: 81 significant characters with digits 1-9 as
//! givens and any other character as a blank. Whitespace is ignored, so
//! both one-line and 9x9 grid layouts work.

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::info;
use rapidoku_core::Board;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File containing the puzzle to solve.
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.file)?;
    let board: Board = text.parse()?;

    println!("{board}");
    println!();

    let solution = board.solve();
    info!("search finished in {:?}", solution.elapsed());

    if !solution.solved().is_solved() {
        return Err("puzzle has no solution".into());
    }

    println!("{}", solution.solved());
    println!();
    println!("Solved in {:?}", solution.elapsed());
    Ok(())
}
