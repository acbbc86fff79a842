//! Solves a file of Sudoku puzzles, one per line, on a worker pool.
//!
//! # Usage
//!
//! ```sh
//! rapidoku-batch puzzles.txt
//! rapidoku-batch puzzles.txt --workers 4
//! ```
//!
//! Each solved puzzle is printed as it completes (original, solution, and
//! solve time), followed by a batch summary. Completion order is not input
//! order.

use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::info;
use rapidoku_pipeline::{default_workers, solve_stream};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File containing one puzzle per line.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Number of solver threads. Defaults to the available parallelism.
    #[arg(long, value_name = "COUNT")]
    workers: Option<usize>,
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
    let workers = args.workers.unwrap_or_else(default_workers);
    info!("solving {} with {workers} workers", args.file.display());

    let file = BufReader::new(File::open(&args.file)?);
    let summary = solve_stream(file, workers, |solution| {
        println!("{solution}");
    })?;

    println!("{summary}");
    if let Some(hardest) = summary.hardest() {
        println!(
            "Hardest puzzle: {} ({:?})",
            hardest.original().short_string(),
            hardest.elapsed()
        );
    }
    Ok(())
}
