// src/main.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use huffpress::{codec, logger};

#[derive(Parser)]
#[command(name = "huffpress", version = "1.0")]
#[command(about = "A Huffman-coding file compressor.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a .huff artifact
    Compress { input: PathBuf, output: PathBuf },
    /// Restore the original file from a .huff artifact
    Decompress { input: PathBuf, output: PathBuf },
}

fn main() {
    logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    let span = tracing::info_span!("command_execution", command = ?std::env::args().collect::<Vec<_>>());
    let _enter = span.enter();

    let result = match cli.command {
        Commands::Compress { input, output } => codec::compress_file(&input, &output),
        Commands::Decompress { input, output } => codec::decompress_file(&input, &output),
    };

    if let Err(err) = result {
        tracing::error!("{err}");
        process::exit(1);
    }
}
