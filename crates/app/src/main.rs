//! huffsize: report the Huffman-coded size of a message.
//!
//! Reads a message (stdin line, `--message`, or `--generate`), runs it
//! through the core pipeline and prints the size report, or the FNV-1 hash
//! in `hash` mode.

mod config;
mod input_gen;

use std::io::{self, BufRead};
use std::process::ExitCode;

use config::{Config, MessageSource, Mode};
use huffsize_core::fnv::{fnv1_32, format_hash_32};
use huffsize_core::{compress_message, CompressionReport, Result};
use log::{debug, info};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run with --help for usage");
            return ExitCode::FAILURE;
        }
    };

    if config.show_help {
        config::print_help();
        return ExitCode::SUCCESS;
    }

    init_logging(config.verbose);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(config: &Config) -> Result<()> {
    if config.print_config {
        config.print();
    }

    if let Some(notice) = config.seed_notice() {
        info!("no --seed given, using time-based seed");
        println!("{notice}");
    }

    let message = load_message(&config.source)?;
    info!("processing message of {} chars", message.chars().count());

    match config.mode {
        Mode::Compress => {
            let compression = compress_message(&message)?;
            let report = CompressionReport::new(&compression, config.preview_bits);

            if let Some(tree) = &compression.tree {
                debug!("tree: {} leaves, depth {}", tree.leaf_count(), tree.depth());
            }

            if config.export {
                print!("{}", report.export_text());
            } else {
                println!();
                print!("{}", report.render());
            }
        }
        Mode::Hash => {
            let hash = fnv1_32(message.as_bytes());

            println!();
            println!("FNV-1 (32-bit) hash of the message:");
            println!("  Message: {message}");
            println!("  Hash (hex): {}", format_hash_32(hash));
            println!("  Hash (decimal): {hash}");
        }
    }

    Ok(())
}

fn load_message(source: &MessageSource) -> Result<String> {
    match source {
        MessageSource::Literal(text) => Ok(text.clone()),
        MessageSource::Generated { seed, length } => {
            info!("generating {length}-char message with seed {seed}");
            Ok(input_gen::generate_sample_message(*seed, *length))
        }
        MessageSource::Stdin => read_line(io::stdin().lock()),
    }
}

/// Read one line without its line terminator; EOF yields an empty message.
fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
