//! Configuration for the huffsize application.
//!
//! Handles parsing command-line arguments. With no arguments the tool reads
//! one line from stdin and prints the compression report for it.
//!
//! Generated messages are driven by a seed; when none is given a time-based
//! seed is chosen and printed before the report so runs are reproducible.

use std::str::FromStr;

use huffsize_core::report::DEFAULT_PREVIEW_BITS;
use huffsize_core::{Error, Result};

/// What to do with the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Huffman size report
    Compress,
    /// FNV-1 32-bit hash
    Hash,
}

/// Where the message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// One line read from stdin
    Stdin,
    /// Given on the command line
    Literal(String),
    /// Generated from a seed
    Generated { seed: u64, length: usize },
}

/// Complete configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,

    pub source: MessageSource,

    /// Maximum number of encoded bits shown in the report
    pub preview_bits: usize,

    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to enable debug logging
    pub verbose: bool,

    /// Whether to print key=value sizes instead of the full report
    pub export: bool,

    /// Whether `--help` was requested
    pub show_help: bool,

    /// Whether the generator seed came from the clock rather than `--seed`
    pub time_seeded: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut mode = Mode::Compress;
        let mut message: Option<String> = None;
        let mut generate: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut preview_bits: Option<usize> = None;
        let mut print_config = false;
        let mut verbose = false;
        let mut export = false;
        let mut show_help = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "compress" => mode = Mode::Compress,
                "hash" => mode = Mode::Hash,
                "--message" | "-m" => {
                    message = Some(required_value(args, &mut i, "--message requires text")?.to_string());
                }
                "--generate" => {
                    let value = required_value(args, &mut i, "--generate requires a length")?;
                    generate = Some(parse_number(value, "generate length")?);
                }
                "--seed" => {
                    let value = required_value(args, &mut i, "--seed requires a number")?;
                    seed = Some(parse_number(value, "seed")?);
                }
                "--preview-bits" => {
                    let value = required_value(args, &mut i, "--preview-bits requires a number")?;
                    preview_bits = Some(parse_number(value, "preview-bits")?);
                }
                "--print-config" => print_config = true,
                "--verbose" | "-v" => verbose = true,
                "--export" => export = true,
                "--help" | "-h" => show_help = true,
                other => return Err(Error::Config(format!("unknown argument: {other}"))),
            }
            i += 1;
        }

        let time_seeded = generate.is_some() && seed.is_none();
        let source = match (message, generate) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(
                    "--message and --generate are mutually exclusive".to_string(),
                ));
            }
            (Some(text), None) => MessageSource::Literal(text),
            (None, Some(length)) => MessageSource::Generated {
                seed: seed.unwrap_or_else(time_seed),
                length,
            },
            (None, None) => MessageSource::Stdin,
        };

        Ok(Config {
            mode,
            source,
            preview_bits: preview_bits.unwrap_or(DEFAULT_PREVIEW_BITS),
            print_config,
            verbose,
            export,
            show_help,
            time_seeded,
        })
    }

    /// Line announcing a clock-chosen seed, `None` when the run is already
    /// reproducible from its arguments.
    pub fn seed_notice(&self) -> Option<String> {
        match self.source {
            MessageSource::Generated { seed, .. } if self.time_seeded => Some(if self.export {
                format!("seed={seed}")
            } else {
                format!("Seed: {seed} (pass --seed {seed} to reproduce)")
            }),
            _ => None,
        }
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        match &self.source {
            MessageSource::Stdin => println!("Message: (stdin)"),
            MessageSource::Literal(text) => println!("Message: {text:?}"),
            MessageSource::Generated { seed, length } => {
                println!("Message: generated, {length} chars, seed {seed}");
            }
        }
        println!("Preview bits: {}", self.preview_bits);
        println!();
    }
}

/// Advance past a flag and return its value.
fn required_value<'a>(args: &'a [String], i: &mut usize, missing: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| Error::Config(missing.to_string()))
}

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("invalid {what}: {value}")))
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

pub fn print_help() {
    println!("huffsize: Huffman-coded size of a message, and its FNV-1 hash");
    println!();
    println!("USAGE:");
    println!("    huffsize [compress|hash] [OPTIONS]");
    println!();
    println!("MODES:");
    println!("    compress                Huffman size report (default)");
    println!("    hash                    FNV-1 32-bit hash of the UTF-8 bytes");
    println!();
    println!("OPTIONS:");
    println!("    --message, -m <TEXT>    Message to process (default: one line from stdin)");
    println!("    --generate <N>          Generate an N-character sample message");
    println!("    --seed <N>              Seed for --generate (default: time-based)");
    println!("    --preview-bits <N>      Encoded bits to show (default: {DEFAULT_PREVIEW_BITS})");
    println!("    --export                Print key=value sizes instead of the report");
    println!("    --print-config          Print resolved configuration");
    println!("    --verbose, -v           Enable debug logging (RUST_LOG also works)");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    echo 'abracadabra' | huffsize");
    println!("    huffsize -m aaaa");
    println!("    huffsize --generate 2000 --seed 42");
    println!("    huffsize hash -m 'hello world'");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&[]).unwrap();

        assert_eq!(config.mode, Mode::Compress);
        assert_eq!(config.source, MessageSource::Stdin);
        assert_eq!(config.preview_bits, DEFAULT_PREVIEW_BITS);
        assert!(!config.print_config);
        assert!(!config.verbose);
        assert!(!config.export);
        assert!(!config.time_seeded);
        assert_eq!(config.seed_notice(), None);
    }

    #[test]
    fn test_hash_mode_with_message() {
        let config = Config::from_args(&args(&["hash", "-m", "hello world"])).unwrap();

        assert_eq!(config.mode, Mode::Hash);
        assert_eq!(config.source, MessageSource::Literal("hello world".to_string()));
    }

    #[test]
    fn test_generate_with_seed() {
        let config = Config::from_args(&args(&["--generate", "100", "--seed", "7"])).unwrap();

        assert_eq!(config.source, MessageSource::Generated { seed: 7, length: 100 });
        assert!(!config.time_seeded);
        assert_eq!(config.seed_notice(), None);
    }

    #[test]
    fn test_time_seed_is_announced() {
        let config = Config::from_args(&args(&["--generate", "100"])).unwrap();
        assert!(config.time_seeded);

        let MessageSource::Generated { seed, length } = config.source.clone() else {
            panic!("expected a generated source, got {:?}", config.source);
        };
        assert_eq!(length, 100);
        assert_eq!(
            config.seed_notice(),
            Some(format!("Seed: {seed} (pass --seed {seed} to reproduce)"))
        );

        let exported = Config::from_args(&args(&["--generate", "10", "--export"])).unwrap();
        let notice = exported.seed_notice().unwrap();
        assert!(notice.starts_with("seed="));
        assert!(notice["seed=".len()..].parse::<u64>().is_ok());
    }

    #[test]
    fn test_flags() {
        let config =
            Config::from_args(&args(&["--preview-bits", "16", "--export", "-v", "--print-config"])).unwrap();

        assert_eq!(config.preview_bits, 16);
        assert!(config.export);
        assert!(config.verbose);
        assert!(config.print_config);
    }

    #[test]
    fn test_errors() {
        for bad in [
            &["--message"][..],
            &["--seed", "abc"],
            &["--bogus"],
            &["-m", "x", "--generate", "5"],
        ] {
            let err = Config::from_args(&args(bad)).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{bad:?} gave {err:?}");
        }
    }

    #[test]
    fn test_error_messages() {
        let err = Config::from_args(&args(&["--seed", "abc"])).unwrap_err();
        assert_eq!(err.to_string(), "configuration error: invalid seed: abc");

        let err = Config::from_args(&args(&["--bogus"])).unwrap_err();
        assert_eq!(err.to_string(), "configuration error: unknown argument: --bogus");
    }
}
