//! # ttr-config
//!
//! **Tier 4 (Configuration)**
//!
//! Clap definitions for the `ttr` command line. Settings that also live in
//! `ttr.toml` are optional here so an absent flag can fall back to the file.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Layering flags over [`Settings`]
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
pub use ttr_settings::{Settings, SettingsError, TokenizerSettings, TtrConfig};
pub use ttr_types::{JsonOptions, OutputFormat};

/// Name of the settings file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ttr.toml";

/// `ttr`: type-token ratio statistics for plain-text documents.
#[derive(Parser, Debug)]
#[command(name = "ttr", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file. Defaults to `ttr.toml` in the working directory when present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compute TTR metrics for one or more text files.
    Analyze(AnalyzeArgs),

    /// Summarize previously computed results (JSON or JSONL) as one group.
    Aggregate(AggregateArgs),

    /// Print the per-chunk TTR series as CSV.
    Chunks(ChunksArgs),

    /// Print the normalized tokens of a file, one per line.
    Tokenize(TokenizeArgs),
}

/// Overrides for calculator and tokenizer settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ComputeArgs {
    /// Drop tokens made entirely of digits.
    #[arg(long)]
    pub strip_numbers: bool,

    /// Minimum token count before standardized TTR is computed.
    #[arg(long = "min-words", value_name = "N")]
    pub min_words: Option<usize>,

    /// Tokens per standardized-TTR chunk.
    #[arg(long = "chunk-size", value_name = "N")]
    pub chunk_size: Option<usize>,
}

impl ComputeArgs {
    /// Layer these flags over `base`; a flag wins over the file.
    ///
    /// `strip_numbers` can only switch stripping on, never off.
    pub fn apply(&self, base: Settings) -> Result<Settings, SettingsError> {
        let ttr = TtrConfig::new(
            self.min_words.unwrap_or(base.ttr.min_words_for_sttr()),
            self.chunk_size.unwrap_or(base.ttr.sttr_chunk_size()),
            base.ttr.return_chunk_details(),
        )?;
        let tokenizer = TokenizerSettings {
            strip_numbers: self.strip_numbers || base.tokenizer.strip_numbers,
        };
        Ok(Settings { ttr, tokenizer })
    }
}

/// JSON rendering switches shared by commands that print results.
#[derive(Args, Debug, Clone, Default)]
pub struct JsonArgs {
    /// Write `null` for absent fields instead of omitting them.
    #[arg(long)]
    pub include_none: bool,

    /// Single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

impl From<&JsonArgs> for JsonOptions {
    fn from(args: &JsonArgs) -> Self {
        JsonOptions {
            exclude_none: !args.include_none,
            pretty: !args.compact,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text files to analyze. Use `-` for stdin.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Text id for a single input (default: file stem).
    #[arg(long)]
    pub id: Option<String>,

    /// Title for a single input.
    #[arg(long)]
    pub title: Option<String>,

    /// Author for a single input.
    #[arg(long)]
    pub author: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Keep per-chunk TTR values in the output.
    #[arg(long)]
    pub chunks: bool,

    /// Also print an aggregate over all inputs under this group id.
    #[arg(long, value_name = "GROUP")]
    pub aggregate: Option<String>,

    #[command(flatten)]
    pub compute: ComputeArgs,

    #[command(flatten)]
    pub json: JsonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct AggregateArgs {
    /// Result files written by `ttr analyze --format json|jsonl`. Use `-` for stdin.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Group id for the aggregate.
    #[arg(long, default_value = "all")]
    pub group: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub json: JsonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ChunksArgs {
    /// Text file to chunk. Use `-` for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Text id used in the `text_id` column (default: file stem).
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub compute: ComputeArgs,
}

#[derive(Args, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text file to tokenize. Use `-` for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Drop tokens made entirely of digits.
    #[arg(long)]
    pub strip_numbers: bool,
}
