//! CLI argument parsing using clap.

use clap::ArgAction;
use clap::Parser;
use clap::ValueEnum;
use clap::builder::RangedU64ValueParser;
use deepjar_core::config::DEFAULT_MAX_DEPTH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deepjar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JAR/ZIP files to list
    #[arg(value_name = "ARCHIVE", required = true)]
    pub archives: Vec<PathBuf>,

    /// Show contents of manifest files
    #[arg(short = 'm', long)]
    pub manifest: bool,

    /// Show line numbers for displayed files
    #[arg(short = 'l', long)]
    pub line_numbers: bool,

    /// Show contents of XML files
    #[arg(short = 'x', long)]
    pub xml: bool,

    /// Show the size of each file
    #[arg(short = 'z', long)]
    pub size: bool,

    /// Show the MD5 hash of each file
    #[arg(short = '5', long)]
    pub md5: bool,

    /// Show contents of files with these comma-delimited extensions
    #[arg(short = 'e', long, value_name = "LIST")]
    pub extensions: Vec<String>,

    /// Only list plain files whose full path matches this regex
    #[arg(short = 'f', long, value_name = "REGEX")]
    pub filter: Option<String>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, value_name = "WHEN")]
    pub color: ColorWhen,

    /// Largest member to load into memory, in bytes (K, M, G, T suffixes)
    #[arg(long, default_value = "128M", value_parser = parse_byte_size, value_name = "BYTES")]
    pub max_size: u64,

    /// Deepest archive nesting level to open
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        value_name = "N"
    )]
    pub max_depth: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    /// Color when writing to a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}
