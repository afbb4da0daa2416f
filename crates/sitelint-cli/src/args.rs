use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "sitelint",
    version,
    about = "Check a web page against security, accessibility, SEO and performance best practices"
)]
pub struct Args {
    /// Absolute http(s) URL of the page to analyse
    #[arg(required_unless_present = "list_sources")]
    pub url: Option<String>,

    /// Restrict rules to a source id, id prefix or source name fragment
    #[arg(long, short = 's')]
    pub source: Option<String>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Config file (default: ./sitelint.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fetch timeout in seconds, overriding the config file
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Evaluate rules on the calling thread
    #[arg(long)]
    pub sequential: bool,

    /// Exit with status 1 when the score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,

    /// Log filter, e.g. `info` or `sitelint_core=debug`; RUST_LOG wins when set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print the rule sources and exit
    #[arg(long)]
    pub list_sources: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
