use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// A tool to filter and inspect captured network-request records
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter records from a capture file and print the matches
    Filter {
        /// JSON file with an array of captured records
        #[arg(short, long)]
        file: PathBuf,

        /// Filter expression (e.g. "status:2XX host:example.com")
        #[arg(short = 'e', long = "filter")]
        expression: Option<String>,

        /// JSON file with a saved (serialized) filter set
        #[arg(short, long)]
        saved: Option<PathBuf>,

        /// Output format
        #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List distinct hosts, methods, and status classes in a capture file
    Info {
        /// JSON file with an array of captured records
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Run a filter expression against the built-in demo records
    Demo {
        /// Filter expression (e.g. "method:GET path:/v1")
        #[arg(short = 'e', long = "filter")]
        expression: Option<String>,

        /// Output format
        #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
