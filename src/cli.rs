use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a tagged stream, one sentence per line
    Translate {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Transfer direction, e.g. eng-kaz (overrides the config file)
        #[arg(short, long)]
        direction: Option<String>,

        /// Do not prefix output words with '^'
        #[arg(long)]
        no_caret: bool,
    },

    /// Translate all tagged files in a directory
    Batch {
        /// Input directory containing tagged files
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Output directory for translated files
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Transfer direction, e.g. eng-kaz (overrides the config file)
        #[arg(short, long)]
        direction: Option<String>,

        /// Extension of the files to translate
        #[arg(short, long, default_value = "txt")]
        extension: String,
    },

    /// List the transfer directions served by the configured language pairs
    Directions,

    /// Load the tables for a direction and report their size
    Check {
        /// Transfer direction, e.g. eng-kaz (overrides the config file)
        #[arg(short, long)]
        direction: Option<String>,
    },

    /// Write the default configuration as TOML
    InitConfig {
        /// Output file
        #[arg(short, long, default_value = "tagxfer.toml")]
        output: PathBuf,
    },
}
