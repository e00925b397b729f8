use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `Pod042` - Deterministic persona styling for language-model output.
#[derive(Parser, Debug)]
#[command(name = "pod042")]
#[command(version = "0.1.0")]
#[command(about = "Style raw model output in the Pod042 voice.", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.pod042/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the category a raw utterance is classified as
    Classify {
        /// Raw model output
        text: String,

        /// Previous turn, consulted for question markers
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Run the full styling pipeline on one utterance
    Format {
        /// Raw model output
        text: String,

        /// Previous turn, consulted for question markers
        #[arg(short, long)]
        context: Option<String>,

        /// Familiarity level (0.0 - 5.0) used for the overlay step
        #[arg(short, long, default_value = "0.0")]
        level: f64,
    },

    /// Replay a JSON transcript through a fresh persona session
    Replay {
        /// JSON array of {"user", "text", "context"} turns
        path: PathBuf,

        /// Emit one JSON object per turn instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Print the system instruction handed to the orchestration layer
    Instruction,
}
