use std::path::PathBuf;

use clap::Parser;

/// Recap AI result relay
#[derive(Debug, Parser)]
#[command(name = "recap", about = "Streams AI completions generated from stored video transcriptions")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "recap.toml", env = "RECAP_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "RECAP_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
