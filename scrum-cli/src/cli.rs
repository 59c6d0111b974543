use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scrumagent")]
#[command(about = "ScrumAgent planning service CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Server port (falls back to the PORT environment variable, then 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
