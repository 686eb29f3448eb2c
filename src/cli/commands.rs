use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "infinite-scroll", version, about = "The Infinite Scroll content and chat server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the config file path globally
    #[arg(short, long, global = true, default_value = "config.yaml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve,

    /// Talk to Gary from the terminal
    Chat {
        /// Thread to file the messages under
        #[arg(short, long)]
        thread: Option<String>,

        /// spring, summer, autumn or winter
        #[arg(short, long)]
        season: Option<String>,

        #[arg(short, long)]
        username: Option<String>,
    },

    /// List the stored messages of a thread
    Thread {
        id: String,
    },

    /// Print the books and TV work served by the API
    Catalog,
}
