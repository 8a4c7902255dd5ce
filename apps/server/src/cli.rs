use clap::{ArgAction, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this configuration file instead of the one in the user config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the search endpoint over HTTP
    Serve {
        /// Address to listen on (overrides `bind-address`)
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Content directory (overrides `content-root`)
        #[arg(long)]
        content_root: Option<PathBuf>,
        /// Build the index before accepting requests instead of on the first query
        #[arg(long)]
        eager: bool,
    },
    /// Build the index once and list the indexed documents
    Index {
        /// Content directory (defaults to `content-root` from the config file)
        root_path: Option<PathBuf>,
    },
    /// Run a single query and print the ranked results
    Search {
        query: String,
        /// Content directory (overrides `content-root`)
        #[arg(long)]
        content_root: Option<PathBuf>,
    },
}
