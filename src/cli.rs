use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mailbox-pager: compute cursor keys and walk mailbox lists.
#[derive(Parser, Debug)]
#[command(name = "mailbox-pager", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the previous, current and next keys around a loaded page
    Adjacent(AdjacentArgs),

    /// Print the key that re-fetches every loaded item
    Refresh(RefreshArgs),

    /// Print the remote list query for a key
    Query(QueryArgs),

    /// Load pages one after another until the list ends
    Walk(WalkArgs),
}

/// Arguments for the `adjacent` subcommand.
#[derive(Parser, Debug)]
pub struct AdjacentArgs {
    /// JSON file with the page items, sorted in the key's direction
    #[arg(long)]
    pub items: PathBuf,

    /// JSON file with the key the page was loaded with
    #[arg(long)]
    pub key: PathBuf,

    /// Size of the adjacent pages
    #[arg(long, default_value = "25")]
    pub page_size: usize,
}

/// Arguments for the `refresh` subcommand.
#[derive(Parser, Debug)]
pub struct RefreshArgs {
    /// JSON file with every loaded item
    #[arg(long)]
    pub items: PathBuf,

    /// JSON file with the initial key
    #[arg(long)]
    pub key: PathBuf,
}

/// Arguments for the `query` subcommand.
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// JSON file with the key to translate
    #[arg(long)]
    pub key: PathBuf,
}

/// Arguments for the `walk` subcommand.
#[derive(Parser, Debug)]
pub struct WalkArgs {
    /// JSON file with mailbox items; the remote API is used when absent
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Items per page [default: 25]
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Walk from the oldest item instead of the newest
    #[arg(long)]
    pub ascending: bool,

    /// Label to list
    #[arg(long, default_value = "0")]
    pub label: String,

    /// List conversations instead of messages
    #[arg(long)]
    pub conversations: bool,

    /// Output as JSON instead of TSV
    #[arg(long)]
    pub json: bool,
}
