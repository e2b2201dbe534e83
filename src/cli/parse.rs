//! CLI parse: clap types for ufs. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ufs - inspect files and directories, hash contents, ensure directories
#[derive(Parser, Debug)]
#[command(name = "ufs")]
#[command(version, about = "Inspect filesystem paths and hash file contents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (replaces the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Enable debug logging
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report file metadata, or recursive totals for a directory
    Search {
        /// File or directory to inspect
        path: PathBuf,
        /// Descend into symlinked directories (loops are reported as errors)
        #[arg(long)]
        follow_symlinks: bool,
        /// Do not descend into symlinked directories, even if the config enables it
        #[arg(long, conflicts_with = "follow_symlinks")]
        no_follow_symlinks: bool,
        /// Limit recursion depth below the directory
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Print the hex digest of a file's contents
    Hash {
        /// File to hash
        path: PathBuf,
        /// Digest algorithm (default from config, else sha256)
        #[arg(long, short = 'a')]
        algorithm: Option<String>,
    },
    /// Create a directory and its parents if missing; print its resolved path
    EnsureDir {
        /// Directory to create
        path: PathBuf,
    },
    /// List supported digest algorithms
    Algorithms,
}
