use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::scanner::parse_size;

fn size_in_bytes(s: &str) -> Result<u64, String> {
    parse_size(s).ok_or_else(|| format!("invalid size '{}' (try 1073741824 or 1GB)", s))
}

/// Quotamon - quota alerting for shared network filesystems
#[derive(Parser, Debug)]
#[command(name = "quotamon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a managed filesystem against its quota and send alerts
    Check(CheckArgs),

    /// Report over-quota directories without sending anything
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Name of the managed filesystem to check
    #[arg(short, long, value_name = "NAME")]
    pub filesystem: String,

    /// Maximum allowed filesystem size (bytes, or with a suffix like 1GB)
    #[arg(short = 's', long, value_parser = size_in_bytes, value_name = "SIZE")]
    pub max_size: u64,

    /// Local mount path; enables per-user directory checks
    #[arg(short, long, value_name = "PATH")]
    pub mount: Option<PathBuf>,

    /// Maximum allowed size per user directory (defaults to --max-size)
    #[arg(long, value_parser = size_in_bytes, value_name = "SIZE")]
    pub user_max_size: Option<u64>,

    /// Depth of user directories below the mount path
    #[arg(short, long, value_name = "N")]
    pub depth: Option<usize>,

    /// Sender address (overrides config)
    #[arg(long, value_name = "ADDR")]
    pub from: Option<String>,

    /// Operator recipient address, repeatable (overrides config)
    #[arg(short, long, value_name = "ADDR")]
    pub to: Vec<String>,

    /// Also email each offending user individually
    #[arg(long)]
    pub notify_users: bool,

    /// Render notifications instead of sending them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Traversal error policy (skip, abort)
    #[arg(long, default_value = "skip", value_name = "POLICY")]
    pub on_error: String,

    /// Mount table to resolve the filesystem name from
    #[arg(long, default_value = "/proc/mounts", value_name = "PATH")]
    pub mounts_file: PathBuf,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory whose subdirectories are checked
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Quota applied to each directory (bytes, or with a suffix like 1GB)
    #[arg(short = 's', long, value_parser = size_in_bytes, value_name = "SIZE")]
    pub max_size: u64,

    /// Depth of candidate directories below the path
    #[arg(short, long, default_value = "1", value_name = "N")]
    pub depth: usize,

    /// Traversal error policy (skip, abort)
    #[arg(long, default_value = "skip", value_name = "POLICY")]
    pub on_error: String,

    /// Decimal places when rendering sizes
    #[arg(long, default_value = "1", value_name = "N")]
    pub rounding: usize,
}
