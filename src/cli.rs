use clap::Parser;
use std::path::PathBuf;

pub const VERSION: &str = "0.4.2";

#[derive(Debug, Parser)]
#[command(name = "dirsnap")]
#[command(version = VERSION)]
#[command(about = "Snapshots a directory tree into a single Markdown document")]
#[command(
    long_about = "Snapshots a directory tree into a single Markdown document.\n\nEvery file under the target directory is emitted as a `##` heading plus a\nfenced code block with its content. Substring patterns select what gets\nincluded, and sensitive values in embedded JSON files are masked by default."
)]
pub struct Args {
    /// Skip entries whose name contains this substring (repeatable)
    #[arg(short = 'i', long = "ignore", value_name = "PATTERN")]
    pub ignore_patterns: Vec<String>,

    /// Only include top-level entries whose name contains this substring (repeatable)
    #[arg(short = 'f', long = "focus", value_name = "PATTERN")]
    pub focus_patterns: Vec<String>,

    /// Write the document to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Load patterns and defaults from a JSON config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prepend a plain-text outline of the filtered tree
    #[arg(long = "outline")]
    pub outline: bool,

    /// Do not mask sensitive values in embedded JSON files
    #[arg(long = "no-obfuscate")]
    pub no_obfuscate: bool,

    /// Directory to snapshot (defaults to current directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,
}
