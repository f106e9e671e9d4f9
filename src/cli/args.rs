//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// JD Librarian: manage a Johnny Decimal library on disk
#[derive(Parser, Debug)]
#[command(name = "jd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Root of the Johnny Decimal library (default: $JD_ROOT or ~/jd)
    #[arg(long = "jd-root", global = true, value_hint = ValueHint::DirPath)]
    pub jd_root: Option<PathBuf>,

    /// Config file (default: ~/.config/jdlib/jdlib.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Don't change anything, print what would happen
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search categories, identifiers and files
    Search {
        /// Case-insensitive search term
        term: String,
        /// Prefix identifier matches with their category
        #[arg(short = 'c', long)]
        include_category: bool,
        /// Also match file names
        #[arg(short = 'f', long)]
        include_files: bool,
    },

    /// Show a category and its identifiers
    Show {
        /// Category code, e.g. 11
        category: String,
    },

    /// Add a category in the next free slot of an area
    AddCategory {
        /// Start of the area range, e.g. 20
        area: String,
        /// Name of the new category
        name: String,
    },

    /// Add an identifier in the next free slot of a category
    AddId {
        /// Category code, e.g. 11
        category: String,
        /// Name of the new identifier
        name: String,
        /// Create an empty <name>.md inside
        #[arg(short, long)]
        placeholder: bool,
    },

    /// Print the library tree
    Tree {
        /// Spaces per level
        #[arg(long)]
        indent: Option<usize>,
        /// Indent with tabs
        #[arg(long)]
        tabs: bool,
        /// Include files
        #[arg(long)]
        files: bool,
        /// Draw with box characters
        #[arg(long)]
        fancy: bool,
    },

    /// Report names breaking Johnny Decimal conventions
    Validate,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show global config file location
    Path,
    /// Print a commented config template
    Template,
}
