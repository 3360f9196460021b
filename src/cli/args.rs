//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyze`: Find translation keys that are defined but never used
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::{ScannerPreference, scan::ripgrep::DEFAULT_RIPGREP};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Analyze(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// English messages file (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub en_messages: Option<PathBuf>,

    /// Turkish messages file (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub tr_messages: Option<PathBuf>,

    /// Source directory to scan (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub source_root: Option<PathBuf>,

    /// Report file to write (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Scanning strategy (overrides config file)
    #[arg(long, value_enum)]
    pub scanner: Option<ScannerPreference>,

    /// Maximum number of unused keys printed to the console
    #[arg(long, value_name = "N")]
    pub max_unused: Option<usize>,

    /// Maximum number of used keys printed to the console
    #[arg(long, value_name = "N")]
    pub max_used: Option<usize>,

    /// ripgrep executable used by the accelerated scanner
    #[arg(long, env = "UNUSED_I18N_RG", default_value = DEFAULT_RIPGREP)]
    pub rg_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    #[command(flatten)]
    pub args: AnalyzeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find translation keys that are defined in locale files but never used
    Analyze(AnalyzeCommand),
    /// Initialize a new .unusedi18nrc.json configuration file
    Init,
}
