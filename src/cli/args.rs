//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translatable strings into a PO catalog
//! - `init`: Initialize a `.gettextrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the source tree.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output PO file (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Add source file references (#:) to entries
    #[arg(long)]
    pub include_reference: bool,

    /// Directory name stripped from the front of references
    #[arg(long)]
    pub base_dir: Option<String>,

    /// Print the merged catalog as JSON instead of writing a PO file
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct InitArgs {
    /// Directory to create the config file in (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub args: InitArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings from JS/JSX/TS sources into a PO catalog
    Extract(ExtractCommand),
    /// Initialize a new .gettextrc.json configuration file
    Init(InitCommand),
}
