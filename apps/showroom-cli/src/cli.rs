//! # CLI Argument Definitions
//!
//! Command-line structure, parsed with `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "showroom")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Configure and price a vehicle from the showroom catalog")]
pub struct Cli {
    /// Config file (default: showroom.toml in the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the models in the catalog
    Models,
    /// List the options and features offered for a model
    Options {
        /// Model id (e.g. 'sedan')
        model: String,
    },
    /// Price a configuration
    Quote(SessionArgs),
    /// Print a share code for a configuration
    Share(SessionArgs),
    /// Save a configuration under a name
    Save {
        /// Name to save under (letters, digits, '-' and '_')
        name: String,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Reopen a saved configuration and price it against the current catalog
    Load {
        name: String,
    },
    /// List saved configurations
    List,
    /// Delete a saved configuration
    Delete {
        name: String,
    },
}

/// Describes the configuration a command works on.
///
/// Starts from `--code` if given, otherwise from `--model` (or the configured
/// default model) with its default options; `--option` and `--feature` are
/// applied on top, in order.
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// Model id
    #[arg(short, long)]
    pub model: Option<String>,

    /// Option selection, repeatable
    #[arg(short = 'o', long = "option", value_name = "CATEGORY=ID", value_parser = parse_selection)]
    pub options: Vec<(String, String)>,

    /// Feature to enable, repeatable
    #[arg(short = 'f', long = "feature", value_name = "ID")]
    pub features: Vec<String>,

    /// Share code to start from
    #[arg(short, long, conflicts_with = "model")]
    pub code: Option<String>,
}

/// Parses a `category=id` pair.
pub fn parse_selection(raw: &str) -> Result<(String, String), String> {
    let (category, option) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=ID, got '{raw}'"))?;

    let (category, option) = (category.trim(), option.trim());
    if category.is_empty() || option.is_empty() {
        return Err(format!("expected CATEGORY=ID, got '{raw}'"));
    }

    Ok((category.to_string(), option.to_string()))
}
