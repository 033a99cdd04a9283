//! # Showroom CLI
//!
//! Command-line front end for the vehicle configurator.
//!
//! ## Module Organization
//! ```text
//! showroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── AppConfig (defaults, showroom.toml, SHOWROOM_*)
//! ├── error.rs        ◄─── ApiError for command failures
//! └── commands/
//!     ├── mod.rs      ◄─── Context, session building, Render
//!     ├── catalog.rs  ◄─── models, options
//!     ├── quote.rs    ◄─── quote, share
//!     └── saved.rs    ◄─── save, load, list, delete
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Load configuration
//! 4. Load the catalog
//! 5. Open the saved-configuration store (only for commands that use it)
//! 6. Run the command and print the response (text or `--json`)

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use clap::Parser;
use serde::Serialize;
use showroom_core::PriceFormat;
use showroom_store::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::{catalog, quote, saved, Context, Render};
use config::AppConfig;
use error::{ApiError, ApiResult};

/// Runs the CLI and returns the process exit status.
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_tracing();

    let json = cli.json;
    match execute(cli) {
        Ok(()) => 0,
        Err(err) => {
            report(&err, json);
            err.code.exit_code()
        }
    }
}

/// Executes one parsed command.
pub fn execute(cli: Cli) -> ApiResult<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(Some(path.as_path()))?,
        None => AppConfig::load_or_default(None),
    };

    let ctx = Context::from_config(&config)?;
    info!(models = ctx.catalog().models().count(), "Catalog ready");

    let json = cli.json;
    let format = ctx.format().clone();

    match cli.command {
        Command::Models => emit(&catalog::models(&ctx), json, &format),
        Command::Options { model } => emit(&catalog::options(&ctx, &model)?, json, &format),
        Command::Quote(args) => emit(&quote::quote(&ctx, &args)?, json, &format),
        Command::Share(args) => emit(&quote::share(&ctx, &args)?, json, &format),
        Command::Save { name, session } => {
            let mut store = open_store(&config)?;
            emit(&saved::save(&ctx, &mut store, &name, &session)?, json, &format)
        }
        Command::Load { name } => {
            let store = open_store(&config)?;
            emit(&saved::load(&ctx, &store, &name)?, json, &format)
        }
        Command::List => emit(&saved::list(&open_store(&config)?)?, json, &format),
        Command::Delete { name } => {
            let mut store = open_store(&config)?;
            emit(&saved::delete(&mut store, &name)?, json, &format)
        }
    }
}

fn open_store(config: &AppConfig) -> ApiResult<FileStore> {
    let store = match &config.store.dir {
        Some(dir) => FileStore::open(dir)?,
        None => FileStore::open_default()?,
    };
    Ok(store)
}

fn emit<T: Serialize + Render>(response: &T, json: bool, format: &PriceFormat) -> ApiResult<()> {
    if json {
        let out = serde_json::to_string_pretty(response)
            .map_err(|e| ApiError::internal(e.to_string()))?;
        println!("{out}");
    } else {
        print!("{}", response.render(format));
    }
    Ok(())
}

fn report(err: &ApiError, json: bool) {
    if json {
        match serde_json::to_string_pretty(err) {
            Ok(out) => println!("{out}"),
            Err(_) => eprintln!("{err}"),
        }
    } else {
        eprintln!("error: {}", err.message);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with command output.
///
/// ## Log Levels
/// - `RUST_LOG=showroom=debug` - Trace each command and store access
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
