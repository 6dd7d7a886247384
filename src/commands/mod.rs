//! Command-line boundary over the storage core.
//!
//! Plays the part of the request layer: it turns arguments and JSON bodies
//! into typed records, calls `create` / `list`, prints stored records as JSON
//! (or a table) and maps failures onto distinct exit codes.

pub mod create;
pub mod init;
pub mod list;

use crate::db::db::{Store, StoreConfig};
use crate::libs::error::StoreError;
use crate::libs::messages::macros::is_debug_mode;
use crate::msg_error;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for rejected input (`EX_DATAERR`).
pub const EXIT_VALIDATION: u8 = 65;
/// Exit code for an unreachable store or failed commit (`EX_IOERR`).
pub const EXIT_UNAVAILABLE: u8 = 74;
/// Exit code for lock contention; retrying may succeed (`EX_TEMPFAIL`).
pub const EXIT_BUSY: u8 = 75;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create the store file and schema")]
    Init(init::InitArgs),
    #[command(about = "List all records of an entity as JSON")]
    List(list::ListArgs),
    #[command(about = "Create a record from JSON and print it as stored")]
    Create(create::CreateArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Create(args) => create::cmd(args),
        }
    }
}

/// Installs a `tracing` subscriber when debug output is requested.
pub fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mockexam=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Opens the store, creating its directory when missing.
pub(crate) fn open_store(store_config: StoreConfig) -> Result<Store> {
    if let Some(parent) = store_config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(Store::open(store_config)?)
}

/// Exit code for a failure, chosen by the underlying [`StoreError`] kind.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<StoreError>() {
        Some(StoreError::Validation { .. }) => EXIT_VALIDATION,
        Some(StoreError::Busy(_)) => EXIT_BUSY,
        Some(StoreError::Unavailable { .. }) | Some(StoreError::Commit(_)) => EXIT_UNAVAILABLE,
        Some(StoreError::Constraint(_)) => EXIT_VALIDATION,
        Some(StoreError::Sql(_)) => 1,
        None if err.downcast_ref::<serde_json::Error>().is_some() => EXIT_VALIDATION,
        None => 1,
    }
}

pub fn report_failure(err: &anyhow::Error) -> ExitCode {
    msg_error!(format!("{:#}", err));
    ExitCode::from(exit_code(err))
}
