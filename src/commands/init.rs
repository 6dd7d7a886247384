//! Store initialization command.
//!
//! Creates the store file and every table, optionally persisting the chosen
//! location and timeout to `config.json` for later runs.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Store file to use instead of the default location
    #[arg(long)]
    db: Option<PathBuf>,

    /// Seconds to wait for the write lock
    #[arg(long)]
    busy_timeout: Option<f64>,

    /// Reject records whose parent ids do not exist
    #[arg(long)]
    foreign_keys: bool,

    /// Write the settings to config.json
    #[arg(short, long)]
    save: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let mut config = Config::read()?;
    if let Some(db) = init_args.db {
        config.db_path = Some(db);
    }
    if let Some(secs) = init_args.busy_timeout {
        config.busy_timeout_secs = secs;
    }
    if init_args.foreign_keys {
        config.foreign_keys = true;
    }

    if init_args.save {
        config.save()?;
        msg_success!(Message::ConfigSaved);
    }

    let store = super::open_store(config.store_config())?;
    msg_success!(Message::StoreReady(store.path().display().to_string()));
    Ok(())
}
