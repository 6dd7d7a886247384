//! Connection lifecycle for the shared store file.
//!
//! Every repository operation opens its own [`Db`] handle, runs exactly one
//! statement through it and closes it again; no connection outlives the call
//! that opened it. Writes take the write lock up front (`BEGIN IMMEDIATE`),
//! waiting at most [`StoreConfig::busy_timeout`], and commit before the handle
//! is closed. Failures on any path still close the handle, and an uncommitted
//! transaction is rolled back when it is dropped.
//!
//! [`Store`] is the process-facing entry point: it initializes the file once
//! (WAL journal, schema) and then only carries configuration.

use crate::db::repository::{Record, Repository};
use crate::db::schema::{self, Entity};
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the store lives and how handles on it behave.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub path: PathBuf,
    /// Longest wait for a lock before the operation fails with
    /// [`StoreError::Busy`].
    pub busy_timeout: Duration,
    /// Enforce declared foreign-key references on every handle. Off by
    /// default: parent ids are stored as given.
    pub foreign_keys: bool,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            foreign_keys: false,
        }
    }

    pub fn busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn foreign_keys(mut self, foreign_keys: bool) -> Self {
        self.foreign_keys = foreign_keys;
        self
    }

    fn classify(&self, err: rusqlite::Error) -> StoreError {
        StoreError::classify(err, &self.path, self.busy_timeout)
    }
}

/// A single-use handle on the store.
pub struct Db<'a> {
    conn: Connection,
    config: &'a StoreConfig,
}

impl<'a> Db<'a> {
    /// Opens a handle on an existing store. A missing file is reported as
    /// [`StoreError::Unavailable`] rather than silently created.
    pub fn open(config: &'a StoreConfig) -> Result<Self, StoreError> {
        Self::connect(config, OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX)
    }

    fn connect(config: &'a StoreConfig, flags: OpenFlags) -> Result<Self, StoreError> {
        let unavailable = |source| StoreError::Unavailable {
            path: config.path.clone(),
            source,
        };

        let conn = Connection::open_with_flags(&config.path, flags).map_err(unavailable)?;
        conn.busy_timeout(config.busy_timeout).map_err(unavailable)?;
        conn.pragma_update(None, "foreign_keys", config.foreign_keys)
            .map_err(|err| config.classify(err))?;

        msg_debug!(Message::StoreOpened(config.path.display().to_string()));
        Ok(Self { conn, config })
    }

    /// Runs a read-only closure and closes the handle.
    pub fn read<T, F>(self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let outcome = f(&self.conn).map_err(|err| self.config.classify(err));
        let closed = self.close();
        let value = outcome?;
        closed?;
        Ok(value)
    }

    /// Runs `f` inside an immediate transaction, commits, and closes the
    /// handle. The transaction is rolled back if `f` fails.
    pub fn write<T, F>(mut self, entity: Entity, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Transaction) -> rusqlite::Result<T>,
    {
        let outcome = self.write_in_transaction(entity, f);
        let closed = self.close();
        let value = outcome?;
        closed?;
        Ok(value)
    }

    fn write_in_transaction<T, F>(&mut self, entity: Entity, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Transaction) -> rusqlite::Result<T>,
    {
        let config = self.config;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|err| config.classify(err))?;
        msg_debug!(Message::WriteLockAcquired(entity));

        let value = match f(&tx) {
            Ok(value) => value,
            Err(err) => {
                msg_debug!(Message::WriteRolledBack(entity, err.to_string()));
                return Err(config.classify(err));
            }
        };

        tx.commit().map_err(StoreError::Commit)?;
        msg_debug!(Message::WriteCommitted(entity));
        Ok(value)
    }

    fn close(self) -> Result<(), StoreError> {
        let Db { conn, config } = self;
        conn.close().map_err(|(_, source)| StoreError::Unavailable {
            path: config.path.clone(),
            source,
        })?;
        msg_debug!(Message::StoreClosed(config.path.display().to_string()));
        Ok(())
    }
}

/// Initialized store. Holds configuration only; handles are per operation.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// Creates the store file if needed, switches it to WAL journaling so
    /// readers proceed while a writer holds the lock, and applies the schema.
    pub fn open(config: StoreConfig) -> Result<Store, StoreError> {
        {
            let mut db = Db::connect(&config, OpenFlags::default())?;
            db.conn
                .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
                .map_err(|err| config.classify(err))?;
            schema::create_all(&mut db.conn).map_err(|err| config.classify(err))?;
            db.close()?;
        }

        msg_debug!(Message::StoreInitialized(config.path.display().to_string()));
        Ok(Store { config })
    }

    /// Shorthand for [`Store::open`] with default settings.
    pub fn at(path: impl Into<PathBuf>) -> Result<Store, StoreError> {
        Self::open(StoreConfig::new(path))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn repository<R: Record>(&self) -> Repository<R> {
        Repository::new(self.config.clone())
    }
}
