//! Uniform `create` / `list` access for every entity.
//!
//! Each entity module implements [`Record`] with its own SQL and row mapping;
//! [`Repository`] supplies the shared lifecycle around it: validate, open a
//! handle, run one statement, commit, close.
//!
//! ```rust,no_run
//! use mockexam::db::db::Store;
//! use mockexam::db::users::{User, Users};
//!
//! let store = Store::at("exam.db")?;
//! let users: Users = store.repository();
//! let created = users.create(&User::new("Asha", "a@x.com", "h1"))?;
//! assert_eq!(users.list()?.last(), Some(&created));
//! # Ok::<(), mockexam::libs::error::StoreError>(())
//! ```

use crate::db::db::{Db, StoreConfig};
use crate::db::schema::Entity;
use crate::libs::error::{StoreError, ValidationError};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::marker::PhantomData;

/// A persisted record type bound to one table.
pub trait Record: Sized {
    const ENTITY: Entity;

    /// Identity assigned by the store, `None` before creation.
    fn id(&self) -> Option<i64>;

    /// Checks required fields and value ranges without touching the store.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Inserts the record with a single statement and returns the row as
    /// stored, identity and store defaults included. Any caller-supplied
    /// identity is ignored.
    fn insert(&self, conn: &Connection) -> rusqlite::Result<Self>;

    /// All rows in insertion order.
    fn select_all(conn: &Connection) -> rusqlite::Result<Vec<Self>>;
}

pub struct Repository<R> {
    config: StoreConfig,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Repository<R> {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            _record: PhantomData,
        }
    }

    pub fn create(&self, record: &R) -> Result<R, StoreError> {
        if let Err(source) = record.validate() {
            msg_debug!(Message::RecordRejected(R::ENTITY, source.to_string()));
            return Err(StoreError::Validation { entity: R::ENTITY, source });
        }

        let created = Db::open(&self.config)?.write(R::ENTITY, |tx| record.insert(tx))?;
        msg_debug!(Message::RecordCreated {
            entity: R::ENTITY,
            id: created.id().unwrap_or_default(),
        });
        Ok(created)
    }

    pub fn list(&self) -> Result<Vec<R>, StoreError> {
        let records = Db::open(&self.config)?.read(R::select_all)?;
        msg_debug!(Message::RecordsListed(R::ENTITY, records.len()));
        Ok(records)
    }
}

/// Rejects empty or whitespace-only text.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: Option<i64>) -> Result<(), ValidationError> {
    match value {
        Some(value) if value < 0 => Err(ValidationError::Negative { field, value }),
        _ => Ok(()),
    }
}

/// Accepts one of the four option slots, `A` to `D`.
pub(crate) fn require_option_slot(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        None | Some("A" | "B" | "C" | "D") => Ok(()),
        Some(other) => Err(ValidationError::InvalidOption {
            field,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_missing() {
        assert_eq!(require_text("name", "  "), Err(ValidationError::MissingField("name")));
        assert!(require_text("name", "Asha").is_ok());
    }

    #[test]
    fn option_slots() {
        assert!(require_option_slot("correct_option", None).is_ok());
        assert!(require_option_slot("correct_option", Some("D")).is_ok());
        assert!(matches!(
            require_option_slot("correct_option", Some("b")),
            Err(ValidationError::InvalidOption { .. })
        ));
    }

    #[test]
    fn clones_share_configuration() {
        use crate::db::users::User;

        let users: Repository<User> = Repository::new(StoreConfig::new("exam.db").foreign_keys(true));
        let copy = users.clone();
        assert_eq!(copy.config, users.config);
    }

        #[test]
    fn negative_values_rejected() {
        assert!(require_non_negative("score", None).is_ok());
        assert!(require_non_negative("score", Some(0)).is_ok());
        assert_eq!(
            require_non_negative("score", Some(-1)),
            Err(ValidationError::Negative { field: "score", value: -1 })
        );
    }
}
