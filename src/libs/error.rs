//! Typed failures returned by the storage core.
//!
//! Every repository operation either yields a fully populated record or one of
//! the [`StoreError`] variants below. The boundary layer decides how each
//! outcome is presented (exit code, protocol status); the core never retries
//! and never swallows a failure.

use crate::db::schema::Entity;
use rusqlite::ErrorCode;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A record rejected before any store access took place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{0}` is required")]
    MissingField(&'static str),

    #[error("field `{field}` must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    #[error("field `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("field `{field}` must be one of A, B, C, D, got {value:?}")]
    InvalidOption { field: &'static str, value: String },

    #[error("ended_at precedes started_at")]
    EndsBeforeStart,
}

/// Outcome of a failed store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid {entity} record: {source}")]
    Validation {
        entity: Entity,
        #[source]
        source: ValidationError,
    },

    /// Write lock not acquired within the busy timeout. Nothing was written.
    #[error("store is busy: write lock not acquired within {0:?}")]
    Busy(Duration),

    #[error("store unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The insert ran but the commit did not go through; the caller cannot
    /// assume the record persisted.
    #[error("commit failed: {0}")]
    Commit(#[source] rusqlite::Error),

    #[error("constraint violated: {0}")]
    Constraint(#[source] rusqlite::Error),

    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
}

impl StoreError {
    /// Only lock contention is safe to retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Busy(_))
    }

    /// Classifies a statement-level SQLite failure.
    pub(crate) fn classify(err: rusqlite::Error, path: &std::path::Path, busy_timeout: Duration) -> Self {
        let code = match &err {
            rusqlite::Error::SqliteFailure(failure, _) => Some(failure.code),
            _ => None,
        };
        match code {
            Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StoreError::Busy(busy_timeout),
            Some(ErrorCode::ConstraintViolation) => StoreError::Constraint(err),
            Some(ErrorCode::CannotOpen)
            | Some(ErrorCode::SystemIoFailure)
            | Some(ErrorCode::DatabaseCorrupt)
            | Some(ErrorCode::NotADatabase)
            | Some(ErrorCode::ReadOnly)
            | Some(ErrorCode::DiskFull)
            | Some(ErrorCode::PermissionDenied) => StoreError::Unavailable {
                path: path.to_path_buf(),
                source: err,
            },
            _ => StoreError::Sql(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn failure(code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), None)
    }

    #[test]
    fn busy_and_locked_are_retryable() {
        let path = std::path::Path::new("x.db");
        let timeout = Duration::from_secs(5);

        let busy = StoreError::classify(failure(ffi::SQLITE_BUSY), path, timeout);
        assert!(matches!(busy, StoreError::Busy(t) if t == timeout));
        assert!(busy.is_retryable());

        let locked = StoreError::classify(failure(ffi::SQLITE_LOCKED), path, timeout);
        assert!(locked.is_retryable());
    }

    #[test]
    fn io_faults_are_unavailable() {
        let path = std::path::Path::new("x.db");
        let err = StoreError::classify(failure(ffi::SQLITE_CANTOPEN), path, Duration::from_secs(5));
        assert!(matches!(err, StoreError::Unavailable { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn constraint_failures_are_kept_apart() {
        let path = std::path::Path::new("x.db");
        let err = StoreError::classify(failure(ffi::SQLITE_CONSTRAINT), path, Duration::from_secs(5));
        assert!(matches!(err, StoreError::Constraint(_)));
    }
}
