//! A user's sitting of a test.

use crate::db::repository::{require_non_negative, Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_ATTEMPT: &str = "INSERT INTO test_attempts (user_id, test_id, started_at, ended_at, score)
    VALUES (?1, ?2, COALESCE(?3, CURRENT_TIMESTAMP), ?4, COALESCE(?5, 0))
    RETURNING id, user_id, test_id, started_at, ended_at, score";
const SELECT_ALL_ATTEMPTS: &str = "SELECT id, user_id, test_id, started_at, ended_at, score FROM test_attempts ORDER BY id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestAttempt {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub test_id: Option<i64>,
    /// Defaults to the insertion time.
    pub started_at: Option<NaiveDateTime>,
    pub ended_at: Option<NaiveDateTime>,
    /// Defaults to 0. Stored as given; nothing here computes it.
    pub score: Option<i64>,
}

impl TestAttempt {
    pub fn new(user_id: i64, test_id: i64) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            test_id: Some(test_id),
            started_at: None,
            ended_at: None,
            score: None,
        }
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(TestAttempt {
            id: row.get(0)?,
            user_id: row.get(1)?,
            test_id: row.get(2)?,
            started_at: row.get(3)?,
            ended_at: row.get(4)?,
            score: row.get(5)?,
        })
    }
}

impl Record for TestAttempt {
    const ENTITY: Entity = Entity::TestAttempts;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_non_negative("score", self.score)?;
        // Without an explicit start the store stamps "now"; the CHECK
        // constraint covers that case at insert time.
        if let (Some(started_at), Some(ended_at)) = (self.started_at, self.ended_at) {
            if ended_at < started_at {
                return Err(ValidationError::EndsBeforeStart);
            }
        }
        Ok(())
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(
            INSERT_ATTEMPT,
            params![self.user_id, self.test_id, self.started_at, self.ended_at, self.score],
            Self::from_row,
        )
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_ATTEMPTS)?;
        let attempt_iter = stmt.query_map([], Self::from_row)?;

        let mut attempts = Vec::new();
        for attempt in attempt_iter {
            attempts.push(attempt?);
        }
        Ok(attempts)
    }
}

pub type TestAttempts = Repository<TestAttempt>;
