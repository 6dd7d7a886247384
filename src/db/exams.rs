//! Mock tests: the top of the test → section → question hierarchy.

use crate::db::repository::{require_non_negative, require_text, Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_TEST: &str = "INSERT INTO tests (title, description, total_marks, duration_min, created_at)
    VALUES (?1, ?2, COALESCE(?3, 0), ?4, COALESCE(?5, CURRENT_TIMESTAMP))
    RETURNING id, title, description, total_marks, duration_min, created_at";
const SELECT_ALL_TESTS: &str = "SELECT id, title, description, total_marks, duration_min, created_at FROM tests ORDER BY id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    /// Defaults to 0 when absent.
    pub total_marks: Option<i64>,
    /// Minutes; must be positive.
    pub duration_min: i64,
    pub created_at: Option<NaiveDateTime>,
}

impl Test {
    pub fn new(title: impl Into<String>, duration_min: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            total_marks: None,
            duration_min,
            created_at: None,
        }
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Test {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            total_marks: row.get(3)?,
            duration_min: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

impl Record for Test {
    const ENTITY: Entity = Entity::Tests;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_non_negative("total_marks", self.total_marks)?;
        if self.duration_min <= 0 {
            return Err(ValidationError::NotPositive {
                field: "duration_min",
                value: self.duration_min,
            });
        }
        Ok(())
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(
            INSERT_TEST,
            params![self.title, self.description, self.total_marks, self.duration_min, self.created_at],
            Self::from_row,
        )
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_TESTS)?;
        let test_iter = stmt.query_map([], Self::from_row)?;

        let mut tests = Vec::new();
        for test in test_iter {
            tests.push(test?);
        }
        Ok(tests)
    }
}

pub type Tests = Repository<Test>;
