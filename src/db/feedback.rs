use crate::db::repository::{require_text, Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_FEEDBACK: &str = "INSERT INTO feedback (user_id, message, created_at)
    VALUES (?1, ?2, COALESCE(?3, CURRENT_TIMESTAMP))
    RETURNING id, user_id, message, created_at";
const SELECT_ALL_FEEDBACK: &str = "SELECT id, user_id, message, created_at FROM feedback ORDER BY id";

/// Free-text feedback left by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub message: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Feedback {
    pub fn new(user_id: i64, message: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            message: message.into(),
            created_at: None,
        }
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Feedback {
            id: row.get(0)?,
            user_id: row.get(1)?,
            message: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

impl Record for Feedback {
    const ENTITY: Entity = Entity::Feedback;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("message", &self.message)
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(INSERT_FEEDBACK, params![self.user_id, self.message, self.created_at], Self::from_row)
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_FEEDBACK)?;
        let feedback_iter = stmt.query_map([], Self::from_row)?;

        let mut feedback = Vec::new();
        for entry in feedback_iter {
            feedback.push(entry?);
        }
        Ok(feedback)
    }
}

/// Plural alias; the table itself is named `feedback`.
pub type Feedbacks = Repository<Feedback>;
