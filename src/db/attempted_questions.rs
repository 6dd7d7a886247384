//! Per-question answers within an attempt.
//!
//! Several rows may exist for the same (attempt, question) pair; the store
//! does not collapse or reject repeats.

use crate::db::repository::{require_option_slot, Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_ATTEMPTED_QUESTION: &str = "INSERT INTO attempted_questions (attempt_id, question_id, selected_option, is_correct)
    VALUES (?1, ?2, ?3, ?4)
    RETURNING id, attempt_id, question_id, selected_option, is_correct";
const SELECT_ALL_ATTEMPTED_QUESTIONS: &str =
    "SELECT id, attempt_id, question_id, selected_option, is_correct FROM attempted_questions ORDER BY id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptedQuestion {
    pub id: Option<i64>,
    pub attempt_id: Option<i64>,
    pub question_id: Option<i64>,
    /// `None` for a skipped question.
    pub selected_option: Option<String>,
    pub is_correct: Option<bool>,
}

impl AttemptedQuestion {
    pub fn new(attempt_id: i64, question_id: i64, selected_option: Option<&str>, is_correct: Option<bool>) -> Self {
        Self {
            id: None,
            attempt_id: Some(attempt_id),
            question_id: Some(question_id),
            selected_option: selected_option.map(str::to_string),
            is_correct,
        }
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(AttemptedQuestion {
            id: row.get(0)?,
            attempt_id: row.get(1)?,
            question_id: row.get(2)?,
            selected_option: row.get(3)?,
            is_correct: row.get(4)?,
        })
    }
}

impl Record for AttemptedQuestion {
    const ENTITY: Entity = Entity::AttemptedQuestions;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_option_slot("selected_option", self.selected_option.as_deref())
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(
            INSERT_ATTEMPTED_QUESTION,
            params![self.attempt_id, self.question_id, self.selected_option, self.is_correct],
            Self::from_row,
        )
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_ATTEMPTED_QUESTIONS)?;
        let answer_iter = stmt.query_map([], Self::from_row)?;

        let mut answers = Vec::new();
        for answer in answer_iter {
            answers.push(answer?);
        }
        Ok(answers)
    }
}

pub type AttemptedQuestions = Repository<AttemptedQuestion>;
