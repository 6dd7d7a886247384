//! Multiple-choice questions with four option slots, `A` to `D`.

use crate::db::repository::{require_option_slot, require_text, Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_QUESTION: &str = "INSERT INTO questions
    (section_id, question_text, option_a, option_b, option_c, option_d, correct_option, explanation, difficulty)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
    RETURNING id, section_id, question_text, option_a, option_b, option_c, option_d, correct_option, explanation, difficulty";
const SELECT_ALL_QUESTIONS: &str = "SELECT id, section_id, question_text, option_a, option_b, option_c, option_d,
    correct_option, explanation, difficulty
    FROM questions ORDER BY id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Option<i64>,
    pub section_id: Option<i64>,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    /// One of `A`, `B`, `C`, `D` when present.
    pub correct_option: Option<String>,
    pub explanation: Option<String>,
    pub difficulty: Option<String>,
}

impl Question {
    pub fn new(section_id: i64, question_text: impl Into<String>, options: [&str; 4]) -> Self {
        let [a, b, c, d] = options;
        Self {
            id: None,
            section_id: Some(section_id),
            question_text: question_text.into(),
            option_a: a.to_string(),
            option_b: b.to_string(),
            option_c: c.to_string(),
            option_d: d.to_string(),
            correct_option: None,
            explanation: None,
            difficulty: None,
        }
    }

    pub fn with_answer(mut self, correct_option: impl Into<String>) -> Self {
        self.correct_option = Some(correct_option.into());
        self
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Question {
            id: row.get(0)?,
            section_id: row.get(1)?,
            question_text: row.get(2)?,
            option_a: row.get(3)?,
            option_b: row.get(4)?,
            option_c: row.get(5)?,
            option_d: row.get(6)?,
            correct_option: row.get(7)?,
            explanation: row.get(8)?,
            difficulty: row.get(9)?,
        })
    }
}

impl Record for Question {
    const ENTITY: Entity = Entity::Questions;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("question_text", &self.question_text)?;
        require_text("option_a", &self.option_a)?;
        require_text("option_b", &self.option_b)?;
        require_text("option_c", &self.option_c)?;
        require_text("option_d", &self.option_d)?;
        require_option_slot("correct_option", self.correct_option.as_deref())
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(
            INSERT_QUESTION,
            params![
                self.section_id,
                self.question_text,
                self.option_a,
                self.option_b,
                self.option_c,
                self.option_d,
                self.correct_option,
                self.explanation,
                self.difficulty,
            ],
            Self::from_row,
        )
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_QUESTIONS)?;
        let question_iter = stmt.query_map([], Self::from_row)?;

        let mut questions = Vec::new();
        for question in question_iter {
            questions.push(question?);
        }
        Ok(questions)
    }
}

pub type Questions = Repository<Question>;
