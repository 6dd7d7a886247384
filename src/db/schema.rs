//! Relational schema of the examination store.
//!
//! Declares the nine tables, their identity columns, store-side defaults,
//! declarative checks and foreign-key references. The column set is fixed:
//! there is no version table and no migration runner. [`create_all`] is
//! idempotent and is applied once when a store is opened.

use clap::ValueEnum;
use rusqlite::{Connection, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine persisted record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Entity {
    Users,
    Tests,
    Sections,
    Questions,
    TestAttempts,
    AttemptedQuestions,
    Bookmarks,
    Announcements,
    Feedback,
}

impl Entity {
    /// All entities, parents before children.
    pub const ALL: [Entity; 9] = [
        Entity::Users,
        Entity::Tests,
        Entity::Sections,
        Entity::Questions,
        Entity::TestAttempts,
        Entity::AttemptedQuestions,
        Entity::Bookmarks,
        Entity::Announcements,
        Entity::Feedback,
    ];

    /// Table name, which doubles as the endpoint name.
    pub fn table(self) -> &'static str {
        match self {
            Entity::Users => "users",
            Entity::Tests => "tests",
            Entity::Sections => "sections",
            Entity::Questions => "questions",
            Entity::TestAttempts => "test_attempts",
            Entity::AttemptedQuestions => "attempted_questions",
            Entity::Bookmarks => "bookmarks",
            Entity::Announcements => "announcements",
            Entity::Feedback => "feedback",
        }
    }

    fn ddl(self) -> &'static str {
        match self {
            Entity::Users => SCHEMA_USERS,
            Entity::Tests => SCHEMA_TESTS,
            Entity::Sections => SCHEMA_SECTIONS,
            Entity::Questions => SCHEMA_QUESTIONS,
            Entity::TestAttempts => SCHEMA_TEST_ATTEMPTS,
            Entity::AttemptedQuestions => SCHEMA_ATTEMPTED_QUESTIONS,
            Entity::Bookmarks => SCHEMA_BOOKMARKS,
            Entity::Announcements => SCHEMA_ANNOUNCEMENTS,
            Entity::Feedback => SCHEMA_FEEDBACK,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

impl FromStr for Entity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Entity::ALL
            .into_iter()
            .find(|entity| entity.table() == s)
            .ok_or_else(|| format!("unknown entity `{}`", s))
    }
}

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_TESTS: &str = "CREATE TABLE IF NOT EXISTS tests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    total_marks INTEGER NOT NULL DEFAULT 0 CHECK (total_marks >= 0),
    duration_min INTEGER NOT NULL CHECK (duration_min > 0),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_SECTIONS: &str = "CREATE TABLE IF NOT EXISTS sections (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    test_id INTEGER REFERENCES tests(id),
    name TEXT NOT NULL,
    position INTEGER NOT NULL DEFAULT 1
)";

const SCHEMA_QUESTIONS: &str = "CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    section_id INTEGER REFERENCES sections(id),
    question_text TEXT NOT NULL,
    option_a TEXT NOT NULL,
    option_b TEXT NOT NULL,
    option_c TEXT NOT NULL,
    option_d TEXT NOT NULL,
    correct_option TEXT CHECK (correct_option IN ('A', 'B', 'C', 'D')),
    explanation TEXT,
    difficulty TEXT
)";

const SCHEMA_TEST_ATTEMPTS: &str = "CREATE TABLE IF NOT EXISTS test_attempts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER REFERENCES users(id),
    test_id INTEGER REFERENCES tests(id),
    started_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    ended_at TIMESTAMP CHECK (ended_at IS NULL OR ended_at >= started_at),
    score INTEGER NOT NULL DEFAULT 0
)";

const SCHEMA_ATTEMPTED_QUESTIONS: &str = "CREATE TABLE IF NOT EXISTS attempted_questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    attempt_id INTEGER REFERENCES test_attempts(id),
    question_id INTEGER REFERENCES questions(id),
    selected_option TEXT,
    is_correct BOOLEAN
)";

const SCHEMA_BOOKMARKS: &str = "CREATE TABLE IF NOT EXISTS bookmarks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER REFERENCES users(id),
    question_id INTEGER REFERENCES questions(id),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_ANNOUNCEMENTS: &str = "CREATE TABLE IF NOT EXISTS announcements (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    message TEXT,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_FEEDBACK: &str = "CREATE TABLE IF NOT EXISTS feedback (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER REFERENCES users(id),
    message TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Indexes covering every foreign-key column.
const INDICES: [&str; 9] = [
    "CREATE INDEX IF NOT EXISTS idx_sections_test_id ON sections(test_id)",
    "CREATE INDEX IF NOT EXISTS idx_questions_section_id ON questions(section_id)",
    "CREATE INDEX IF NOT EXISTS idx_test_attempts_user_id ON test_attempts(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_test_attempts_test_id ON test_attempts(test_id)",
    "CREATE INDEX IF NOT EXISTS idx_attempted_questions_attempt_id ON attempted_questions(attempt_id)",
    "CREATE INDEX IF NOT EXISTS idx_attempted_questions_question_id ON attempted_questions(question_id)",
    "CREATE INDEX IF NOT EXISTS idx_bookmarks_user_id ON bookmarks(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_bookmarks_question_id ON bookmarks(question_id)",
    "CREATE INDEX IF NOT EXISTS idx_feedback_user_id ON feedback(user_id)",
];

/// Creates every table and index that does not exist yet, atomically.
pub fn create_all(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    for entity in Entity::ALL {
        tx.execute(entity.ddl(), [])?;
    }
    for index in INDICES {
        tx.execute(index, [])?;
    }
    tx.commit()
}

/// Names of the tables currently present, sorted.
pub fn table_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")?;
    let names = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>>>()?;
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_names_round_trip() {
        for entity in Entity::ALL {
            assert_eq!(entity.table().parse::<Entity>().unwrap(), entity);
        }
        assert!("students".parse::<Entity>().is_err());
    }

    #[test]
    fn create_all_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        create_all(&mut conn).unwrap();
        create_all(&mut conn).unwrap();

        let mut expected: Vec<String> = Entity::ALL.iter().map(|e| e.table().to_string()).collect();
        expected.sort();
        assert_eq!(table_names(&conn).unwrap(), expected);
    }

    #[test]
    fn declared_checks_reject_bad_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        create_all(&mut conn).unwrap();

        assert!(conn.execute("INSERT INTO tests (title, duration_min) VALUES ('t', 0)", []).is_err());
        assert!(conn
            .execute(
                "INSERT INTO questions (question_text, option_a, option_b, option_c, option_d, correct_option)
                 VALUES ('q', 'a', 'b', 'c', 'd', 'E')",
                [],
            )
            .is_err());
    }
}
