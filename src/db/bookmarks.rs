use crate::db::repository::{Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_BOOKMARK: &str = "INSERT INTO bookmarks (user_id, question_id, created_at)
    VALUES (?1, ?2, COALESCE(?3, CURRENT_TIMESTAMP))
    RETURNING id, user_id, question_id, created_at";
const SELECT_ALL_BOOKMARKS: &str = "SELECT id, user_id, question_id, created_at FROM bookmarks ORDER BY id";

/// A question a user saved for later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub question_id: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
}

impl Bookmark {
    pub fn new(user_id: i64, question_id: i64) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            question_id: Some(question_id),
            created_at: None,
        }
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Bookmark {
            id: row.get(0)?,
            user_id: row.get(1)?,
            question_id: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

impl Record for Bookmark {
    const ENTITY: Entity = Entity::Bookmarks;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Ok(())
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(INSERT_BOOKMARK, params![self.user_id, self.question_id, self.created_at], Self::from_row)
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_BOOKMARKS)?;
        let bookmark_iter = stmt.query_map([], Self::from_row)?;

        let mut bookmarks = Vec::new();
        for bookmark in bookmark_iter {
            bookmarks.push(bookmark?);
        }
        Ok(bookmarks)
    }
}

pub type Bookmarks = Repository<Bookmark>;
