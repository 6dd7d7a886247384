use crate::db::repository::{Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_ANNOUNCEMENT: &str = "INSERT INTO announcements (title, message, created_at)
    VALUES (?1, ?2, COALESCE(?3, CURRENT_TIMESTAMP))
    RETURNING id, title, message, created_at";
const SELECT_ALL_ANNOUNCEMENTS: &str = "SELECT id, title, message, created_at FROM announcements ORDER BY id";

/// Platform-wide notice, not tied to any user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl Announcement {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            message: Some(message.into()),
            created_at: None,
        }
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Announcement {
            id: row.get(0)?,
            title: row.get(1)?,
            message: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

impl Record for Announcement {
    const ENTITY: Entity = Entity::Announcements;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Ok(())
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(INSERT_ANNOUNCEMENT, params![self.title, self.message, self.created_at], Self::from_row)
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_ANNOUNCEMENTS)?;
        let announcement_iter = stmt.query_map([], Self::from_row)?;

        let mut announcements = Vec::new();
        for announcement in announcement_iter {
            announcements.push(announcement?);
        }
        Ok(announcements)
    }
}

pub type Announcements = Repository<Announcement>;
