//! Platform accounts.
//!
//! Email uniqueness is not enforced: two users may share an address.

use crate::db::repository::{require_text, Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_USER: &str = "INSERT INTO users (name, email, password_hash, created_at)
    VALUES (?1, ?2, ?3, COALESCE(?4, CURRENT_TIMESTAMP))
    RETURNING id, name, email, password_hash, created_at";
const SELECT_ALL_USERS: &str = "SELECT id, name, email, password_hash, created_at FROM users ORDER BY id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    /// Credential as handed over by the boundary layer; stored verbatim.
    pub password_hash: String,
    pub created_at: Option<NaiveDateTime>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: None,
        }
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

impl Record for User {
    const ENTITY: Entity = Entity::Users;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        require_text("password_hash", &self.password_hash)
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(
            INSERT_USER,
            params![self.name, self.email, self.password_hash, self.created_at],
            Self::from_row,
        )
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_USERS)?;
        let user_iter = stmt.query_map([], Self::from_row)?;

        let mut users = Vec::new();
        for user in user_iter {
            users.push(user?);
        }
        Ok(users)
    }
}

pub type Users = Repository<User>;
