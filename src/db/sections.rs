//! Ordered parts of a test. The position is advisory and may repeat.

use crate::db::repository::{require_text, Record, Repository};
use crate::db::schema::Entity;
use crate::libs::error::ValidationError;
use rusqlite::{params, Connection, Result, Row};
use serde::{Deserialize, Serialize};

const INSERT_SECTION: &str = "INSERT INTO sections (test_id, name, position)
    VALUES (?1, ?2, COALESCE(?3, 1))
    RETURNING id, test_id, name, position";
const SELECT_ALL_SECTIONS: &str = "SELECT id, test_id, name, position FROM sections ORDER BY id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Option<i64>,
    pub test_id: Option<i64>,
    pub name: String,
    /// Defaults to 1 when absent.
    #[serde(alias = "order")]
    pub position: Option<i64>,
}

impl Section {
    pub fn new(test_id: i64, name: impl Into<String>) -> Self {
        Self {
            id: None,
            test_id: Some(test_id),
            name: name.into(),
            position: None,
        }
    }

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Section {
            id: row.get(0)?,
            test_id: row.get(1)?,
            name: row.get(2)?,
            position: row.get(3)?,
        })
    }
}

impl Record for Section {
    const ENTITY: Entity = Entity::Sections;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_text("name", &self.name)?;
        match self.position {
            Some(value) if value < 1 => Err(ValidationError::NotPositive { field: "position", value }),
            _ => Ok(()),
        }
    }

    fn insert(&self, conn: &Connection) -> Result<Self> {
        conn.query_row(INSERT_SECTION, params![self.test_id, self.name, self.position], Self::from_row)
    }

    fn select_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(SELECT_ALL_SECTIONS)?;
        let section_iter = stmt.query_map([], Self::from_row)?;

        let mut sections = Vec::new();
        for section in section_iter {
            sections.push(section?);
        }
        Ok(sections)
    }
}

pub type Sections = Repository<Section>;
