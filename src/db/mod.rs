//! Storage layer of the examination platform.
//!
//! One SQLite file holds nine tables. Callers go through a [`db::Store`],
//! which hands out a typed [`repository::Repository`] per entity. Each
//! repository call opens its own handle, runs a single statement and closes
//! the handle again, so many threads or processes can share the file: reads
//! run concurrently under WAL, writes are serialized by SQLite and wait at
//! most the configured busy timeout (5 seconds by default) before failing
//! with a retryable error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mockexam::db::db::Store;
//! use mockexam::db::exams::{Test, Tests};
//! use mockexam::db::test_attempts::{TestAttempt, TestAttempts};
//! use mockexam::db::users::{User, Users};
//!
//! let store = Store::at("exam.db")?;
//!
//! let user = store.repository::<User>().create(&User::new("Asha", "a@x.com", "h1"))?;
//! let test = store.repository::<Test>().create(&Test::new("Math I", 30))?;
//! assert_eq!(test.total_marks, Some(0));
//!
//! let attempts: TestAttempts = store.repository();
//! let attempt = attempts.create(&TestAttempt::new(user.id.unwrap(), test.id.unwrap()))?;
//! assert_eq!(attempt.score, Some(0));
//! # let _: Users = store.repository();
//! # let _: Tests = store.repository();
//! # Ok::<(), mockexam::libs::error::StoreError>(())
//! ```

/// Connection lifecycle: per-operation handles and store initialization.
pub mod db;

/// Table definitions and the [`schema::Entity`] enumeration.
pub mod schema;

/// The [`repository::Record`] trait and generic create/list access.
pub mod repository;

pub mod announcements;
pub mod attempted_questions;
pub mod bookmarks;
pub mod exams;
pub mod feedback;
pub mod questions;
pub mod sections;
pub mod test_attempts;
pub mod users;
