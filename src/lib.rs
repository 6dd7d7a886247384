//! # Mockexam
//!
//! Persistence core of an online mock-examination platform. Stores users,
//! tests, sections, questions, attempts, per-question answers, bookmarks,
//! announcements and feedback in one embedded SQLite file shared by many
//! concurrent callers, and exposes `create` and `list` for each of them.
//!
//! ## Features
//!
//! - **Fixed schema** with declared foreign keys, checks and store defaults
//! - **Per-operation handles** with a bounded wait for the write lock
//! - **Typed outcomes**: validation, busy (retryable), unavailable, commit
//! - **Command-line boundary** printing records as JSON or tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mockexam::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
