//! Supporting modules: configuration, errors, messaging and output.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod view;
