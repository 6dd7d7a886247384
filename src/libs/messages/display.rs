//! Human-readable text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigFileNotFound(path) => format!("No configuration file at {}, using defaults", path),
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::InvalidBusyTimeout(secs) => format!(
                "Busy timeout of {} seconds is not usable, falling back to {:?}",
                secs,
                crate::db::db::DEFAULT_BUSY_TIMEOUT
            ),

            // === STORE MESSAGES ===
            Message::StoreInitialized(path) => format!("Store initialized at {}", path),
            Message::StoreReady(path) => format!("Store ready at {}", path),
            Message::StoreOpened(path) => format!("Opened store handle on {}", path),
            Message::StoreClosed(path) => format!("Closed store handle on {}", path),
            Message::WriteLockAcquired(entity) => format!("Write lock acquired for {}", entity),
            Message::WriteCommitted(entity) => format!("Committed write to {}", entity),
            Message::WriteRolledBack(entity, error) => format!("Rolled back write to {}: {}", entity, error),

            // === RECORD MESSAGES ===
            Message::RecordCreated { entity, id } => format!("Created {} record #{}", entity, id),
            Message::RecordRejected(entity, reason) => format!("Rejected {} record: {}", entity, reason),
            Message::RecordsListed(entity, count) => format!("Listed {} {} record(s)", count, entity),
            Message::NoRecordsFound(entity) => format!("No {} found", entity),
            Message::ReadingRecordFromStdin(entity) => format!("Reading {} record as JSON from stdin...", entity),
        };
        write!(f, "{}", text)
    }
}
