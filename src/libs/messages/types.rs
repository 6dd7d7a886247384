use crate::db::schema::Entity;

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigFileNotFound(String), // path
    ConfigLoaded(String),       // path
    ConfigSaved,
    InvalidBusyTimeout(f64), // seconds

    // === STORE MESSAGES ===
    StoreInitialized(String), // path
    StoreReady(String),       // path
    StoreOpened(String),      // path
    StoreClosed(String),      // path
    WriteLockAcquired(Entity),
    WriteCommitted(Entity),
    WriteRolledBack(Entity, String), // error

    // === RECORD MESSAGES ===
    RecordCreated { entity: Entity, id: i64 },
    RecordRejected(Entity, String), // reason
    RecordsListed(Entity, usize),
    NoRecordsFound(Entity),
    ReadingRecordFromStdin(Entity),
}
