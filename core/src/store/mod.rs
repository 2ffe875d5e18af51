//! SQLite persistence layer for the record store.
//!
//! RULE: Only the store talks to the database.
//! Analyses never see a connection; they receive snapshots.

use crate::error::InsightsResult;
use rusqlite::Connection;

mod people;
mod units;

pub use people::StoreSource;

pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    pub fn open(path: &str) -> InsightsResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> InsightsResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order, inside one transaction.
    pub fn migrate(&self) -> InsightsResult<()> {
        self.conn.execute_batch(&format!(
            "BEGIN;\n{}\nCOMMIT;",
            include_str!("../../../migrations/001_records.sql")
        ))?;
        Ok(())
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
