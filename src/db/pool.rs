//! SQLite connection wrapper (lightweight for CLI usage).
//! One connection per invocation; all coordination is left to SQLite
//! (unique indexes, upserts), no in-process locking.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open and run migrations, so every command works on a ready schema.
    pub fn open_initialized(path: &str) -> crate::errors::AppResult<Self> {
        let pool = Self::new(path)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(pool)
    }
}
