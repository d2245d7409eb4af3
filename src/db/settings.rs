//! Singleton settings rows, keyed by the `type` discriminator.
//! The UNIQUE index on `type` plus INSERT OR IGNORE makes every
//! lazy-default creation a race-free find-or-create.

use crate::models::auth_code::CodeKind;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, params};

const ADMIN_META: &str = "admin_meta";

/// Return the stored code for `kind`, creating the default row first
/// if it is absent. Find-or-create is atomic: the INSERT either wins or
/// hits the unique index and is ignored.
pub fn get_or_create_code(conn: &Connection, kind: CodeKind) -> Result<String> {
    conn.execute(
        "INSERT OR IGNORE INTO settings (type, code, updated_at)
         VALUES (?1, ?2, ?3)",
        params![
            kind.discriminator(),
            kind.default_code(),
            Utc::now().to_rfc3339(),
        ],
    )?;

    let mut stmt = conn.prepare_cached("SELECT code FROM settings WHERE type = ?1")?;
    stmt.query_row([kind.discriminator()], |row| row.get(0))
}

/// Upsert the code for `kind`. The caller has already normalized and
/// validated the value.
pub fn set_code(conn: &Connection, kind: CodeKind, code: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (type, code, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(type) DO UPDATE SET
             code = excluded.code,
             updated_at = excluded.updated_at",
        params![kind.discriminator(), code, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Id of the first admin account ever created, if any.
pub fn first_admin_id(conn: &Connection) -> Result<Option<i64>> {
    let mut stmt =
        conn.prepare_cached("SELECT first_admin_id FROM settings WHERE type = ?1")?;
    stmt.query_row([ADMIN_META], |row| row.get(0)).optional()
}

/// Record `account_id` as the first admin. Set-once: if the marker row
/// already exists the INSERT is ignored and the stored id is untouched.
pub fn mark_first_admin(conn: &Connection, account_id: i64) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO settings (type, first_admin_id, updated_at)
         VALUES (?1, ?2, ?3)",
        params![ADMIN_META, account_id, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}
