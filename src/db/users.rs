use crate::errors::AppError;
use crate::models::account::Account;
use crate::models::role::Role;
use chrono::Utc;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Account> {
    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    Ok(Account {
        id: row.get("id")?,
        username: row.get("username")?,
        email: row.get("email")?,
        password: row.get("password")?,
        role,
        created_at: row.get("created_at")?,
    })
}

/// Insert a new account. Returns the new account id.
/// The unique index on `email` is the storage-level backstop for the
/// duplicate check done in core.
pub fn insert_account(
    conn: &Connection,
    username: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO users (username, email, password, role, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            username,
            email,
            password,
            role.to_db_str(),
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_email(conn: &Connection, email: &str) -> Result<Option<Account>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, username, email, password, role, created_at
         FROM users WHERE email = ?1",
    )?;
    match stmt.query_row([email], map_row) {
        Ok(acc) => Ok(Some(acc)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Combined credential lookup: a miss is Ok(None), not an error.
pub fn find_by_email_and_password(
    conn: &Connection,
    email: &str,
    password: &str,
) -> Result<Option<Account>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, username, email, password, role, created_at
         FROM users WHERE email = ?1 AND password = ?2",
    )?;
    match stmt.query_row([email, password], map_row) {
        Ok(acc) => Ok(Some(acc)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Account>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, username, email, password, role, created_at
         FROM users WHERE id = ?1",
    )?;
    match stmt.query_row([id], map_row) {
        Ok(acc) => Ok(Some(acc)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// All worker accounts ordered by id.
pub fn list_workers(conn: &Connection) -> Result<Vec<Account>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, username, email, password, role, created_at
         FROM users WHERE role = 'worker' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    rows.collect::<Result<Vec<_>, _>>()
}
