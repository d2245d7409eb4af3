use rusqlite::{Connection, Result};

/// Ensure the `users` table exists with its unique email index.
fn ensure_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            username   TEXT NOT NULL,
            email      TEXT NOT NULL,
            password   TEXT NOT NULL,
            role       TEXT NOT NULL CHECK(role IN ('worker','admin')),
            created_at TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);
        CREATE INDEX IF NOT EXISTS idx_users_role ON users(role);
        "#,
    )?;
    Ok(())
}

/// Ensure the `tasks` table exists.
/// `assigned_to` is a weak reference: plain text, no foreign key.
fn ensure_tasks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            assigned_to TEXT NOT NULL,
            completed   INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_assigned_to ON tasks(assigned_to);
        "#,
    )?;
    Ok(())
}

/// Ensure the `settings` table exists.
/// One row per discriminator `type`; the UNIQUE index is what makes the
/// lazy-default creation race-free (INSERT OR IGNORE + SELECT).
fn ensure_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            type           TEXT NOT NULL,
            code           TEXT,
            first_admin_id INTEGER,
            updated_at     TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_settings_type ON settings(type);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_users_table(conn)?;
    ensure_tasks_table(conn)?;
    ensure_settings_table(conn)?;
    Ok(())
}
