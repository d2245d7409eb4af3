use crate::models::task::Task;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        assigned_to: row.get("assigned_to")?,
        completed: row.get::<_, i64>("completed")? != 0,
        created_at: row.get("created_at")?,
    })
}

/// Insert a task. Returns the new task id.
pub fn insert_task(conn: &Connection, task: &Task) -> Result<i64> {
    conn.execute(
        "INSERT INTO tasks (title, description, assigned_to, completed, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            task.title,
            task.description,
            task.assigned_to,
            task.completed as i64,
            task.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_all(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, title, description, assigned_to, completed, created_at
         FROM tasks ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    rows.collect::<Result<Vec<_>, _>>()
}

/// Tasks for one assignee, exact string match on `assigned_to`.
pub fn list_by_assignee(conn: &Connection, assigned_to: &str) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, title, description, assigned_to, completed, created_at
         FROM tasks WHERE assigned_to = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([assigned_to], map_row)?;

    rows.collect::<Result<Vec<_>, _>>()
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Task>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, title, description, assigned_to, completed, created_at
         FROM tasks WHERE id = ?1",
    )?;
    match stmt.query_row([id], map_row) {
        Ok(t) => Ok(Some(t)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Update only the `completed` flag. Returns the number of matched rows
/// so callers can distinguish "updated" from "no such task".
pub fn set_completion(conn: &Connection, id: i64, completed: bool) -> Result<usize> {
    conn.execute(
        "UPDATE tasks SET completed = ?1 WHERE id = ?2",
        params![completed as i64, id],
    )
}
