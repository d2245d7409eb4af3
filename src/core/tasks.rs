//! Task creation, listing and completion.

use crate::db::pool::DbPool;
use crate::db::{tasks, users};
use crate::errors::{AppError, AppResult};
use crate::models::task::{Task, TaskWithAssignee, UNKNOWN_ASSIGNEE};

pub struct TaskLogic;

impl TaskLogic {
    /// Create a task and return its id. The assignee is not checked for
    /// existence: `assigned_to` is a weak reference and any string is
    /// accepted.
    pub fn create(
        pool: &mut DbPool,
        title: &str,
        description: &str,
        assigned_to: &str,
    ) -> AppResult<i64> {
        let task = Task::new(title, description, assigned_to);
        let id = tasks::insert_task(&pool.conn, &task)?;
        Ok(id)
    }

    /// All tasks, each enriched with the assignee's display name.
    /// A dangling or non-numeric reference resolves to "Unknown"; one
    /// failed lookup never fails the whole listing.
    pub fn list_all(pool: &mut DbPool) -> AppResult<Vec<TaskWithAssignee>> {
        let all = tasks::list_all(&pool.conn)?;

        let mut out = Vec::with_capacity(all.len());
        for task in all {
            let assigned_to_name = resolve_assignee_name(pool, &task.assigned_to);
            out.push(TaskWithAssignee {
                task,
                assigned_to_name,
            });
        }
        Ok(out)
    }

    /// One worker's tasks, exact match on `assigned_to`, no enrichment.
    pub fn list_for(pool: &mut DbPool, assigned_to: &str) -> AppResult<Vec<Task>> {
        Ok(tasks::list_by_assignee(&pool.conn, assigned_to)?)
    }

    /// Flip the completion flag. Idempotent; `TaskNotFound` when the id
    /// matches no row.
    pub fn set_completion(pool: &mut DbPool, task_id: i64, completed: bool) -> AppResult<()> {
        let matched = tasks::set_completion(&pool.conn, task_id, completed)?;
        if matched == 0 {
            return Err(AppError::TaskNotFound(task_id));
        }
        Ok(())
    }
}

fn resolve_assignee_name(pool: &DbPool, assigned_to: &str) -> String {
    let Ok(id) = assigned_to.parse::<i64>() else {
        return UNKNOWN_ASSIGNEE.to_string();
    };
    match users::find_by_id(&pool.conn, id) {
        Ok(Some(account)) => account.username,
        _ => UNKNOWN_ASSIGNEE.to_string(),
    }
}
