use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks::TaskLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Set a task's completion flag. Anyone holding the task id may do
/// this; there is no assignee check at this layer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { task_id, reopen } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let completed = !*reopen;
        TaskLogic::set_completion(&mut pool, *task_id, completed)?;

        if completed {
            success(format!("Task {} marked as completed.", task_id));
        } else {
            success(format!("Task {} reopened.", task_id));
        }
    }

    Ok(())
}
