use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks::TaskLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create a task for a worker.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Assign {
        title,
        description,
        assigned_to,
    } = cmd
    {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let task_id = TaskLogic::create(&mut pool, title, description, assigned_to)?;

        success(format!(
            "Task {} '{}' assigned to worker {}.",
            task_id, title, assigned_to
        ));
    }

    Ok(())
}
