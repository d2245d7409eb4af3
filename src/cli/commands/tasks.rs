use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks::TaskLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// List tasks: the full board with assignee names, or one worker's raw
/// task list when --worker is given.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tasks { worker, json } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        if let Some(worker_id) = worker {
            let tasks = TaskLogic::list_for(&mut pool, worker_id)?;

            if *json {
                print_json(&tasks)?;
                return Ok(());
            }

            if tasks.is_empty() {
                println!("No tasks for worker {}.", worker_id);
                return Ok(());
            }

            println!("{:<6} {:<8} {:<30}", "ID", "STATUS", "TITLE");
            for t in &tasks {
                println!("{:<6} {:<8} {:<30}", t.id, t.status_str(), t.title);
            }
            return Ok(());
        }

        let tasks = TaskLogic::list_all(&mut pool)?;

        if *json {
            print_json(&tasks)?;
            return Ok(());
        }

        if tasks.is_empty() {
            println!("No tasks.");
            return Ok(());
        }

        println!(
            "{:<6} {:<8} {:<30} {:<20}",
            "ID", "STATUS", "TITLE", "ASSIGNED TO"
        );
        for t in &tasks {
            println!(
                "{:<6} {:<8} {:<30} {:<20}",
                t.task.id,
                t.task.status_str(),
                t.task.title,
                t.assigned_to_name
            );
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    let encoded = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Other(format!("JSON encoding failed: {}", e)))?;
    println!("{}", encoded);
    Ok(())
}
