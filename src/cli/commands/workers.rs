use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::users;
use crate::errors::{AppError, AppResult};
use crate::models::account::AccountView;

/// List worker accounts. Passwords are stripped before anything is
/// printed or encoded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Workers { json } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;

        let workers: Vec<AccountView> = users::list_workers(&pool.conn)?
            .into_iter()
            .map(|a| a.into_view())
            .collect();

        if *json {
            let encoded = serde_json::to_string_pretty(&workers)
                .map_err(|e| AppError::Other(format!("JSON encoding failed: {}", e)))?;
            println!("{}", encoded);
            return Ok(());
        }

        if workers.is_empty() {
            println!("No workers registered.");
            return Ok(());
        }

        println!("{:<6} {:<20} {:<30}", "ID", "USERNAME", "EMAIL");
        for w in &workers {
            println!("{:<6} {:<20} {:<30}", w.id, w.username, w.email);
        }
    }

    Ok(())
}
