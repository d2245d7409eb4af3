use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::login::LoginLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Check credentials and print the sanitized account record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login {
        email,
        password,
        json,
    } = cmd
    {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let account = LoginLogic::authenticate(&mut pool, email, password)?;

        if *json {
            let encoded = serde_json::to_string_pretty(&account)
                .map_err(|e| AppError::Other(format!("JSON encoding failed: {}", e)))?;
            println!("{}", encoded);
        } else {
            success(format!(
                "Logged in as '{}' ({}, id {}).",
                account.username,
                account.role.to_db_str(),
                account.id
            ));
        }
    }

    Ok(())
}
