use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codes::CodeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::auth_code::CodeKind;
use crate::ui::messages::success;

/// Print or update the worker authorization code.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AuthCode { set } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        match set {
            Some(raw) => {
                let stored = CodeLogic::set(&mut pool, CodeKind::Worker, raw)?;
                success(format!("Worker authorization code updated to '{}'.", stored));
            }
            None => {
                let code = CodeLogic::get(&mut pool, CodeKind::Worker)?;
                println!("Worker authorization code: {}", code);
            }
        }
    }

    Ok(())
}
