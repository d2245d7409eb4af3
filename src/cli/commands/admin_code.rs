use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codes::CodeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::auth_code::CodeKind;
use crate::ui::messages::success;

/// Print or update the admin authorization code. Printing also reports
/// the first-admin marker when one exists.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AdminCode { set } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        match set {
            Some(raw) => {
                let stored = CodeLogic::set(&mut pool, CodeKind::Admin, raw)?;
                success(format!("Admin authorization code updated to '{}'.", stored));
            }
            None => {
                let code = CodeLogic::get(&mut pool, CodeKind::Admin)?;
                println!("Admin authorization code: {}", code);

                match CodeLogic::first_admin_id(&mut pool)? {
                    Some(id) => println!("First admin id: {}", id),
                    None => println!("First admin id: none"),
                }
            }
        }
    }

    Ok(())
}
