use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::signup::SignupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create a worker or admin account.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Signup {
        username,
        email,
        password,
        role,
        code,
    } = cmd
    {
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let account_id = SignupLogic::apply(&mut pool, username, email, password, *role, code)?;

        success(format!(
            "Created {} account '{}' (id {}).",
            role.to_db_str(),
            username,
            account_id
        ));
    }

    Ok(())
}
