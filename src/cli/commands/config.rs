use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        println!("📄 Current configuration:\n");
        let yaml = serde_yaml::to_string(&cfg)
            .map_err(|e| AppError::Config(format!("serialization failed: {}", e)))?;
        println!("{}", yaml);
    }

    Ok(())
}
