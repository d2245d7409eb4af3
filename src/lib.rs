//! shopfloor library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Signup { .. } => cli::commands::signup::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg),
        Commands::Workers { .. } => cli::commands::workers::handle(&cli.command, cfg),
        Commands::Tasks { .. } => cli::commands::tasks::handle(&cli.command, cfg),
        Commands::Assign { .. } => cli::commands::assign::handle(&cli.command, cfg),
        Commands::Done { .. } => cli::commands::done::handle(&cli.command, cfg),
        Commands::AuthCode { .. } => cli::commands::auth_code::handle(&cli.command, cfg),
        Commands::AdminCode { .. } => cli::commands::admin_code::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; --db overrides the configured database path.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
