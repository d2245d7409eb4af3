use crate::models::role::Role;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shopfloor
/// CLI application to manage factory task assignment with SQLite
#[derive(Parser)]
#[command(
    name = "shopfloor",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small task-assignment CLI: code-gated signup, worker rosters and task tracking using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Create an account (worker or admin), gated by an authorization code
    Signup {
        /// Display name of the account
        #[arg(long = "username", short = 'u')]
        username: String,

        /// Email address (unique across all accounts)
        #[arg(long = "email", short = 'e')]
        email: String,

        /// Password (stored as-is; this tool does no hashing)
        #[arg(long = "password", short = 'p')]
        password: String,

        /// Account role
        #[arg(long = "role", value_enum)]
        role: Role,

        /// Authorization code for the requested role
        #[arg(long = "code", short = 'c')]
        code: String,
    },

    /// Check credentials and print the matching account
    Login {
        #[arg(long = "email", short = 'e')]
        email: String,

        #[arg(long = "password", short = 'p')]
        password: String,

        /// Print the account as JSON instead of plain text
        #[arg(long = "json")]
        json: bool,
    },

    /// List worker accounts (passwords never shown)
    Workers {
        #[arg(long = "json", help = "Print the roster as JSON")]
        json: bool,
    },

    /// List tasks: all tasks with assignee names, or one worker's tasks
    Tasks {
        /// Only show tasks assigned to this worker id
        #[arg(long = "worker", short = 'w', value_name = "ID")]
        worker: Option<String>,

        #[arg(long = "json", help = "Print tasks as JSON")]
        json: bool,
    },

    /// Create a task and assign it to a worker
    Assign {
        #[arg(long = "title", short = 't')]
        title: String,

        /// Free-text description of the task
        #[arg(long = "desc", short = 'd', default_value = "")]
        description: String,

        /// Worker id the task is assigned to (not checked for existence)
        #[arg(long = "to", value_name = "WORKER_ID")]
        assigned_to: String,
    },

    /// Mark a task as completed (or reopen it)
    Done {
        /// Task id to update
        task_id: i64,

        /// Set the task back to not completed
        #[arg(long = "reopen")]
        reopen: bool,
    },

    /// Print or update the worker authorization code
    AuthCode {
        /// New code to store (trimmed and uppercased); prints the current code when omitted
        #[arg(long = "set", value_name = "CODE")]
        set: Option<String>,
    },

    /// Print or update the admin authorization code
    AdminCode {
        /// New code to store (trimmed and uppercased); prints the current code when omitted
        #[arg(long = "set", value_name = "CODE")]
        set: Option<String>,
    },
}
