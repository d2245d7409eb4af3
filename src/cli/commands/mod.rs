pub mod admin_code;
pub mod assign;
pub mod auth_code;
pub mod config;
pub mod done;
pub mod init;
pub mod login;
pub mod signup;
pub mod tasks;
pub mod workers;
