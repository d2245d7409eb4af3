pub mod account;
pub mod auth_code;
pub mod role;
pub mod task;
