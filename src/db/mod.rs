pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod settings;
pub mod tasks;
pub mod users;
