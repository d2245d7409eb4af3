//! Unified application error type.
//! All modules (db, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Signup / login
    // ---------------------------
    #[error("Invalid authorization code")]
    InvalidAuthCode,

    #[error("An account with email '{0}' already exists")]
    DuplicateAccount(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Tasks
    // ---------------------------
    #[error("Task {0} not found")]
    TaskNotFound(i64),

    // ---------------------------
    // Settings codes
    // ---------------------------
    #[error("Authorization code cannot be empty")]
    EmptyCode,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
