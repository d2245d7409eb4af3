//! Stateless credential check. No tokens, no expiry: the caller keeps
//! the sanitized record it gets back.

use crate::db::pool::DbPool;
use crate::db::users;
use crate::errors::{AppError, AppResult};
use crate::models::account::AccountView;

pub struct LoginLogic;

impl LoginLogic {
    /// Return the sanitized account matching email+password, or a single
    /// generic failure. "No such email" and "wrong password" are not
    /// distinguished.
    pub fn authenticate(pool: &mut DbPool, email: &str, password: &str) -> AppResult<AccountView> {
        match users::find_by_email_and_password(&pool.conn, email, password)? {
            Some(account) => Ok(account.into_view()),
            None => Err(AppError::InvalidCredentials),
        }
    }
}
