//! Reading and updating the shared authorization codes.

use crate::db::pool::DbPool;
use crate::db::settings;
use crate::errors::{AppError, AppResult};
use crate::models::auth_code::{CodeKind, normalize_code};

pub struct CodeLogic;

impl CodeLogic {
    /// Current code for `kind`; the default row is created lazily on the
    /// first read of a fresh store.
    pub fn get(pool: &mut DbPool, kind: CodeKind) -> AppResult<String> {
        Ok(settings::get_or_create_code(&pool.conn, kind)?)
    }

    /// Store a new code for `kind`. The value is trimmed and uppercased;
    /// an input that is empty after trimming is rejected.
    pub fn set(pool: &mut DbPool, kind: CodeKind, raw: &str) -> AppResult<String> {
        let code = normalize_code(raw);
        if code.is_empty() {
            return Err(AppError::EmptyCode);
        }
        settings::set_code(&pool.conn, kind, &code)?;
        Ok(code)
    }

    /// First-admin marker, if any admin was ever created.
    pub fn first_admin_id(pool: &mut DbPool) -> AppResult<Option<i64>> {
        Ok(settings::first_admin_id(&pool.conn)?)
    }
}
