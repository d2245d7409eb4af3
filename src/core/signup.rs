//! Account creation, gated by the shared authorization codes.

use crate::db::pool::DbPool;
use crate::db::{settings, users};
use crate::errors::{AppError, AppResult};
use crate::models::auth_code::{CodeKind, normalize_code};
use crate::models::role::Role;

/// High-level business logic for the `signup` command.
pub struct SignupLogic;

impl SignupLogic {
    /// Create an account and return its id.
    ///
    /// Order matters:
    /// 1. the submitted code is checked against the stored code for the
    ///    requested role (the stored default is created lazily);
    /// 2. a duplicate email is rejected before any write;
    /// 3. the account row is inserted;
    /// 4. for admins, the first-admin marker is recorded (set-once) and
    ///    the admin-code row is ensured to exist.
    ///
    /// Submitted codes are normalized (trim + uppercase) before the
    /// comparison, the same canonical form used on write.
    pub fn apply(
        pool: &mut DbPool,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
        submitted_code: &str,
    ) -> AppResult<i64> {
        let kind = match role {
            Role::Worker => CodeKind::Worker,
            Role::Admin => CodeKind::Admin,
        };

        let stored = settings::get_or_create_code(&pool.conn, kind)?;
        if normalize_code(submitted_code) != stored {
            return Err(AppError::InvalidAuthCode);
        }

        if users::find_by_email(&pool.conn, email)?.is_some() {
            return Err(AppError::DuplicateAccount(email.to_string()));
        }

        let account_id = users::insert_account(&pool.conn, username, email, password, role)?;

        if role.is_admin() {
            // Set-once marker; a second admin never overwrites it.
            settings::mark_first_admin(&pool.conn, account_id)?;
            // Redundant with the lazy default above, kept for explicitness:
            // the admin-code row must exist once any admin does.
            settings::get_or_create_code(&pool.conn, CodeKind::Admin)?;
        }

        Ok(account_id)
    }
}
