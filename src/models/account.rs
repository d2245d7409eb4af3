use super::role::Role;
use serde::Serialize;

/// Full account row, including the stored password.
/// Never leaves the db/core layers; callers get an [`AccountView`].
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,   // stored as-is, by design
    pub role: Role,         // ⇔ users.role ('worker' | 'admin')
    pub created_at: String, // ⇔ users.created_at (TEXT, ISO8601)
}

/// Sanitized account record: what login, rosters and JSON output expose.
#[derive(Debug, Clone, Serialize)]
pub struct AccountView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
}

impl Account {
    /// Strip the password field.
    pub fn into_view(self) -> AccountView {
        AccountView {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
        }
    }
}
