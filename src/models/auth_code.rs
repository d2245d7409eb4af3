/// The two shared authorization codes, each stored as a singleton
/// settings row keyed by its discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Worker,
    Admin,
}

impl CodeKind {
    /// Discriminator value of the settings row.
    pub fn discriminator(&self) -> &'static str {
        match self {
            CodeKind::Worker => "auth_code",
            CodeKind::Admin => "admin_auth_code",
        }
    }

    /// Code created lazily on first read when the row is absent.
    pub fn default_code(&self) -> &'static str {
        match self {
            CodeKind::Worker => "FACTORY123",
            CodeKind::Admin => "ADMIN",
        }
    }

}

/// Canonical form of an authorization code: surrounding whitespace trimmed,
/// letters uppercased. Applied both when storing a code and to submitted
/// codes before comparison, so the two sides always agree.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}
