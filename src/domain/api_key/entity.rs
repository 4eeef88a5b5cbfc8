//! API key value type

/// Shared-secret key supplied by a caller
///
/// The raw value never appears in `Debug` output; use [`ApiKeyId::prefix`]
/// when a key has to be correlated in logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKeyId(String);

const LOG_PREFIX_LEN: usize = 4;

impl ApiKeyId {
    /// Wrap a raw key
    ///
    /// The value is kept exactly as supplied. Returns `None` for blank input
    /// or input containing control characters, which no provisioned key can
    /// match.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() || raw.chars().any(char::is_control) {
            return None;
        }

        Some(Self(raw))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short leading fragment safe to write to logs
    pub fn prefix(&self) -> String {
        self.0.chars().take(LOG_PREFIX_LEN).collect()
    }
}

impl std::fmt::Debug for ApiKeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKeyId({}***)", self.prefix())
    }
}
