//! Caller-supplied credential for the completion provider

use super::error::DomainError;

/// API key forwarded to the completion provider on every call.
///
/// The key is opaque to this crate: it is only checked for emptiness and is
/// never printed. `Debug` is redacted so the key cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn try_new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(DomainError::EmptyApiKey);
        }
        Ok(Self(key))
    }

    /// Expose the raw key for building provider requests.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_key() {
        assert_eq!(ApiKey::try_new(""), Err(DomainError::EmptyApiKey));
        assert_eq!(ApiKey::try_new("  "), Err(DomainError::EmptyApiKey));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::try_new("sk-secret").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "sk-secret");
    }
}
