//! Credential resolution from configuration.

use super::types::GatewayConfig;

/// Env var consulted when the config file carries no API key.
pub const API_KEY_ENV_VAR: &str = "LEXICON_API_KEY";

/// An API key that prints as a mask in logs and debug output.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// The raw key, for the request header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl GatewayConfig {
    /// Resolve the API key: config first, then `LEXICON_API_KEY`.
    ///
    /// Called on demand and not cached. Empty values count as missing.
    pub fn resolve_api_key(&self) -> Option<SecureString> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    fn resolve_api_key_with(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Option<SecureString> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| env(API_KEY_ENV_VAR).filter(|k| !k.is_empty()))
            .map(SecureString::new)
    }
}
