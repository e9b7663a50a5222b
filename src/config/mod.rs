//! Configuration loaded from `config.toml`.

mod credentials;
mod loader;
mod types;

pub use credentials::{SecureString, API_KEY_ENV_VAR};
pub use loader::ConfigError;
pub use types::{Config, GatewayConfig, StorageConfig};
