use std::fmt;

use serde::Deserialize;

/// Target environment of a connection. Selects the base URL and path
/// fragments used when resolving endpoints; fixed once a connection is
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Test,
    Mock,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Production => "production",
            Environment::Test => "test",
            Environment::Mock => "mock",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PixConfig {
    pub app_id: String,
    pub environment: Environment,
}

impl PixConfig {
    /// Loads the SDK configuration from `OPENPIX_APP_ID` and
    /// `OPENPIX_ENVIRONMENT`. The environment defaults to production.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("environment", "production")?
            .add_source(config::Environment::with_prefix("OPENPIX"))
            .build()?;

        config.try_deserialize()
    }
}
