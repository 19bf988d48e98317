use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Bootstrap admin account created at startup when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserConfig {
    pub email: String,
    pub password: String,
    pub name: String,
    pub location: String,
}

impl AdminUserConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AdminUserConfig {
            email: env::var("ADMIN_EMAIL")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_EMAIL".to_string()))?,
            password: env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_PASSWORD".to_string()))?,
            name: env::var("ADMIN_NAME")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_NAME".to_string()))?,
            location: env::var("ADMIN_LOCATION").unwrap_or_else(|_| "Detroit".to_string()),
        })
    }
}
