use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the backing JSON document.
    pub path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        Self {
            environment,
            server: ServerConfig::from_env(),
            store: StoreConfig::from_env(),
        }
    }
}

impl ServerConfig {
    fn from_env() -> Self {
        // TEAMHUB_API_PORT wins over the generic PORT used by most deploy targets
        let port = env::var("TEAMHUB_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        Self { port }
    }
}

impl StoreConfig {
    fn from_env() -> Self {
        let path = env::var("TEAMHUB_DB_PATH").unwrap_or_else(|_| "db.json".to_string());

        Self { path }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Global configuration singleton, resolved from the environment on first use.
pub fn config() -> &'static AppConfig {
    &CONFIG
}
