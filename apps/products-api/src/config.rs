//! Configuration for Products API

use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use std::time::Duration;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Backing store for products, selected with `PRODUCTS_STORE`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreKind {
    Postgres,
    /// Process-local store; contents are lost on restart
    Memory,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub store: StoreKind,
    /// Present only when `store` is [`StoreKind::Postgres`]
    pub database: Option<PostgresConfig>,
    pub run_migrations: bool,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self::load()?)
    }

    fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let store: StoreKind = env_parse("PRODUCTS_STORE", "postgres")?;

        let database = match store {
            StoreKind::Postgres => Some(PostgresConfig::from_env()?), // DATABASE_URL required
            StoreKind::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            store,
            database,
            run_migrations: env_parse("RUN_MIGRATIONS", "true")?,
            shutdown_timeout: Duration::from_secs(env_parse("SHUTDOWN_TIMEOUT_SECS", "30")?),
        })
    }
}
