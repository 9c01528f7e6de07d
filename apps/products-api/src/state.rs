//! Application state management

use axum_helpers::ShutdownCoordinator;
use database::postgres::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// `None` when products live in memory
    pub db: Option<DatabaseConnection>,
    pub shutdown: ShutdownCoordinator,
}
