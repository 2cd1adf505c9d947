use std::sync::Arc;

use watchlist_db::Database;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The movie and category collections.
    pub db: Arc<Database>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
