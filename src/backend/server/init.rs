/**
 * Server Initialization
 *
 * Builds every long-lived service exactly once: the optional database pool,
 * the contact/thread/user stores on top of it, and the identity provider.
 * Handlers receive them through `AppState`; nothing reads the environment
 * after this point.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::{
    IdentityError, IdentityProvider, LocalIdentity, MemoryUserStore, PgUserStore, RemoteIdentity,
    TokenIssuer, UserStore,
};
use crate::backend::contacts::{ContactGraph, ContactStore, MemoryContactStore, PgContactStore};
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, IdentityConfig, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::threads::{MemoryThreadStore, PgThreadStore, ThreadStore};

/// Construct the configured identity provider
pub fn build_identity(
    config: &IdentityConfig,
    users: Arc<dyn UserStore>,
) -> Result<Arc<dyn IdentityProvider>, IdentityError> {
    match config {
        IdentityConfig::Local {
            jwt_secret,
            token_ttl_secs,
            bcrypt_cost,
        } => Ok(Arc::new(LocalIdentity::new(
            users,
            TokenIssuer::new(jwt_secret, *token_ttl_secs),
            *bcrypt_cost,
        ))),
        IdentityConfig::Remote { url, service_key } => {
            Ok(Arc::new(RemoteIdentity::new(url.clone(), service_key.clone())?))
        }
    }
}

/// Build the application state from configuration
///
/// # Errors
///
/// A configured database that cannot be reached or migrated aborts startup.
pub async fn build_state(config: ServerConfig) -> Result<AppState, BackendError> {
    let db_pool = match &config.database {
        Some(database) => Some(load_database(database).await?),
        None => {
            tracing::warn!("DATABASE_URL not set. Data is kept in memory and lost on restart.");
            None
        }
    };

    let (contact_store, threads, users): (Arc<dyn ContactStore>, Arc<dyn ThreadStore>, Arc<dyn UserStore>) =
        match &db_pool {
            Some(pool) => (
                Arc::new(PgContactStore::new(pool.clone())),
                Arc::new(PgThreadStore::new(pool.clone())),
                Arc::new(PgUserStore::new(pool.clone())),
            ),
            None => (
                Arc::new(MemoryContactStore::new()),
                Arc::new(MemoryThreadStore::new()),
                Arc::new(MemoryUserStore::new()),
            ),
        };

    let identity = build_identity(&config.identity, users)?;

    let state = AppState {
        contacts: ContactGraph::new(contact_store),
        threads,
        identity,
        config: Arc::new(config),
        db_pool,
    };

    tracing::info!(
        storage = state.storage_name(),
        identity = state.identity.name(),
        origins = state.config.allowed_origins.len(),
        "Application state initialized"
    );

    Ok(state)
}

/// Create and configure the Axum application
///
/// Returns the router together with the state so the caller can release
/// resources (the database pool) on shutdown.
pub async fn create_app(config: ServerConfig) -> Result<(Router, AppState), BackendError> {
    tracing::info!("Initializing Biszbo backend server");

    let state = build_state(config).await?;
    let app = create_router(state.clone());

    tracing::info!("Router configured");
    Ok((app, state))
}
