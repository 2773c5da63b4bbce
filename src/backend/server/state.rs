/**
 * Application State Management
 *
 * `AppState` is built once in `init` and cloned into every handler. The
 * `FromRef` impls let handlers take only the piece they use, e.g.
 * `State<ContactGraph>` or `State<Arc<dyn ThreadStore>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::IdentityProvider;
use crate::backend::contacts::ContactGraph;
use crate::backend::server::config::ServerConfig;
use crate::backend::threads::ThreadStore;

/// Shared application state
///
/// # Fields
///
/// * `contacts` - contact list operations over the configured store
/// * `threads` - message thread store
/// * `identity` - the configured identity provider
/// * `config` - the configuration the server started with
/// * `db_pool` - `None` when running on in-process stores
#[derive(Clone)]
pub struct AppState {
    pub contacts: ContactGraph,
    pub threads: Arc<dyn ThreadStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub config: Arc<ServerConfig>,
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Name of the storage backend, for the health report
    pub fn storage_name(&self) -> &'static str {
        self.contacts.backend_name()
    }
}

impl FromRef<AppState> for ContactGraph {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.contacts.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ThreadStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.threads.clone()
    }
}

impl FromRef<AppState> for Arc<dyn IdentityProvider> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.identity.clone()
    }
}
