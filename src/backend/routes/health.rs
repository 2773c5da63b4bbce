//! Liveness report

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::backend::server::state::AppState;

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `postgres` or `memory`
    pub storage: &'static str,
    /// `local` or `remote`
    pub identity: &'static str,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        storage: state.storage_name(),
        identity: state.identity.name(),
    })
}
