//! Test application builders

use axum_test::TestServer;
use biszbo::backend::server::{
    config::{IdentityConfig, ServerConfig},
    init::create_app,
};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Local identity with the cheapest bcrypt cost
pub fn local_identity() -> IdentityConfig {
    IdentityConfig::Local {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_ttl_secs: 3600,
        bcrypt_cost: 4,
    }
}

/// Serve the full router over in-process stores
pub async fn server_with(identity: IdentityConfig) -> TestServer {
    let config = ServerConfig::builder()
        .allowed_origins([ALLOWED_ORIGIN])
        .identity(identity)
        .build()
        .expect("test configuration is valid");
    let (app, _state) = create_app(config).await.expect("Failed to create app");
    TestServer::new(app).expect("Failed to start test server")
}

pub async fn test_server() -> TestServer {
    server_with(local_identity()).await
}
