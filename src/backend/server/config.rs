/**
 * Server Configuration
 *
 * `ServerConfig` is assembled once at startup, either with the builder or
 * from environment variables (after `.env` has been loaded by `main`).
 *
 * # Environment
 *
 * | Variable | Default |
 * |---|---|
 * | `PORT` (or `SERVER_PORT`) | `3000` |
 * | `DATABASE_URL` | unset, in-process storage |
 * | `DATABASE_MAX_CONNECTIONS` | `5` |
 * | `ALLOWED_ORIGINS` | the deployed client origins |
 * | `IDENTITY_PROVIDER` | `local` |
 * | `JWT_SECRET` | required for `local` |
 * | `TOKEN_TTL_SECS` | `3600` |
 * | `BCRYPT_COST` | `bcrypt::DEFAULT_COST` |
 * | `IDENTITY_URL`, `IDENTITY_SERVICE_KEY` | required for `remote` |
 *
 * # Error Handling
 *
 * Unlike optional services in a development setup, a configured database
 * that cannot be reached is a startup error.
 */

use std::fmt;
use std::str::FromStr;

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::backend::error::StoreError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "https://byson94.github.io",
    "https://biszbo.onrender.com",
];

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl fmt::Display) -> Self {
        Self::InvalidValue {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Which identity provider serves `/register`, `/login` and `/me`
#[derive(Clone, PartialEq, Eq)]
pub enum IdentityConfig {
    Local {
        jwt_secret: String,
        token_ttl_secs: u64,
        bcrypt_cost: u32,
    },
    Remote {
        url: String,
        service_key: String,
    },
}

impl IdentityConfig {
    pub fn local(jwt_secret: impl Into<String>) -> Self {
        Self::Local {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Local { .. } => "local",
            Self::Remote { .. } => "remote",
        }
    }
}

// Secrets stay out of logs
impl fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local {
                token_ttl_secs,
                bcrypt_cost,
                ..
            } => f
                .debug_struct("Local")
                .field("jwt_secret", &"<redacted>")
                .field("token_ttl_secs", token_ttl_secs)
                .field("bcrypt_cost", bcrypt_cost)
                .finish(),
            Self::Remote { url, .. } => f
                .debug_struct("Remote")
                .field("url", url)
                .field("service_key", &"<redacted>")
                .finish(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// `None` selects the in-process stores
    pub database: Option<DatabaseConfig>,
    pub allowed_origins: Vec<String>,
    pub identity: IdentityConfig,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut builder = Self::builder();

        if let Some(raw) = get("PORT").or_else(|| get("SERVER_PORT")) {
            builder = builder.port(parse("PORT", &raw)?);
        }

        if let Some(url) = get("DATABASE_URL") {
            let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
                Some(raw) => parse("DATABASE_MAX_CONNECTIONS", &raw)?,
                None => DEFAULT_MAX_CONNECTIONS,
            };
            builder = builder.database(url, max_connections);
        }

        if let Some(raw) = get("ALLOWED_ORIGINS") {
            builder = builder.allowed_origins(raw.split(',').map(str::to_string));
        }

        let provider = get("IDENTITY_PROVIDER").unwrap_or_else(|| "local".to_string());
        let identity = match provider.to_ascii_lowercase().as_str() {
            "local" => {
                let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
                let token_ttl_secs = match get("TOKEN_TTL_SECS") {
                    Some(raw) => parse("TOKEN_TTL_SECS", &raw)?,
                    None => DEFAULT_TOKEN_TTL_SECS,
                };
                let bcrypt_cost = match get("BCRYPT_COST") {
                    Some(raw) => parse("BCRYPT_COST", &raw)?,
                    None => bcrypt::DEFAULT_COST,
                };
                IdentityConfig::Local {
                    jwt_secret,
                    token_ttl_secs,
                    bcrypt_cost,
                }
            }
            "remote" => IdentityConfig::Remote {
                url: get("IDENTITY_URL").ok_or(ConfigError::MissingValue("IDENTITY_URL"))?,
                service_key: get("IDENTITY_SERVICE_KEY")
                    .ok_or(ConfigError::MissingValue("IDENTITY_SERVICE_KEY"))?,
            },
            _ => {
                return Err(ConfigError::invalid(
                    "IDENTITY_PROVIDER",
                    &provider,
                    "expected `local` or `remote`",
                ))
            }
        };

        builder.identity(identity).build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::MissingValue("ALLOWED_ORIGINS"));
        }
        if let Some(database) = &self.database {
            if database.max_connections == 0 {
                return Err(ConfigError::invalid(
                    "DATABASE_MAX_CONNECTIONS",
                    "0",
                    "pool needs at least one connection",
                ));
            }
        }
        match &self.identity {
            IdentityConfig::Local {
                jwt_secret,
                bcrypt_cost,
                token_ttl_secs,
            } => {
                if jwt_secret.is_empty() {
                    return Err(ConfigError::MissingValue("JWT_SECRET"));
                }
                if !(4..=31).contains(bcrypt_cost) {
                    return Err(ConfigError::invalid(
                        "BCRYPT_COST",
                        &bcrypt_cost.to_string(),
                        "must be between 4 and 31",
                    ));
                }
                if *token_ttl_secs == 0 {
                    return Err(ConfigError::invalid("TOKEN_TTL_SECS", "0", "must be positive"));
                }
            }
            IdentityConfig::Remote { url, service_key } => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::invalid("IDENTITY_URL", url, "not an http(s) URL"));
                }
                if service_key.is_empty() {
                    return Err(ConfigError::MissingValue("IDENTITY_SERVICE_KEY"));
                }
            }
        }
        Ok(())
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse().map_err(|e| ConfigError::invalid(key, raw, e))
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database: Option<DatabaseConfig>,
    allowed_origins: Option<Vec<String>>,
    identity: Option<IdentityConfig>,
}

impl ServerConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database(mut self, url: impl Into<String>, max_connections: u32) -> Self {
        self.database = Some(DatabaseConfig {
            url: url.into(),
            max_connections,
        });
        self
    }

    /// Replace the CORS origin list; entries are trimmed and blanks dropped
    pub fn allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = Some(
            origins
                .into_iter()
                .map(|o| o.into().trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        );
        self
    }

    pub fn identity(mut self, identity: IdentityConfig) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database: self.database,
            allowed_origins: self.allowed_origins.unwrap_or_else(|| {
                DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
            }),
            identity: self.identity.ok_or(ConfigError::MissingValue("IDENTITY_PROVIDER"))?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Connect the pool and bring the schema up to date
///
/// # Errors
///
/// Connection and migration failures are returned; the caller aborts startup.
pub async fn load_database(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
