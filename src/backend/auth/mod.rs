//! Authentication Module
//!
//! Registration, login and session verification behind one
//! `IdentityProvider` trait with two implementations:
//!
//! - **`local`** - accounts in this server's `UserStore`, bcrypt hashes,
//!   HS256 session tokens from `sessions`
//! - **`remote`** - a GoTrue-compatible auth service over HTTP
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── provider.rs     - IdentityProvider trait and IdentityError
//! ├── users.rs        - User model and stores
//! ├── sessions.rs     - JWT token management
//! ├── local.rs        - Local provider
//! ├── remote.rs       - Remote provider
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Invalid credentials return 401 whether the email exists or not
//! - Password hashes never leave the `users` module

pub mod handlers;
pub mod local;
pub mod provider;
pub mod remote;
pub mod sessions;
pub mod users;

pub use handlers::{get_me, login, register};
pub use local::LocalIdentity;
pub use provider::{IdentityError, IdentityProvider};
pub use remote::RemoteIdentity;
pub use sessions::TokenIssuer;
pub use users::{MemoryUserStore, PgUserStore, User, UserStore};
