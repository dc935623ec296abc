//! Axum middleware layers.
//!
//! - `auth` - Bearer token verification middleware plus the `RequireAuth`
//!   and `OptionalAuth` extractors used by route handlers.

pub mod auth;

pub use auth::{auth_middleware, AuthRejection, AuthState, OptionalAuth, RequireAuth};
