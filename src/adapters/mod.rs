//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT token verification (and a mock for tests)
//! - `http` - Axum REST API
//! - `memory` - In-memory repositories for tests and local development
//! - `postgres` - PostgreSQL-backed repositories
//! - `storage` - Filesystem photo storage
//! - `stripe` - Stripe payment gateway (and a mock for tests)

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod storage;
pub mod stripe;
