//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `listing` - Listing aggregate, lifecycle rules, and validation
//! - `payment` - Checkout pricing, webhook verification, and event processing

pub mod foundation;
pub mod listing;
pub mod payment;
