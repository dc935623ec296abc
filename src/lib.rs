//! PedalPost - Used Bicycle Marketplace Backend
//!
//! This crate implements the listing lifecycle for a used bicycle
//! marketplace: draft listings, paid publication and renewal through
//! Stripe checkout, and visibility-window based browsing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
