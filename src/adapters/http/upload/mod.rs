//! HTTP adapter for photo upload endpoints.
//!
//! - `POST /api/uploads` - Store a listing photo
//! - `GET /api/uploads/:file_name` - Serve a stored photo

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::upload_routes;
