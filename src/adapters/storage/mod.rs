//! Storage Adapters
//!
//! Implementations of the ImageStorage port for persisting listing photos.
//!
//! ## Available Adapters
//!
//! - **LocalImageStorage** - Stores images on the local filesystem
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::LocalImageStorage;
//!
//! let storage = LocalImageStorage::new("./uploads", "/api/uploads");
//! ```

mod local_image_storage;

pub use local_image_storage::{LocalImageStorage, MAX_IMAGE_BYTES};
