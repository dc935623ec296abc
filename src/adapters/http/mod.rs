//! HTTP adapters - REST API implementations.
//!
//! # Module Structure
//!
//! - `error` - Domain error to HTTP response mapping
//! - `middleware` - Authentication middleware and extractors
//! - `listing` - Listing CRUD and browse endpoints
//! - `payment` - Checkout and webhook endpoints
//! - `upload` - Photo upload and serving endpoints

pub mod error;
pub mod listing;
pub mod middleware;
pub mod payment;
pub mod upload;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::application::handlers::listing::{
    CreateListingHandler, DeleteListingHandler, GetListingHandler, ListMyListingsHandler,
    ListPublicListingsHandler, RenewalReminderHandler, UpdateListingHandler,
};
use crate::application::handlers::payment::{BeginCheckoutHandler, HandlePaymentWebhookHandler};
use crate::ports::{
    ImageStorage, ListingRepository, PaymentProvider, PaymentRecordRepository, TokenVerifier,
    WebhookEventRepository,
};

pub use error::{ApiError, ErrorResponse};
pub use middleware::{auth_middleware, AuthState, OptionalAuth, RequireAuth};

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped
/// dependencies for efficient sharing across handlers.
#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<dyn ListingRepository>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub webhook_events: Arc<dyn WebhookEventRepository>,
    pub payment_records: Arc<dyn PaymentRecordRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    /// Base URL of the public site, used for checkout redirect URLs.
    pub public_site_url: String,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn create_listing_handler(&self) -> CreateListingHandler {
        CreateListingHandler::new(self.listings.clone())
    }

    pub fn get_listing_handler(&self) -> GetListingHandler {
        GetListingHandler::new(self.listings.clone())
    }

    pub fn update_listing_handler(&self) -> UpdateListingHandler {
        UpdateListingHandler::new(self.listings.clone())
    }

    pub fn delete_listing_handler(&self) -> DeleteListingHandler {
        DeleteListingHandler::new(self.listings.clone())
    }

    pub fn list_public_listings_handler(&self) -> ListPublicListingsHandler {
        ListPublicListingsHandler::new(self.listings.clone())
    }

    pub fn list_my_listings_handler(&self) -> ListMyListingsHandler {
        ListMyListingsHandler::new(self.listings.clone())
    }

    pub fn renewal_reminder_handler(&self) -> RenewalReminderHandler {
        RenewalReminderHandler::new(self.listings.clone())
    }

    pub fn begin_checkout_handler(&self) -> BeginCheckoutHandler {
        BeginCheckoutHandler::new(
            self.listings.clone(),
            self.payment_provider.clone(),
            self.public_site_url.clone(),
        )
    }

    pub fn webhook_handler(&self) -> HandlePaymentWebhookHandler {
        HandlePaymentWebhookHandler::new(
            self.listings.clone(),
            self.payment_provider.clone(),
            self.webhook_events.clone(),
            self.payment_records.clone(),
        )
    }
}

/// GET /api/health - liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create the complete API router, suitable for nesting at `/api`.
///
/// The auth middleware runs on every route; it injects the authenticated
/// user when a valid Bearer token is present and rejects invalid tokens.
/// Routes decide per-handler whether authentication is required.
pub fn api_router(state: AppState) -> Router {
    let auth_state: AuthState = state.token_verifier.clone();

    Router::new()
        .route("/health", get(health))
        .nest("/listings", listing::listing_routes())
        .nest("/payments", payment::payment_routes())
        .nest("/webhooks", payment::webhook_routes())
        .nest("/uploads", upload::upload_routes())
        .nest("/admin", listing::admin_routes())
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::auth::MockTokenVerifier;
    use crate::adapters::memory::{
        InMemoryListingRepository, InMemoryPaymentRecordRepository, InMemoryWebhookEventRepository,
    };
    use crate::adapters::stripe::MockPaymentProvider;
    use crate::ports::StorageError;
    use async_trait::async_trait;

    /// Image storage stub for router tests.
    pub struct NoopImageStorage;

    #[async_trait]
    impl ImageStorage for NoopImageStorage {
        async fn store(
            &self,
            _data: &[u8],
            _extension: &str,
        ) -> Result<crate::ports::StoredImage, StorageError> {
            Ok(crate::ports::StoredImage {
                file_name: "photo.jpg".to_string(),
                url: "/api/uploads/photo.jpg".to_string(),
            })
        }

        async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
            Err(StorageError::NotFound(file_name.to_string()))
        }

        async fn delete(&self, _file_name: &str) -> Result<bool, StorageError> {
            Ok(false)
        }
    }

    pub fn test_state() -> AppState {
        AppState {
            listings: Arc::new(InMemoryListingRepository::new()),
            payment_provider: Arc::new(MockPaymentProvider::new()),
            webhook_events: Arc::new(InMemoryWebhookEventRepository::new()),
            payment_records: Arc::new(InMemoryPaymentRecordRepository::new()),
            image_storage: Arc::new(NoopImageStorage),
            token_verifier: Arc::new(MockTokenVerifier::new()),
            public_site_url: "https://pedalpost.test".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_router_builds() {
        let _router: Router = api_router(test_support::test_state());
    }

    #[test]
    fn app_state_is_clone() {
        let state = test_support::test_state();
        let _clone = state.clone();
    }
}
