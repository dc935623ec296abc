//! HTTP handlers for payment endpoints.
//!
//! Checkout endpoints are owner-only commands; the webhook endpoint is
//! unauthenticated and relies on signature verification instead.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payment::{BeginCheckoutCommand, HandlePaymentWebhookCommand};
use crate::domain::foundation::{ListingId, UserId};
use crate::domain::listing::ListingError;
use crate::domain::payment::{CheckoutAction, WebhookOutcome};

use super::super::error::{ApiError, ErrorResponse};
use super::super::middleware::RequireAuth;
use super::super::AppState;
use super::dto::{CheckoutRequest, CheckoutResponse, PaymentRecordsResponse, WebhookAck};

/// POST /api/payments/checkout/listing - Start the listing fee checkout.
pub async fn begin_listing_checkout(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    begin_checkout(state, user.user_id, request, CheckoutAction::Listing).await
}

/// POST /api/payments/checkout/renew - Start the renewal fee checkout.
pub async fn begin_renewal_checkout(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    begin_checkout(state, user.user_id, request, CheckoutAction::Renew).await
}

async fn begin_checkout(
    state: AppState,
    user_id: UserId,
    request: CheckoutRequest,
    action: CheckoutAction,
) -> Result<(StatusCode, Json<CheckoutResponse>), ApiError> {
    let handler = state.begin_checkout_handler();
    let cmd = BeginCheckoutCommand {
        listing_id: ListingId::from_i64(request.listing_id),
        user_id,
        action,
    };

    let result = handler.handle(cmd).await?;

    let response = CheckoutResponse {
        session_id: result.session.id,
        checkout_url: result.session.url,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/payments - The caller's payment history, newest first.
pub async fn list_my_payments(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let records = state
        .payment_records
        .list_for_owner(user.user_id)
        .await
        .map_err(|e| ListingError::infrastructure(e.to_string()))?;

    let response = PaymentRecordsResponse {
        payments: records.into_iter().map(Into::into).collect(),
    };

    Ok(Json(response))
}

/// POST /api/webhooks/stripe - Handle Stripe webhook events.
///
/// Deliveries with a bad or stale signature are rejected so the provider
/// retries them; everything else is acknowledged with 200, applied or not.
pub async fn handle_stripe_webhook(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> axum::response::Response {
    let Some(signature) = headers
        .get("Stripe-Signature")
        .and_then(|v| v.to_str().ok())
    else {
        let error = ErrorResponse::new("MISSING_SIGNATURE", "Missing Stripe-Signature header");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    };

    let handler = state.webhook_handler();
    let cmd = HandlePaymentWebhookCommand {
        payload: body.to_vec(),
        signature: signature.to_string(),
    };

    match handler.handle(cmd).await {
        WebhookOutcome::Applied(_) | WebhookOutcome::Ignored(_) => {
            (StatusCode::OK, Json(WebhookAck { received: true })).into_response()
        }
        WebhookOutcome::Rejected(e) => {
            let error = ErrorResponse::new("WEBHOOK_REJECTED", e.to_string());
            (e.status_code(), Json(error)).into_response()
        }
    }
}
