//! REST wrappers for the bookings API
//!
//! Error contract: a missing session and a `401` both mean "not signed in
//! yet / session lapsed" and resolve to an empty list instead of an error.
//! Everything else surfaces as `Err` for the caller to report.

use contracts::domain::a001_booking::{
    CancelBookingRequest, CancelBookingResponse, ClientOrdersResponse, RawOrder,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::get_session;

const HTTP_UNAUTHORIZED: u16 = 401;

async fn fetch_orders(path: &str) -> Result<Vec<RawOrder>, String> {
    // No session: nothing to fetch, and the cache must stay untouched
    let Some(session) = get_session() else {
        return Ok(Vec::new());
    };

    let response = Request::get(&api_url(path))
        .header("Authorization", &session.bearer())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == HTTP_UNAUTHORIZED {
        // Session lapsed between read and request; same as unauthenticated
        return Ok(Vec::new());
    }
    if !response.ok() {
        return Err(format!("Server error: {}", response.status()));
    }

    let data: ClientOrdersResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.orders)
}

/// `GET /api/bookings/client` — active orders of the signed-in client
pub async fn fetch_client_orders() -> Result<Vec<RawOrder>, String> {
    fetch_orders("/api/bookings/client").await
}

/// `GET /api/bookings/client/history` — completed and canceled orders
pub async fn fetch_client_history() -> Result<Vec<RawOrder>, String> {
    fetch_orders("/api/bookings/client/history").await
}

/// `POST /api/bookings/cancel` — cancel a booking server-side.
/// Callers invalidate the order caches and re-fetch afterwards.
pub async fn cancel_booking(booking_id: String) -> Result<CancelBookingResponse, String> {
    let Some(session) = get_session() else {
        return Err("Not signed in".to_string());
    };

    let response = Request::post(&api_url("/api/bookings/cancel"))
        .header("Authorization", &session.bearer())
        .json(&CancelBookingRequest { booking_id })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Cancel failed: {}", response.status()));
    }

    let data: CancelBookingResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !data.success {
        return Err(data
            .message
            .clone()
            .unwrap_or_else(|| "Cancel was rejected".to_string()));
    }

    Ok(data)
}
