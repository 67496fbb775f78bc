use contracts::domain::orders::{
    ApiMessage, ChangeOrderStatusRequest, Order, OrdersResponse, ORDER_STATUS_READY,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::session::Session;

/// Generic message shown when the write endpoint fails without a usable body.
pub const UPDATE_ERROR_FALLBACK: &str = "Lỗi cập nhật";

/// Fetch orders awaiting pickup
pub async fn fetch_ready_orders(session: &Session) -> Result<Vec<Order>, String> {
    let auth_header = session.bearer().ok_or("Not authenticated")?;

    let url = api_url(&format!("/api/orders?status={}", ORDER_STATUS_READY));
    let response = Request::get(&url)
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    response
        .json::<OrdersResponse>()
        .await
        .map(|body| body.orders)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Move the given orders to a new fulfillment status
///
/// On a non-success response the error carries the server-provided message,
/// or a generic fallback when the body has none.
pub async fn change_order_status(
    session: &Session,
    order_ids: Vec<String>,
    order_status: &str,
) -> Result<(), String> {
    let auth_header = session.bearer().ok_or("Not authenticated")?;

    let request = ChangeOrderStatusRequest {
        order_ids,
        order_status: order_status.to_string(),
    };

    let response = Request::put(&api_url("/api/orders/status"))
        .header("Authorization", &auth_header)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        // Surface the server message when the error body is parseable
        let body = response.json::<ApiMessage>().await.unwrap_or_default();
        return Err(update_error_message(body));
    }

    Ok(())
}

/// Operator-facing error text for a failed status update: the server-provided
/// message, or the generic fallback when the body carries none.
fn update_error_message(body: ApiMessage) -> String {
    body.message
        .unwrap_or_else(|| UPDATE_ERROR_FALLBACK.to_string())
}
