use serde::{Deserialize, Serialize};

/// Status code for orders ready for courier pickup.
pub const ORDER_STATUS_READY: &str = "cho_lay_hang";
/// Status code for orders handed over to the courier.
pub const ORDER_STATUS_DISPATCHED: &str = "dang_giao";

/// A specific color/size stock-keeping unit of a product within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "firstImage")]
    pub first_image: String,
    pub name: String,
    pub price: f64,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub address: String,
    pub phone: String,
}

/// A customer purchase record tracked through fulfillment statuses.
///
/// Status codes are opaque strings on the wire; unknown codes must still
/// deserialize so the UI can fall back to showing the raw code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub user_id: String,
    pub shipping_address: ShippingAddress,
    pub order_status: String,
    pub payment_status: String,
    pub products: Vec<Product>,
    #[serde(rename = "rawTotal")]
    pub raw_total: f64,
    #[serde(rename = "purchaseTotal")]
    pub purchase_total: f64,
}

/// Body of the orders read endpoint.
///
/// A missing `orders` field deserializes as the empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Body of the bulk status-change write endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeOrderStatusRequest {
    pub order_ids: Vec<String>,
    pub order_status: String,
}

/// Error body returned by the write endpoint on failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
