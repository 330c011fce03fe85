use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Address, Order, OrderLine, StatusHistoryEntry};

/// Body of `POST /api/orders/place`. The caller supplies the order id and
/// the money fields; the server only stamps history and `lastUpdated`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub order_id: String,
    pub user_email: String,
    pub user_name: String,
    pub items: Vec<OrderLine>,
    pub address: Address,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub applied_coupon: Option<String>,
    pub payment_method: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    "confirmed".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceOrderResponse {
    pub success: bool,
    #[serde(rename = "orderId")]
    pub order_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_id: String,
    pub status: String,
    // Sent by the dashboard, recorded nowhere: the server stamps its own
    // transition time.
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateOrderStatusResponse {
    pub success: bool,
    pub message: String,
    pub order: Order,
}

/// Projection returned by `GET /api/orders/status/{order_id}`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusView {
    pub order_id: String,
    pub status: String,
    pub status_history: Vec<StatusHistoryEntry>,
    pub last_updated: DateTime<Utc>,
}

impl From<Order> for OrderStatusView {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            status: order.status,
            status_history: order.status_history,
            last_updated: order.last_updated,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusBreakdown {
    pub status: String,
    pub count: u64,
    pub total_amount: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderAnalytics {
    pub total_orders: u64,
    pub today_orders: u64,
    pub status_breakdown: Vec<StatusBreakdown>,
}
