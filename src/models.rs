use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account record. `password` always holds an argon2 hash, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub userid: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Menu entry. `image` is an opaque URL supplied by the caller; this
/// service never touches the bytes behind it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// One line of an order. Line items are opaque to the order subsystem:
/// no check is made that `id` refers to an existing food item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// One entry of an order's append-only status audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusHistoryEntry {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

/// The central entity. Wire and file representation is camelCase, matching
/// the JSON the frontend sends and the files persisted on disk.
///
/// Invariants maintained by the order repository:
/// - `status_history` is non-empty from creation onward and its last entry
///   mirrors the top-level `status`;
/// - history entries are appended in non-decreasing timestamp order;
/// - `last_updated` moves forward on every status change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_coupon: Option<String>,
    pub payment_method: String,
    pub status: String,
    // Legacy records may predate the audit trail; treat absent as empty.
    #[serde(default)]
    pub status_history: Vec<StatusHistoryEntry>,
    pub order_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
