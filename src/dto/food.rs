use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::FoodItem;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddFoodItemRequest {
    // Generated server-side when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddFoodItemResponse {
    pub success: bool,
    pub message: String,
    pub item_id: String,
    pub image_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FoodItemList {
    pub success: bool,
    pub items: Vec<FoodItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFoodItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateFoodItemResponse {
    pub success: bool,
    pub message: String,
    pub item: FoodItem,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteFoodItemResponse {
    pub success: bool,
    pub message: String,
}
