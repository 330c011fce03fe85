use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::food::{AddFoodItemRequest, UpdateFoodItemRequest},
    error::{AppError, AppResult},
    models::FoodItem,
    repository::food::{self, FoodItemPatch},
    state::AppState,
};

/// Generated ids are 12 hex chars, short enough to embed in filenames and
/// URLs on the dashboard side.
fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

pub async fn add_item(state: &AppState, payload: AddFoodItemRequest) -> AppResult<FoodItem> {
    if payload.name.trim().is_empty() {
        return Err(AppError::InvalidArgument("Name cannot be empty".into()));
    }
    if payload.price <= 0.0 {
        return Err(AppError::InvalidArgument(
            "Price must be greater than 0".into(),
        ));
    }
    if payload.description.trim().is_empty() {
        return Err(AppError::InvalidArgument(
            "Description cannot be empty".into(),
        ));
    }

    let item = FoodItem {
        id: payload.id.unwrap_or_else(generate_id),
        name: payload.name.trim().to_string(),
        price: payload.price,
        description: payload.description.trim().to_string(),
        category: payload.category,
        image: payload.image,
        // Stamped again by the repository on create.
        created_at: Utc::now(),
    };

    let item = food::create(&state.store, item).await?;
    tracing::info!(item_id = %item.id, name = %item.name, "food item added");
    Ok(item)
}

pub async fn list_items(state: &AppState) -> AppResult<Vec<FoodItem>> {
    food::find_all(&state.store).await
}

pub async fn list_items_by_category(state: &AppState, category: &str) -> AppResult<Vec<FoodItem>> {
    food::find_by_category(&state.store, category).await
}

pub async fn update_item(
    state: &AppState,
    item_id: &str,
    payload: UpdateFoodItemRequest,
) -> AppResult<FoodItem> {
    let patch = FoodItemPatch {
        name: payload.name,
        price: payload.price,
        description: payload.description,
        category: payload.category,
        image: payload.image,
    };
    food::update(&state.store, item_id, patch).await
}

pub async fn delete_item(state: &AppState, item_id: &str) -> AppResult<FoodItem> {
    food::delete(&state.store, item_id).await
}
