use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};

use crate::{
    dto::food::{
        AddFoodItemRequest, AddFoodItemResponse, DeleteFoodItemResponse, FoodItemList,
        UpdateFoodItemRequest, UpdateFoodItemResponse,
    },
    error::AppResult,
    services::food_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_food_items))
        .route("/add", post(add_food_item))
        .route("/category/{category}", get(list_food_items_by_category))
        .route("/{item_id}", put(update_food_item).delete(delete_food_item))
}

#[utoipa::path(
    get,
    path = "/api/food",
    responses((status = 200, description = "All food items", body = FoodItemList)),
    tag = "Food"
)]
pub async fn list_food_items(State(state): State<AppState>) -> AppResult<Json<FoodItemList>> {
    let items = food_service::list_items(&state).await?;
    Ok(Json(FoodItemList {
        success: true,
        items,
    }))
}

#[utoipa::path(
    get,
    path = "/api/food/category/{category}",
    responses((status = 200, description = "Food items in a category", body = FoodItemList)),
    tag = "Food"
)]
pub async fn list_food_items_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<FoodItemList>> {
    let items = food_service::list_items_by_category(&state, &category).await?;
    Ok(Json(FoodItemList {
        success: true,
        items,
    }))
}

#[utoipa::path(
    post,
    path = "/api/food/add",
    request_body = AddFoodItemRequest,
    responses(
        (status = 200, description = "Item added", body = AddFoodItemResponse),
        (status = 400, description = "Empty name/description or non-positive price")
    ),
    tag = "Food"
)]
pub async fn add_food_item(
    State(state): State<AppState>,
    Json(payload): Json<AddFoodItemRequest>,
) -> AppResult<Json<AddFoodItemResponse>> {
    let item = food_service::add_item(&state, payload).await?;
    Ok(Json(AddFoodItemResponse {
        success: true,
        message: format!("Item '{}' added successfully", item.name),
        item_id: item.id,
        image_url: item.image,
    }))
}

#[utoipa::path(
    put,
    path = "/api/food/{item_id}",
    request_body = UpdateFoodItemRequest,
    responses(
        (status = 200, description = "Item updated", body = UpdateFoodItemResponse),
        (status = 404, description = "Food item not found")
    ),
    tag = "Food"
)]
pub async fn update_food_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(payload): Json<UpdateFoodItemRequest>,
) -> AppResult<Json<UpdateFoodItemResponse>> {
    let item = food_service::update_item(&state, &item_id, payload).await?;
    Ok(Json(UpdateFoodItemResponse {
        success: true,
        message: "Item updated successfully".into(),
        item,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/food/{item_id}",
    responses(
        (status = 200, description = "Item deleted", body = DeleteFoodItemResponse),
        (status = 404, description = "Food item not found")
    ),
    tag = "Food"
)]
pub async fn delete_food_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> AppResult<Json<DeleteFoodItemResponse>> {
    food_service::delete_item(&state, &item_id).await?;
    Ok(Json(DeleteFoodItemResponse {
        success: true,
        message: "Item deleted successfully".into(),
    }))
}
