use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    constants::VALID_ORDER_STATUSES,
    dto::orders::{
        OrderStatusView, PlaceOrderRequest, PlaceOrderResponse, UpdateOrderStatusRequest,
        UpdateOrderStatusResponse,
    },
    error::{AppError, AppResult},
    models::Order,
    routes::params::{ByStatusQuery, LatestOrderQuery, UserOrdersQuery},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/place", post(place_order))
        .route("/track/{order_id}", get(track_order))
        .route("/status/{order_id}", get(get_order_status))
        .route("/update-status", post(update_order_status))
        .route("/by-status", get(get_orders_by_status))
        .route("/user", get(get_user_orders))
        .route("/user/latest", get(get_latest_order))
}

#[utoipa::path(
    post,
    path = "/api/orders/place",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = PlaceOrderResponse),
        (status = 404, description = "No user registered under the given email")
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<Json<PlaceOrderResponse>> {
    let order = order_service::create_order(&state, payload).await?;
    Ok(Json(PlaceOrderResponse {
        success: true,
        order_id: order.order_id,
    }))
}

#[utoipa::path(
    get,
    path = "/api/orders/track/{order_id}",
    responses(
        (status = 200, description = "Full order record", body = Order),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn track_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = order_service::track_order(&state, &order_id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/api/orders/status/{order_id}",
    responses(
        (status = 200, description = "Status projection of the order", body = OrderStatusView),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<OrderStatusView>> {
    let view = order_service::get_order_status(&state, &order_id).await?;
    Ok(Json(view))
}

#[utoipa::path(
    post,
    path = "/api/orders/update-status",
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UpdateOrderStatusResponse),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<UpdateOrderStatusResponse>> {
    if !VALID_ORDER_STATUSES.contains(&payload.status.as_str()) {
        return Err(AppError::InvalidArgument(format!(
            "Invalid status. Valid statuses are: {}",
            VALID_ORDER_STATUSES.join(", ")
        )));
    }

    let order = order_service::update_order_status(&state, &payload.order_id, &payload.status).await?;
    Ok(Json(UpdateOrderStatusResponse {
        success: true,
        message: format!("Order status updated to {}", payload.status),
        order,
    }))
}

#[utoipa::path(
    get,
    path = "/api/orders/by-status",
    params(("status" = String, Query, description = "Order status to filter by")),
    responses(
        (status = 200, description = "Orders with the given status, newest first", body = [Order]),
    ),
    tag = "Orders"
)]
pub async fn get_orders_by_status(
    State(state): State<AppState>,
    Query(query): Query<ByStatusQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::get_orders_by_status(&state, &query.status).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/user",
    params(
        ("userEmail" = String, Query, description = "Owner of the orders"),
        ("after" = Option<String>, Query, description = "ISO-8601 exclusive lower bound on orderDate")
    ),
    responses(
        (status = 200, description = "The user's orders, newest first", body = [Order]),
        (status = 400, description = "Malformed 'after' timestamp")
    ),
    tag = "Orders"
)]
pub async fn get_user_orders(
    State(state): State<AppState>,
    Query(query): Query<UserOrdersQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders =
        order_service::get_user_orders(&state, &query.user_email, query.after.as_deref()).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/orders/user/latest",
    params(("userEmail" = String, Query, description = "Owner of the orders")),
    responses(
        (status = 200, description = "The user's most recent order", body = Order),
        (status = 404, description = "No orders found for this user")
    ),
    tag = "Orders"
)]
pub async fn get_latest_order(
    State(state): State<AppState>,
    Query(query): Query<LatestOrderQuery>,
) -> AppResult<Json<Order>> {
    let order = order_service::get_latest_user_order(&state, &query.user_email).await?;
    Ok(Json(order))
}
