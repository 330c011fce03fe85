use chrono::Utc;

use crate::{
    constants::status_description,
    dto::orders::{OrderAnalytics, OrderStatusView, PlaceOrderRequest},
    error::{AppError, AppResult},
    models::Order,
    repository::{orders, users},
    state::AppState,
};

/// Places an order after checking that the referenced user exists.
/// Nothing else about the payload is second-guessed here: line items are
/// opaque and the money fields are trusted as sent.
pub async fn create_order(state: &AppState, payload: PlaceOrderRequest) -> AppResult<Order> {
    let user = users::find_by_email(&state.store, &payload.user_email).await?;
    if user.is_none() {
        return Err(AppError::NotFound(
            "User not found. Please register first.".into(),
        ));
    }

    let order = Order {
        order_id: payload.order_id,
        user_email: payload.user_email,
        user_name: payload.user_name,
        items: payload.items,
        address: payload.address,
        subtotal: payload.subtotal,
        discount: payload.discount,
        total: payload.total,
        applied_coupon: payload.applied_coupon,
        payment_method: payload.payment_method,
        status: payload.status,
        // Seeded by the repository on create.
        status_history: Vec::new(),
        order_date: payload.order_date.unwrap_or_else(Utc::now),
        last_updated: Utc::now(),
    };

    let order = orders::create(&state.store, order).await?;
    tracing::info!(order_id = %order.order_id, user = %order.user_email, "order placed");
    Ok(order)
}

pub async fn update_order_status(
    state: &AppState,
    order_id: &str,
    status: &str,
) -> AppResult<Order> {
    let description = status_description(status);
    let order = orders::append_status(&state.store, order_id, status, description).await?;
    tracing::info!(order_id = %order.order_id, status = %order.status, "order status updated");
    Ok(order)
}

pub async fn get_orders_by_status(state: &AppState, status: &str) -> AppResult<Vec<Order>> {
    let mut found = orders::find_by_status(&state.store, status).await?;
    found.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    Ok(found)
}

/// A user's orders, newest first, optionally restricted to those placed
/// strictly after an ISO-8601 timestamp.
pub async fn get_user_orders(
    state: &AppState,
    user_email: &str,
    after: Option<&str>,
) -> AppResult<Vec<Order>> {
    let mut found = match after {
        Some(after) => orders::find_by_user_email_after(&state.store, user_email, after).await?,
        None => orders::find_by_user_email(&state.store, user_email).await?,
    };
    found.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    Ok(found)
}

pub async fn get_latest_user_order(state: &AppState, user_email: &str) -> AppResult<Order> {
    orders::get_latest_by_user_email(&state.store, user_email)
        .await?
        .ok_or_else(|| AppError::NotFound("No orders found for this user".into()))
}

pub async fn track_order(state: &AppState, order_id: &str) -> AppResult<Order> {
    orders::find_by_id(&state.store, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))
}

pub async fn get_order_status(state: &AppState, order_id: &str) -> AppResult<OrderStatusView> {
    let order = orders::find_by_id(&state.store, order_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".into()))?;
    Ok(order.into())
}

pub async fn get_order_analytics(state: &AppState) -> AppResult<OrderAnalytics> {
    orders::aggregate(&state.store).await
}
