use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::orders::OrderAnalytics, error::AppResult, services::order_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/orders", get(get_order_analytics))
}

#[utoipa::path(
    get,
    path = "/api/analytics/orders",
    responses(
        (status = 200, description = "Order totals and per-status breakdown", body = OrderAnalytics),
    ),
    tag = "Analytics"
)]
pub async fn get_order_analytics(
    State(state): State<AppState>,
) -> AppResult<Json<OrderAnalytics>> {
    let analytics = order_service::get_order_analytics(&state).await?;
    Ok(Json(analytics))
}
