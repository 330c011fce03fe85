use axum::Router;

use crate::state::AppState;

pub mod analytics;
pub mod auth;
pub mod doc;
pub mod food;
pub mod health;
pub mod orders;
pub mod params;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/food", food::router())
        .nest("/orders", orders::router())
        .nest("/analytics", analytics::router())
}
