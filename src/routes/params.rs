use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ByStatusQuery {
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserOrdersQuery {
    #[serde(rename = "userEmail")]
    pub user_email: String,
    /// ISO-8601 lower bound (exclusive) on the order date.
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LatestOrderQuery {
    #[serde(rename = "userEmail")]
    pub user_email: String,
}
