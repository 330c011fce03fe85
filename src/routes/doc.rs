use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, PublicUser, RegisterRequest, RegisterResponse},
        food::{
            AddFoodItemRequest, AddFoodItemResponse, DeleteFoodItemResponse, FoodItemList,
            UpdateFoodItemRequest, UpdateFoodItemResponse,
        },
        orders::{
            OrderAnalytics, OrderStatusView, PlaceOrderRequest, PlaceOrderResponse,
            StatusBreakdown, UpdateOrderStatusRequest, UpdateOrderStatusResponse,
        },
    },
    models::{Address, FoodItem, Order, OrderLine, StatusHistoryEntry, User},
    routes::{analytics, auth, food, health, orders, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        food::list_food_items,
        food::list_food_items_by_category,
        food::add_food_item,
        food::update_food_item,
        food::delete_food_item,
        orders::place_order,
        orders::track_order,
        orders::get_order_status,
        orders::update_order_status,
        orders::get_orders_by_status,
        orders::get_user_orders,
        orders::get_latest_order,
        analytics::get_order_analytics
    ),
    components(
        schemas(
            User,
            FoodItem,
            Order,
            OrderLine,
            Address,
            StatusHistoryEntry,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            PublicUser,
            AddFoodItemRequest,
            AddFoodItemResponse,
            UpdateFoodItemRequest,
            UpdateFoodItemResponse,
            DeleteFoodItemResponse,
            FoodItemList,
            PlaceOrderRequest,
            PlaceOrderResponse,
            UpdateOrderStatusRequest,
            UpdateOrderStatusResponse,
            OrderStatusView,
            OrderAnalytics,
            StatusBreakdown,
            params::ByStatusQuery,
            params::UserOrdersQuery,
            params::LatestOrderQuery
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration and login"),
        (name = "Food", description = "Menu management"),
        (name = "Orders", description = "Order placement, tracking and status updates"),
        (name = "Analytics", description = "Order analytics"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
