use chrono::{DateTime, Utc};

use crate::{
    constants::ORDERS_COLLECTION,
    dto::orders::{OrderAnalytics, StatusBreakdown},
    error::{AppError, AppResult},
    models::{Order, StatusHistoryEntry},
    store::JsonStore,
};

pub async fn find_all(store: &JsonStore) -> AppResult<Vec<Order>> {
    Ok(store.read(ORDERS_COLLECTION, Vec::new()).await?)
}

pub async fn find_by_id(store: &JsonStore, order_id: &str) -> AppResult<Option<Order>> {
    let orders = find_all(store).await?;
    Ok(orders.into_iter().find(|o| o.order_id == order_id))
}

pub async fn find_by_user_email(store: &JsonStore, user_email: &str) -> AppResult<Vec<Order>> {
    let orders = find_all(store).await?;
    Ok(orders
        .into_iter()
        .filter(|o| o.user_email == user_email)
        .collect())
}

pub async fn find_by_status(store: &JsonStore, status: &str) -> AppResult<Vec<Order>> {
    let orders = find_all(store).await?;
    Ok(orders.into_iter().filter(|o| o.status == status).collect())
}

/// A user's orders placed strictly after `after` (an ISO-8601 timestamp).
pub async fn find_by_user_email_after(
    store: &JsonStore,
    user_email: &str,
    after: &str,
) -> AppResult<Vec<Order>> {
    let cutoff: DateTime<Utc> = after.parse().map_err(|_| {
        AppError::InvalidArgument("Invalid 'after' timestamp format. Use ISO format.".into())
    })?;

    let orders = find_by_user_email(store, user_email).await?;
    Ok(orders
        .into_iter()
        .filter(|o| o.order_date > cutoff)
        .collect())
}

/// The user's most recent order, or `None` when they have none. Equal
/// timestamps resolve to the record later in file order.
pub async fn get_latest_by_user_email(
    store: &JsonStore,
    user_email: &str,
) -> AppResult<Option<Order>> {
    let orders = find_by_user_email(store, user_email).await?;
    Ok(orders.into_iter().max_by_key(|o| o.order_date))
}

/// Persists a new order, seeding its status history with a single entry
/// that mirrors the supplied status. User existence is the service's
/// concern; duplicate order ids are accepted as-is.
pub async fn create(store: &JsonStore, mut order: Order) -> AppResult<Order> {
    let mut orders = find_all(store).await?;

    let now = Utc::now();
    order.status_history = vec![StatusHistoryEntry {
        status: order.status.clone(),
        timestamp: now,
        description: "Order placed and confirmed".into(),
    }];
    order.last_updated = now;

    orders.push(order.clone());
    store.write(ORDERS_COLLECTION, &orders).await?;
    Ok(order)
}

/// Moves an order to `status` and appends a matching history entry.
/// Transitions are unrestricted: any status can follow any other,
/// including moves out of `delivered` or `cancelled`.
pub async fn append_status(
    store: &JsonStore,
    order_id: &str,
    status: &str,
    description: &str,
) -> AppResult<Order> {
    let mut orders = find_all(store).await?;
    let order = orders
        .iter_mut()
        .find(|o| o.order_id == order_id)
        .ok_or_else(|| AppError::NotFound("Order not found".into()))?;

    let now = Utc::now();
    order.status = status.to_string();
    order.last_updated = now;
    order.status_history.push(StatusHistoryEntry {
        status: status.to_string(),
        timestamp: now,
        description: description.to_string(),
    });

    let updated = order.clone();
    store.write(ORDERS_COLLECTION, &orders).await?;
    Ok(updated)
}

/// Single-pass scan of the whole collection: per-status count and total,
/// plus how many orders landed on the current UTC day.
pub async fn aggregate(store: &JsonStore) -> AppResult<OrderAnalytics> {
    let orders = find_all(store).await?;

    let mut breakdown: std::collections::BTreeMap<String, StatusBreakdown> = Default::default();
    let today = Utc::now().date_naive();
    let mut today_orders = 0u64;

    for order in &orders {
        let entry = breakdown
            .entry(order.status.clone())
            .or_insert_with(|| StatusBreakdown {
                status: order.status.clone(),
                count: 0,
                total_amount: 0.0,
            });
        entry.count += 1;
        entry.total_amount += order.total;

        if order.order_date.date_naive() == today {
            today_orders += 1;
        }
    }

    Ok(OrderAnalytics {
        total_orders: orders.len() as u64,
        today_orders,
        status_breakdown: breakdown.into_values().collect(),
    })
}
