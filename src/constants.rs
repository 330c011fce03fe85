//! Domain constants shared across repositories, services and route
//! validation.

/// Collection names, used as file stems under the data directory.
pub const USERS_COLLECTION: &str = "users";
pub const ORDERS_COLLECTION: &str = "orders";
pub const FOOD_ITEMS_COLLECTION: &str = "food_items";

pub const VALID_ORDER_STATUSES: [&str; 5] = [
    "confirmed",
    "preparing",
    "out_for_delivery",
    "delivered",
    "cancelled",
];

pub const VALID_USER_ROLES: [&str; 3] = ["user", "manager", "owner"];

/// Human-readable description recorded in the status history for a given
/// status. Unknown statuses fall back to a generic message; the service
/// layer does not reject them.
pub fn status_description(status: &str) -> &'static str {
    match status {
        "confirmed" => "Order confirmed and being processed",
        "preparing" => "Your order is being prepared",
        "out_for_delivery" => "Order is out for delivery",
        "delivered" => "Order has been delivered successfully",
        "cancelled" => "Order has been cancelled",
        _ => "Status updated",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_have_specific_descriptions() {
        for status in VALID_ORDER_STATUSES {
            assert_ne!(status_description(status), "Status updated");
        }
    }

    #[test]
    fn unknown_status_falls_back() {
        assert_eq!(status_description("refunded"), "Status updated");
    }
}
