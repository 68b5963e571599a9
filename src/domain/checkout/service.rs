use super::aggregate::Order;
use super::value_objects::OrderItem;
use super::errors::OrderError;
use crate::domain::customer::Customer;

// ============================================================================
// Order Domain Service
// ============================================================================
//
// Operations spanning several aggregates (orders and the customer placing
// them).
//
// ============================================================================

/// Sum of the totals of `orders`
pub fn total(orders: &[Order]) -> f64 {
    orders.iter().map(Order::total).sum()
}

/// Place an order for `customer`, crediting half of its total as reward
/// points (rounded down).
pub fn place_order(
    customer: &mut Customer,
    order_id: impl Into<String>,
    items: Vec<OrderItem>,
) -> Result<Order, OrderError> {
    let order = Order::new(order_id, customer.id(), items)?;

    // `as` saturates, so an infinite total credits i64::MAX
    let points = (order.total() / 2.0).floor() as i64;
    customer.add_reward_points(points);

    tracing::info!(
        order_id = %order.id(),
        customer_id = %customer.id(),
        total = order.total(),
        reward_points = points,
        "Order placed"
    );

    Ok(order)
}
