use std::collections::HashMap;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::{Sqlite, Transaction};

use crate::domain::checkout::{Order, OrderItem};
use crate::domain::Repository;

// ============================================================================
// Order Repository
// ============================================================================
//
// An order and its items are written in one transaction. Updating an order
// replaces its whole item set.
//
// ============================================================================

type OrderRow = (String, String);
type ItemRow = (String, String, String, String, f64, i32);

const SELECT_ITEMS: &str =
    "SELECT id, order_id, product_id, name, price, quantity FROM order_items";

pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert_items(tx: &mut Transaction<'_, Sqlite>, order: &Order) -> Result<()> {
        for item in order.items() {
            sqlx::query(
                "INSERT INTO order_items (id, order_id, product_id, name, price, quantity)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(item.id())
            .bind(order.id())
            .bind(item.product_id())
            .bind(item.name())
            .bind(item.price())
            .bind(item.quantity())
            .execute(&mut **tx)
            .await
            .with_context(|| format!("Failed to insert item {} of order {}", item.id(), order.id()))?;
        }
        Ok(())
    }

    fn into_order(row: OrderRow, item_rows: Vec<ItemRow>) -> Result<Order> {
        let (id, customer_id) = row;

        let items = item_rows
            .into_iter()
            .map(|(item_id, _, product_id, name, price, quantity)| {
                OrderItem::new(item_id, name, price, product_id, quantity)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Order::new(id, customer_id, items)?)
    }
}

#[async_trait]
impl Repository<Order> for OrderRepository {
    async fn create(&self, entity: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(entity.id())
            .bind(entity.customer_id())
            .bind(entity.total())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, entity).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = %entity.id(),
            customer_id = %entity.customer_id(),
            item_count = entity.items().len(),
            total = entity.total(),
            "Order persisted"
        );
        Ok(())
    }

    async fn update(&self, entity: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(entity.customer_id())
            .bind(entity.total())
            .bind(entity.id())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            bail!("Order not found: {}", entity.id());
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(entity.id())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, entity).await?;
        tx.commit().await?;

        tracing::info!(
            order_id = %entity.id(),
            item_count = entity.items().len(),
            total = entity.total(),
            "Order updated"
        );
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order> {
        let row: Option<OrderRow> = sqlx::query_as("SELECT id, customer_id FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            bail!("Order not found: {}", id);
        };

        let items: Vec<ItemRow> = sqlx::query_as(&format!("{SELECT_ITEMS} WHERE order_id = ? ORDER BY id"))
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(order_id = %id, item_count = items.len(), "Loaded order");
        Self::into_order(row, items)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows: Vec<OrderRow> = sqlx::query_as("SELECT id, customer_id FROM orders ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let item_rows: Vec<ItemRow> = sqlx::query_as(&format!("{SELECT_ITEMS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        let mut items_by_order: HashMap<String, Vec<ItemRow>> = HashMap::new();
        for item in item_rows {
            items_by_order.entry(item.1.clone()).or_default().push(item);
        }

        tracing::debug!(count = rows.len(), "Loaded orders");
        rows.into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.0).unwrap_or_default();
                Self::into_order(row, items)
            })
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::db::test_pool;
    use crate::domain::customer::{Address, Customer, CustomerDispatcher};
    use crate::domain::product::Product;
    use crate::infrastructure::{CustomerRepository, ProductRepository};

    // Customer "123" with an address and product "123" priced at 10
    async fn seeded_pool() -> SqlitePool {
        let pool = test_pool().await;

        let mut customer = Customer::new("123", "Customer 1", Arc::new(CustomerDispatcher::new())).unwrap();
        customer
            .change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap())
            .unwrap();
        CustomerRepository::new(pool.clone(), Arc::new(CustomerDispatcher::new()))
            .create(&customer)
            .await
            .unwrap();

        let product = Product::new("123", "Product 1", 10.0).unwrap();
        ProductRepository::new(pool.clone()).create(&product).await.unwrap();

        pool
    }

    fn order_item(id: &str, quantity: i32) -> OrderItem {
        OrderItem::new(id, "Product 1", 10.0, "123", quantity).unwrap()
    }

    #[tokio::test]
    async fn test_create_order() {
        let pool = seeded_pool().await;
        let repository = OrderRepository::new(pool.clone());
        let order = Order::new("123", "123", vec![order_item("1", 2)]).unwrap();

        repository.create(&order).await.unwrap();

        let (customer_id, total): (String, f64) =
            sqlx::query_as("SELECT customer_id, total FROM orders WHERE id = ?")
                .bind("123")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(customer_id, "123");
        assert_eq!(total, 20.0);

        let items: Vec<ItemRow> = sqlx::query_as(&format!("{SELECT_ITEMS} WHERE order_id = ?"))
            .bind("123")
            .fetch_all(&pool)
            .await
            .unwrap();
        assert_eq!(
            items,
            vec![(
                "1".to_string(),
                "123".to_string(),
                "123".to_string(),
                "Product 1".to_string(),
                10.0,
                2
            )]
        );
    }

    #[tokio::test]
    async fn test_find_order() {
        let repository = OrderRepository::new(seeded_pool().await);
        let order = Order::new("123", "123", vec![order_item("1", 2)]).unwrap();
        repository.create(&order).await.unwrap();

        let found = repository.find("123").await.unwrap();

        assert_eq!(found, order);
        assert_eq!(found.total(), 20.0);
    }

    #[tokio::test]
    async fn test_update_order_replaces_items() {
        let pool = seeded_pool().await;
        let repository = OrderRepository::new(pool.clone());
        let order = Order::new("123", "123", vec![order_item("1", 2)]).unwrap();
        repository.create(&order).await.unwrap();

        let updated = Order::new("123", "123", vec![order_item("1", 3), order_item("2", 1)]).unwrap();
        repository.update(&updated).await.unwrap();

        let found = repository.find("123").await.unwrap();
        assert_eq!(found, updated);

        let (total,): (f64,) = sqlx::query_as("SELECT total FROM orders WHERE id = ?")
            .bind("123")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 40.0);
    }

    #[tokio::test]
    async fn test_update_unknown_order_fails() {
        let repository = OrderRepository::new(seeded_pool().await);
        let order = Order::new("999", "123", vec![order_item("1", 1)]).unwrap();

        let err = repository.update(&order).await.unwrap_err();

        assert_eq!(err.to_string(), "Order not found: 999");
    }

    #[tokio::test]
    async fn test_find_unknown_order_fails() {
        let repository = OrderRepository::new(seeded_pool().await);

        let err = repository.find("999").await.unwrap_err();

        assert_eq!(err.to_string(), "Order not found: 999");
    }

    #[tokio::test]
    async fn test_find_all_orders() {
        let repository = OrderRepository::new(seeded_pool().await);
        let order1 = Order::new("123", "123", vec![order_item("1", 2)]).unwrap();
        let order2 = Order::new("456", "123", vec![order_item("2", 2)]).unwrap();
        repository.create(&order1).await.unwrap();
        repository.create(&order2).await.unwrap();

        let orders = repository.find_all().await.unwrap();

        assert_eq!(orders, vec![order1, order2]);
    }
}
