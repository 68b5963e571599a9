use std::sync::Arc;
use anyhow::{bail, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use crate::domain::customer::{Address, Customer, CustomerDispatcher};
use crate::domain::Repository;

// ============================================================================
// Customer Repository
// ============================================================================

type CustomerRow = (
    String,
    String,
    Option<String>,
    Option<i32>,
    Option<String>,
    Option<String>,
    bool,
    i64,
);

const SELECT_CUSTOMER: &str =
    "SELECT id, name, street, number, zipcode, city, active, reward_points FROM customers";

pub struct CustomerRepository {
    pool: SqlitePool,
    // Attached to rehydrated customers so they can announce later changes
    dispatcher: Arc<CustomerDispatcher>,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool, dispatcher: Arc<CustomerDispatcher>) -> Self {
        Self { pool, dispatcher }
    }

    fn into_customer(&self, row: CustomerRow) -> Result<Customer> {
        let (id, name, street, number, zipcode, city, active, reward_points) = row;

        let address = match (street, number, zipcode, city) {
            (Some(street), Some(number), Some(zipcode), Some(city)) => {
                Some(Address::new(street, number, zipcode, city)?)
            }
            _ => None,
        };

        Ok(Customer::restore(
            id,
            name,
            address,
            active,
            reward_points,
            self.dispatcher.clone(),
        )?)
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    async fn create(&self, entity: &Customer) -> Result<()> {
        let address = entity.address();

        sqlx::query(
            "INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(entity.id())
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(entity.reward_points())
        .execute(&self.pool)
        .await?;

        tracing::info!(customer_id = %entity.id(), "Customer persisted");
        Ok(())
    }

    async fn update(&self, entity: &Customer) -> Result<()> {
        let address = entity.address();

        let result = sqlx::query(
            "UPDATE customers
             SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
             WHERE id = ?",
        )
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(entity.reward_points())
        .bind(entity.id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            bail!("Customer not found: {}", entity.id());
        }

        tracing::info!(customer_id = %entity.id(), "Customer updated");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Customer> {
        let row: Option<CustomerRow> = sqlx::query_as(&format!("{SELECT_CUSTOMER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            bail!("Customer not found: {}", id);
        };

        tracing::debug!(customer_id = %id, "Loaded customer");
        self.into_customer(row)
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        let rows: Vec<CustomerRow> = sqlx::query_as(&format!("{SELECT_CUSTOMER} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(count = rows.len(), "Loaded customers");
        rows.into_iter().map(|row| self.into_customer(row)).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use crate::db::test_pool;
    use crate::domain::customer::CustomerCreated;
    use crate::events::{EventHandler, HandlerError};

    struct CountCreated(Arc<Mutex<usize>>);

    impl EventHandler<CustomerCreated> for CountCreated {
        fn handle(&self, _event: &CustomerCreated) -> Result<(), HandlerError> {
            *self.0.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn create_test_address() -> Address {
        Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap()
    }

    async fn repository() -> (CustomerRepository, Arc<CustomerDispatcher>) {
        let dispatcher = Arc::new(CustomerDispatcher::new());
        (CustomerRepository::new(test_pool().await, dispatcher.clone()), dispatcher)
    }

    #[tokio::test]
    async fn test_create_and_find_customer() {
        let (repository, dispatcher) = repository().await;
        let mut customer = Customer::new("123", "Customer 1", dispatcher).unwrap();
        customer.change_address(create_test_address()).unwrap();

        repository.create(&customer).await.unwrap();
        let found = repository.find("123").await.unwrap();

        assert_eq!(found, customer);
        assert_eq!(found.address(), Some(&create_test_address()));
    }

    #[tokio::test]
    async fn test_create_customer_without_address() {
        let (repository, dispatcher) = repository().await;
        let customer = Customer::new("123", "Customer 1", dispatcher).unwrap();

        repository.create(&customer).await.unwrap();

        assert!(repository.find("123").await.unwrap().address().is_none());
    }

    #[tokio::test]
    async fn test_update_customer() {
        let (repository, dispatcher) = repository().await;
        let mut customer = Customer::new("123", "Customer 1", dispatcher).unwrap();
        customer.change_address(create_test_address()).unwrap();
        repository.create(&customer).await.unwrap();

        customer.change_name("Customer 2").unwrap();
        customer.activate().unwrap();
        customer.add_reward_points(10);
        repository.update(&customer).await.unwrap();

        let found = repository.find("123").await.unwrap();
        assert_eq!(found.name(), "Customer 2");
        assert!(found.is_active());
        assert_eq!(found.reward_points(), 10);
    }

    #[tokio::test]
    async fn test_update_unknown_customer_fails() {
        let (repository, dispatcher) = repository().await;
        let customer = Customer::new("404", "Nobody", dispatcher).unwrap();

        let err = repository.update(&customer).await.unwrap_err();

        assert_eq!(err.to_string(), "Customer not found: 404");
    }

    #[tokio::test]
    async fn test_find_unknown_customer_fails() {
        let (repository, _) = repository().await;

        let err = repository.find("456ABC").await.unwrap_err();

        assert_eq!(err.to_string(), "Customer not found: 456ABC");
    }

    #[tokio::test]
    async fn test_find_all_customers() {
        let (repository, dispatcher) = repository().await;
        let mut customer1 = Customer::new("1", "Customer 1", dispatcher.clone()).unwrap();
        customer1.change_address(create_test_address()).unwrap();
        customer1.add_reward_points(10);
        customer1.activate().unwrap();
        let customer2 = Customer::new("2", "Customer 2", dispatcher).unwrap();

        repository.create(&customer1).await.unwrap();
        repository.create(&customer2).await.unwrap();

        let customers = repository.find_all().await.unwrap();
        assert_eq!(customers, vec![customer1, customer2]);
    }

    #[tokio::test]
    async fn test_loading_does_not_dispatch_created_event() {
        let created = Arc::new(Mutex::new(0));
        let mut dispatcher = CustomerDispatcher::new();
        dispatcher.register::<CustomerCreated, _>(CountCreated(created.clone()));
        let dispatcher = Arc::new(dispatcher);
        let repository = CustomerRepository::new(test_pool().await, dispatcher.clone());

        let customer = Customer::new("123", "Customer 1", dispatcher).unwrap();
        repository.create(&customer).await.unwrap();
        repository.find("123").await.unwrap();
        repository.find_all().await.unwrap();

        assert_eq!(*created.lock().unwrap(), 1);
    }
}
