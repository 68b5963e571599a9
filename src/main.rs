use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storefront::config::AppConfig;
use storefront::db;
use storefront::domain::checkout::{service as checkout_service, OrderItem};
use storefront::domain::customer::{
    Address, Customer, CustomerAddressChanged, CustomerCreated, CustomerDispatcher,
    LogWhenCustomerAddressChangedHandler, LogWhenCustomerIsCreatedHandler1,
    LogWhenCustomerIsCreatedHandler2,
};
use storefront::domain::product::Product;
use storefront::domain::Repository;
use storefront::infrastructure::{CustomerRepository, OrderRepository, ProductRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"))
        )
        .init();

    tracing::info!("Starting storefront demo");

    let config = AppConfig::from_env()?;

    // === 1. Database ===
    let pool = db::connect(&config.database).await?;
    db::init_schema(&pool).await?;

    // === 2. Compose the customer event dispatcher ===
    let mut dispatcher = CustomerDispatcher::new();
    dispatcher.register::<CustomerCreated, _>(LogWhenCustomerIsCreatedHandler1);
    dispatcher.register::<CustomerCreated, _>(LogWhenCustomerIsCreatedHandler2);
    dispatcher.register::<CustomerAddressChanged, _>(LogWhenCustomerAddressChangedHandler);
    let dispatcher = Arc::new(dispatcher);

    let customers = CustomerRepository::new(pool.clone(), dispatcher.clone());
    let products = ProductRepository::new(pool.clone());
    let orders = OrderRepository::new(pool.clone());

    // === 3. Customer lifecycle ===
    let customer_id = uuid::Uuid::new_v4().to_string();
    let mut customer = Customer::new(&customer_id, "Customer 1", dispatcher.clone())?;
    customer.change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1")?)?;
    customer.activate()?;
    customers.create(&customer).await?;

    // === 4. Catalog ===
    let product = Product::new(uuid::Uuid::new_v4().to_string(), "Product 1", 10.0)?;
    products.create(&product).await?;

    // === 5. Place an order ===
    let item = OrderItem::new(
        uuid::Uuid::new_v4().to_string(),
        product.name(),
        product.price(),
        product.id(),
        2,
    )?;
    let order = checkout_service::place_order(&mut customer, uuid::Uuid::new_v4().to_string(), vec![item])?;
    orders.create(&order).await?;
    customers.update(&customer).await?;

    // === 6. Read back ===
    let stored = customers.find(&customer_id).await?;
    tracing::info!(
        customer_id = %stored.id(),
        reward_points = stored.reward_points(),
        active = stored.is_active(),
        "Customer reloaded"
    );

    let all_orders = orders.find_all().await?;
    tracing::info!(
        order_count = all_orders.len(),
        total = checkout_service::total(&all_orders),
        "Orders reloaded"
    );

    tracing::info!("Demo complete");
    Ok(())
}
