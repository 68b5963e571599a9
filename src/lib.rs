// ============================================================================
// Storefront - DDD building blocks over SQLite
// ============================================================================
//
// Layers:
// - events/         - generic synchronous event dispatcher
// - domain/         - customers, products, orders (entities, value objects,
//                     events, services, repository port)
// - infrastructure/ - SQLite repositories
//
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod events;
pub mod infrastructure;
