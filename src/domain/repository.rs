use anyhow::Result;
use async_trait::async_trait;

// ============================================================================
// Repository Port
// ============================================================================

/// Collection-like persistence for an aggregate `T`.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn create(&self, entity: &T) -> Result<()>;

    async fn update(&self, entity: &T) -> Result<()>;

    /// Fails if no entity with `id` exists
    async fn find(&self, id: &str) -> Result<T>;

    async fn find_all(&self) -> Result<Vec<T>>;
}
