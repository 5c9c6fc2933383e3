use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait shared by every entity store.
///
/// `T` is the persisted entity, `N` the insert shape (no generated fields)
/// and `ID` the primary key type.
#[async_trait]
pub trait Repository<T, N, ID>: Send + Sync {
    /// Insert a new entity and return it with its generated ID
    async fn create(&self, entity: &N) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// List all entities, ordered by ID
    async fn find_all(&self) -> Result<Vec<T>>;
}
