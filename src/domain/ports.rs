use crate::domain::model::{Cuboid, OverlapRule};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Keyed store of cuboids consumed by the query engine.
///
/// Implementations must keep a failed `save` or `remove` from changing
/// anything, and must hand out consistent reads while a write is in flight.
#[async_trait]
pub trait CubeStore: Send + Sync {
    /// Fails with `DuplicateIdError` if a cube with the same id is stored.
    async fn save(&self, cube: Cuboid) -> Result<()>;

    /// Fails with `NotFoundError` if `id` is not stored.
    async fn remove(&self, id: &str) -> Result<()>;

    async fn clear(&self);

    async fn get(&self, id: &str) -> Option<Cuboid>;

    /// Unknown ids are skipped; the order of `ids` is kept.
    async fn get_by_ids(&self, ids: &[String]) -> Vec<Cuboid>;

    async fn get_all(&self) -> Vec<Cuboid>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl<T: CubeStore + ?Sized> CubeStore for Arc<T> {
    async fn save(&self, cube: Cuboid) -> Result<()> {
        (**self).save(cube).await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        (**self).remove(id).await
    }

    async fn clear(&self) {
        (**self).clear().await
    }

    async fn get(&self, id: &str) -> Option<Cuboid> {
        (**self).get(id).await
    }

    async fn get_by_ids(&self, ids: &[String]) -> Vec<Cuboid> {
        (**self).get_by_ids(ids).await
    }

    async fn get_all(&self) -> Vec<Cuboid> {
        (**self).get_all().await
    }

    async fn len(&self) -> usize {
        (**self).len().await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn overlap_rule(&self) -> OverlapRule;
    fn workers(&self) -> usize;
}
