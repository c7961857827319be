use crate::core::{Cuboid, CubeStore};
use crate::utils::error::{CubeError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    cubes: HashMap<String, Cuboid>,
    // insertion order of the keys in `cubes`
    order: Vec<String>,
}

/// Default [`CubeStore`]: a keyed map behind a single-writer lock.
///
/// Enumeration follows insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCubeStore {
    inner: RwLock<Inner>,
}

impl InMemoryCubeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CubeStore for InMemoryCubeStore {
    async fn save(&self, cube: Cuboid) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.cubes.contains_key(cube.id()) {
            return Err(CubeError::DuplicateIdError {
                id: cube.id().to_string(),
            });
        }
        inner.order.push(cube.id().to_string());
        inner.cubes.insert(cube.id().to_string(), cube);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.cubes.remove(id).is_none() {
            return Err(CubeError::NotFoundError { id: id.to_string() });
        }
        inner.order.retain(|k| k != id);
        Ok(())
    }

    async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.cubes.clear();
        inner.order.clear();
    }

    async fn get(&self, id: &str) -> Option<Cuboid> {
        self.inner.read().await.cubes.get(id).cloned()
    }

    async fn get_by_ids(&self, ids: &[String]) -> Vec<Cuboid> {
        let inner = self.inner.read().await;
        ids.iter()
            .filter_map(|id| inner.cubes.get(id).cloned())
            .collect()
    }

    async fn get_all(&self) -> Vec<Cuboid> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.cubes.get(id).cloned())
            .collect()
    }

    async fn len(&self) -> usize {
        self.inner.read().await.cubes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point3;
    use std::sync::Arc;

    fn cube(id: &str) -> Cuboid {
        Cuboid::new(id, 1.0, 1.0, 1.0, Point3::new(1.0, 1.0, 1.0)).unwrap()
    }

    fn assert_same_geometry(actual: &Cuboid, expected: &Cuboid) {
        assert_eq!(actual.length(), expected.length());
        assert_eq!(actual.height(), expected.height());
        assert_eq!(actual.width(), expected.width());
        assert_eq!(actual.center(), expected.center());
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let store = InMemoryCubeStore::new();
        let original = Cuboid::new("1", 2.0, 3.0, 4.0, Point3::new(-1.0, 0.5, 7.0)).unwrap();
        store.save(original.clone()).await.unwrap();

        let fetched = store.get("1").await.unwrap();
        assert_same_geometry(&fetched, &original);
        assert!(store.get("2").await.is_none());
    }

    #[tokio::test]
    async fn test_save_duplicate_id_fails_without_change() {
        let store = InMemoryCubeStore::new();
        store.save(cube("1")).await.unwrap();

        let other = Cuboid::new("1", 5.0, 5.0, 5.0, Point3::new(0.0, 0.0, 0.0)).unwrap();
        let err = store.save(other).await.unwrap_err();

        assert!(matches!(err, CubeError::DuplicateIdError { .. }));
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("1").await.unwrap().length(), 1.0);
    }

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order() {
        let store = InMemoryCubeStore::new();
        for id in ["b", "a", "c"] {
            store.save(cube(id)).await.unwrap();
        }

        let all = store.get_all().await;
        let ids: Vec<&str> = all.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_remove_missing_id_fails() {
        let store = InMemoryCubeStore::new();
        store.save(cube("1")).await.unwrap();

        let err = store.remove("2").await.unwrap_err();
        assert!(matches!(err, CubeError::NotFoundError { .. }));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_selected_cube() {
        let store = InMemoryCubeStore::new();
        store.save(cube("1")).await.unwrap();
        store.save(cube("2")).await.unwrap();

        store.remove("1").await.unwrap();

        assert!(store.get("1").await.is_none());
        assert_eq!(store.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = InMemoryCubeStore::new();
        store.save(cube("1")).await.unwrap();
        store.save(cube("2")).await.unwrap();

        store.clear().await;

        assert!(store.is_empty().await);
        assert!(store.get_all().await.is_empty());
        // clearing an empty store is fine too
        store.clear().await;
    }

    #[tokio::test]
    async fn test_get_by_ids_skips_unknown_and_keeps_order() {
        let store = InMemoryCubeStore::new();
        for id in ["1", "2", "3"] {
            store.save(cube(id)).await.unwrap();
        }

        let wanted = vec![
            "3".to_string(),
            "nope".to_string(),
            "1".to_string(),
            "".to_string(),
        ];
        let found = store.get_by_ids(&wanted).await;
        let ids: Vec<&str> = found.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[tokio::test]
    async fn test_shared_store_through_arc() {
        let store = Arc::new(InMemoryCubeStore::new());
        let writer = Arc::clone(&store);

        let handle = tokio::spawn(async move {
            for i in 0..10 {
                writer.save(cube(&format!("c{}", i))).await.unwrap();
            }
        });
        handle.await.unwrap();

        assert_eq!(CubeStore::len(&store).await, 10);
    }
}
