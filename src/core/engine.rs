use crate::core::collision::CollisionTest;
use crate::core::{ConfigProvider, CubeStore};
use crate::domain::model::{Collision, Cuboid, Intersection, Point3};
use crate::utils::error::{CubeError, Result};

/// Runs collision and intersection queries against a [`CubeStore`].
///
/// The engine keeps no state of its own beyond its settings: every query reads
/// the store, runs the geometry and returns fresh result records.
pub struct CubeEngine<S: CubeStore, C: ConfigProvider> {
    store: S,
    config: C,
    test: CollisionTest,
}

impl<S: CubeStore, C: ConfigProvider> CubeEngine<S, C> {
    pub fn new(store: S, config: C) -> Self {
        let test = CollisionTest::new(config.overlap_rule());
        Self {
            store,
            config,
            test,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        id: &str,
        length: f64,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
        z: f64,
    ) -> Result<Cuboid> {
        let cube = Cuboid::new(id, length, width, height, Point3::new(x, y, z))?;
        self.insert_cuboid(cube).await
    }

    pub async fn insert_cuboid(&self, cube: Cuboid) -> Result<Cuboid> {
        self.store.save(cube.clone()).await?;
        tracing::info!("Inserted cube {}", cube.id());
        Ok(cube)
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.store.remove(id).await?;
        tracing::info!("Removed cube {}", id);
        Ok(())
    }

    pub async fn remove_all(&self) {
        self.store.clear().await;
        tracing::info!("Removed all cubes");
    }

    pub async fn get(&self, id: &str) -> Option<Cuboid> {
        self.store.get(id).await
    }

    pub async fn get_all(&self) -> Vec<Cuboid> {
        self.store.get_all().await
    }

    /// Candidates colliding with `id`. `id` itself is not excluded from
    /// `candidate_ids`, and unknown candidates are skipped.
    pub async fn collisions_of(&self, id: &str, candidate_ids: &[String]) -> Result<Vec<Cuboid>> {
        let cube = self.resolve(id).await?;
        let candidates = self.candidates(candidate_ids).await;
        let hits = self.colliding(&cube, candidates.iter());
        tracing::debug!(
            "Cube {} collides with {} of {} candidates",
            id,
            hits.len(),
            candidates.len()
        );
        Ok(hits)
    }

    pub async fn collisions_of_against_all(&self, id: &str) -> Result<Vec<Cuboid>> {
        let cube = self.resolve(id).await?;
        let others = self.others(id).await;
        let hits = self.colliding(&cube, others.iter());
        tracing::debug!("Cube {} collides with {} other cubes", id, hits.len());
        Ok(hits)
    }

    /// Every colliding ordered pair in the store. A collision between `a` and
    /// `b` is reported twice, as `(a, b)` and as `(b, a)`.
    pub async fn all_collisions(&self) -> Result<Vec<Collision>> {
        let snapshot = self.store.get_all().await;
        let collisions = self.scan(&snapshot, |cube, snapshot| {
            others_in(snapshot, cube)
                .filter(|other| self.test.collides(cube, other))
                .map(|other| Collision {
                    cube_id: cube.id().to_string(),
                    other_cube_id: other.id().to_string(),
                })
                .collect()
        })?;
        tracing::debug!(
            "Found {} collision entries among {} cubes",
            collisions.len(),
            snapshot.len()
        );
        Ok(collisions)
    }

    /// Candidates sharing a strictly positive volume with `id`.
    pub async fn intersections_of(
        &self,
        id: &str,
        candidate_ids: &[String],
    ) -> Result<Vec<Intersection>> {
        let cube = self.resolve(id).await?;
        let candidates = self.candidates(candidate_ids).await;
        let hits = self.intersecting(&cube, candidates.iter());
        tracing::debug!(
            "Cube {} intersects {} of {} candidates",
            id,
            hits.len(),
            candidates.len()
        );
        Ok(hits)
    }

    pub async fn intersections_of_against_all(&self, id: &str) -> Result<Vec<Intersection>> {
        let cube = self.resolve(id).await?;
        let others = self.others(id).await;
        let hits = self.intersecting(&cube, others.iter());
        tracing::debug!("Cube {} intersects {} other cubes", id, hits.len());
        Ok(hits)
    }

    /// Same double counting as [`Self::all_collisions`].
    pub async fn all_intersections(&self) -> Result<Vec<Intersection>> {
        let snapshot = self.store.get_all().await;
        let intersections = self.scan(&snapshot, |cube, snapshot| {
            self.intersecting(cube, others_in(snapshot, cube))
        })?;
        tracing::debug!(
            "Found {} intersection entries among {} cubes",
            intersections.len(),
            snapshot.len()
        );
        Ok(intersections)
    }

    async fn resolve(&self, id: &str) -> Result<Cuboid> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| CubeError::NotFoundError { id: id.to_string() })
    }

    async fn candidates(&self, ids: &[String]) -> Vec<Cuboid> {
        let found = self.store.get_by_ids(ids).await;
        if found.len() < ids.len() {
            tracing::warn!(
                "Skipped {} candidate ids that are not in the store",
                ids.len() - found.len()
            );
        }
        found
    }

    async fn others(&self, id: &str) -> Vec<Cuboid> {
        let mut all = self.store.get_all().await;
        all.retain(|c| c.id() != id);
        all
    }

    fn colliding<'a>(
        &self,
        cube: &Cuboid,
        candidates: impl Iterator<Item = &'a Cuboid>,
    ) -> Vec<Cuboid> {
        candidates
            .filter(|other| self.test.collides(cube, other))
            .cloned()
            .collect()
    }

    fn intersecting<'a>(
        &self,
        cube: &Cuboid,
        candidates: impl Iterator<Item = &'a Cuboid>,
    ) -> Vec<Intersection> {
        candidates
            .filter_map(|other| {
                let volume = self.test.intersection_volume(cube, other);
                (volume > 0.0).then(|| Intersection {
                    cube_id: cube.id().to_string(),
                    other_cube_id: other.id().to_string(),
                    volume,
                })
            })
            .collect()
    }

    /// Applies `per_cube(cube, snapshot)` to every cube of `snapshot`,
    /// concatenating results in snapshot order. `per_cube` only borrows the
    /// snapshot; use [`others_in`] to skip the cube itself.
    ///
    /// With more than one worker the outer cubes are split into contiguous
    /// chunks, each handled on a scoped thread that only reads the snapshot.
    fn scan<T, F>(&self, snapshot: &[Cuboid], per_cube: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&Cuboid, &[Cuboid]) -> Vec<T> + Sync,
    {
        let run_chunk = |chunk: &[Cuboid]| -> Vec<T> {
            let mut out = Vec::new();
            for cube in chunk {
                out.extend(per_cube(cube, snapshot));
            }
            out
        };

        let workers = self.config.workers().max(1).min(snapshot.len().max(1));
        if workers == 1 {
            return Ok(run_chunk(snapshot));
        }

        let chunk_size = snapshot.len().div_ceil(workers);
        tracing::debug!(
            "Scanning {} cubes on {} workers ({} per chunk)",
            snapshot.len(),
            workers,
            chunk_size
        );

        std::thread::scope(|s| {
            let handles: Vec<_> = snapshot
                .chunks(chunk_size)
                .map(|chunk| {
                    let run_chunk = &run_chunk;
                    s.spawn(move || run_chunk(chunk))
                })
                .collect();

            // join every worker before reporting, so no panic escapes the scope
            let parts: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
            let failed = parts.iter().filter(|p| p.is_err()).count();
            if failed > 0 {
                return Err(CubeError::ProcessingError {
                    message: format!("{} query worker(s) panicked", failed),
                });
            }
            Ok(parts.into_iter().flatten().flatten().collect())
        })
    }
}

fn others_in<'a>(snapshot: &'a [Cuboid], cube: &'a Cuboid) -> impl Iterator<Item = &'a Cuboid> {
    snapshot.iter().filter(move |other| other.id() != cube.id())
}
