//! Ranked store search over the repository pools.

use std::sync::Arc;

use storeloc_core::Store;

use crate::repository::{PoolKind, StoreRepository};

/// Merges the relevant pools for a query and ranks by distance.
///
/// Ranking uses the stores' precomputed `distance` field; coordinates and
/// zipcodes are opaque here. An implementation backed by real geolocation
/// computes distance at ingestion time, not in search.
#[derive(Clone)]
pub struct SearchEngine {
    repo: Arc<dyn StoreRepository>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self {
        Self { repo }
    }

    /// Stores reachable by a geo search: shared pool then geo pool,
    /// sorted ascending by distance.
    ///
    /// The merge is shared-first, so on equal distances shared stores rank
    /// ahead of geo stores (the sort is stable).
    #[must_use]
    pub fn by_geo(&self, _latitude: f64, _longitude: f64) -> Vec<Store> {
        self.merged(PoolKind::Geo)
    }

    /// Stores reachable by a zipcode search: shared pool then zip pool,
    /// sorted ascending by distance. Same tie rule as [`Self::by_geo`].
    #[must_use]
    pub fn by_zip(&self, _zipcode: &str) -> Vec<Store> {
        self.merged(PoolKind::Zip)
    }

    fn merged(&self, kind: PoolKind) -> Vec<Store> {
        let mut stores: Vec<Store> = self
            .repo
            .pool(PoolKind::Shared)
            .iter()
            .chain(self.repo.pool(kind))
            .cloned()
            .collect();
        stores.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        stores
    }
}
