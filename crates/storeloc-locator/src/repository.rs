//! Store repository: three fixed pools plus identity lookup.

use storeloc_core::{Store, StoreId};

/// Partition of the repository reachable via a specific query type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// Reachable only through geo searches.
    Geo,
    /// Reachable only through zipcode searches.
    Zip,
    /// Reachable through both.
    Shared,
}

/// Read-only source of store records.
///
/// Deployments back this with real geolocation/inventory data; the shipped
/// [`SeedRepository`] is the fixed-dataset variant. Consumers never see
/// mutation operations; the dataset is whatever the implementation was
/// constructed with.
pub trait StoreRepository: Send + Sync {
    /// Look up a single store by id across every pool.
    fn get_by_id(&self, id: StoreId) -> Option<Store>;

    /// All stores in a pool, in seed order.
    fn pool(&self, kind: PoolKind) -> &[Store];
}

/// Fixed seed dataset, initialized once at startup.
pub struct SeedRepository {
    geo: Vec<Store>,
    zip: Vec<Store>,
    shared: Vec<Store>,
}

fn store(id: StoreId, name: &str, address_1: &str, address_2: &str, distance: f64) -> Store {
    Store {
        id,
        name: name.to_string(),
        address_1: address_1.to_string(),
        address_2: address_2.to_string(),
        distance,
    }
}

impl SeedRepository {
    /// Builds the repository from explicit pools.
    #[must_use]
    pub fn new(geo: Vec<Store>, zip: Vec<Store>, shared: Vec<Store>) -> Self {
        Self { geo, zip, shared }
    }

    /// The stock nine-store dataset: ids 1-3 geo-only, 4-6 zip-only,
    /// 7-9 shared, distances 2/3/4 within each pool.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            vec![
                store(1, "Geo Store 1", "1 Geo Road", "Geo, FL 73160", 2.0),
                store(2, "Geo Store 2", "2 Geo Road", "Geo, FL 73160", 3.0),
                store(3, "Geo Store 3", "3 Geo Road", "Geo, FL 73160", 4.0),
            ],
            vec![
                store(4, "Zip Code Store 1", "1 Zip Code Road", "Zip Code, FL 73160", 2.0),
                store(5, "Zip Code Store 2", "2 Zip Code Road", "Zip Code, FL 73160", 3.0),
                store(6, "Zip Code Store 3", "3 Zip Code Road", "Zip Code, FL 73160", 4.0),
            ],
            vec![
                store(7, "Shared Store 1", "1 Shared Road", "Moore, OK 73160", 2.0),
                store(8, "Shared Store 2", "2 Shared Road", "Springfield, MO 65810", 3.0),
                store(9, "Shared Store 3", "3 Shared Road", "Shared, FL 73160", 4.0),
            ],
        )
    }

    /// Total number of stores across all pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.geo.len() + self.zip.len() + self.shared.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StoreRepository for SeedRepository {
    fn get_by_id(&self, id: StoreId) -> Option<Store> {
        self.shared
            .iter()
            .chain(&self.geo)
            .chain(&self.zip)
            .find(|s| s.id == id)
            .cloned()
    }

    fn pool(&self, kind: PoolKind) -> &[Store] {
        match kind {
            PoolKind::Geo => &self.geo,
            PoolKind::Zip => &self.zip,
            PoolKind::Shared => &self.shared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_pools_are_disjoint_and_complete() {
        let repo = SeedRepository::seeded();
        assert_eq!(repo.pool(PoolKind::Geo).len(), 3);
        assert_eq!(repo.pool(PoolKind::Zip).len(), 3);
        assert_eq!(repo.pool(PoolKind::Shared).len(), 3);
        assert_eq!(repo.len(), 9);

        let mut ids: Vec<i64> = [PoolKind::Geo, PoolKind::Zip, PoolKind::Shared]
            .iter()
            .flat_map(|k| repo.pool(*k).iter().map(|s| s.id))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn get_by_id_finds_stores_in_every_pool() {
        let repo = SeedRepository::seeded();
        assert_eq!(repo.get_by_id(1).map(|s| s.name).as_deref(), Some("Geo Store 1"));
        assert_eq!(repo.get_by_id(5).map(|s| s.name).as_deref(), Some("Zip Code Store 2"));
        assert_eq!(repo.get_by_id(9).map(|s| s.name).as_deref(), Some("Shared Store 3"));
    }

    #[test]
    fn get_by_id_returns_none_for_unknown_id() {
        let repo = SeedRepository::seeded();
        assert!(repo.get_by_id(42).is_none());
    }
}
