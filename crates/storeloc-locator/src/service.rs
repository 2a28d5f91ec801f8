//! Uniform request surface composing search and selection.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use thiserror::Error;

use storeloc_core::{Store, StoreId};

use crate::repository::StoreRepository;
use crate::search::SearchEngine;
use crate::selection::{SelectionStore, SessionKey};

/// Errors surfaced by the locator facade.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// Malformed caller input; never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced store does not exist in the repository.
    #[error("store {0} not found")]
    NotFound(StoreId),
}

fn zip_regex() -> &'static Regex {
    static ZIP: OnceLock<Regex> = OnceLock::new();
    ZIP.get_or_init(|| Regex::new(r"^\d{5}$").expect("valid zipcode regex"))
}

/// Facade over the repository, search engine, and selection store.
///
/// Collaborators are injected at construction; all operations are
/// side-effect-free except [`LocatorService::set_current`], whose only side
/// effect is persisting the selection.
#[derive(Clone)]
pub struct LocatorService {
    repo: Arc<dyn StoreRepository>,
    search: SearchEngine,
    selections: SelectionStore,
}

impl LocatorService {
    #[must_use]
    pub fn new(repo: Arc<dyn StoreRepository>, selections: SelectionStore) -> Self {
        let search = SearchEngine::new(Arc::clone(&repo));
        Self {
            repo,
            search,
            selections,
        }
    }

    /// Ranked stores for a geo query.
    ///
    /// Coordinates arrive as raw path text; both must parse to finite floats.
    /// An empty result is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// [`LocatorError::InvalidInput`] when either coordinate is non-numeric.
    pub fn search_by_geo(&self, latitude: &str, longitude: &str) -> Result<Vec<Store>, LocatorError> {
        let lat = parse_coordinate("latitude", latitude)?;
        let long = parse_coordinate("longitude", longitude)?;
        Ok(self.search.by_geo(lat, long))
    }

    /// Ranked stores for a zipcode query.
    ///
    /// # Errors
    ///
    /// [`LocatorError::InvalidInput`] unless `zipcode` is exactly five digits.
    pub fn search_by_zip(&self, zipcode: &str) -> Result<Vec<Store>, LocatorError> {
        if !zip_regex().is_match(zipcode) {
            return Err(LocatorError::InvalidInput(format!(
                "zipcode must be exactly 5 digits, got {zipcode:?}"
            )));
        }
        Ok(self.search.by_zip(zipcode))
    }

    /// Pure repository lookup.
    ///
    /// # Errors
    ///
    /// [`LocatorError::NotFound`] when no store has `id`.
    pub fn store_by_id(&self, id: StoreId) -> Result<Store, LocatorError> {
        self.repo.get_by_id(id).ok_or(LocatorError::NotFound(id))
    }

    /// The caller's current store, or `None` when nothing is selected or the
    /// selected id no longer resolves. Both are empty outcomes, not errors.
    pub async fn current_store(&self, session: &SessionKey) -> Option<Store> {
        let id = self.selections.get(session).await?;
        self.repo.get_by_id(id)
    }

    /// Persist `id` as the caller's current store.
    ///
    /// # Errors
    ///
    /// [`LocatorError::NotFound`] when `id` does not resolve; nothing is
    /// persisted in that case.
    pub async fn set_current(&self, session: &SessionKey, id: StoreId) -> Result<Store, LocatorError> {
        let store = self.store_by_id(id)?;
        self.selections.set(session, id).await;
        tracing::debug!(session = %session.0, store_id = id, "current store updated");
        Ok(store)
    }
}

fn parse_coordinate(name: &str, raw: &str) -> Result<f64, LocatorError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LocatorError::InvalidInput(format!("{name} must be numeric, got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SeedRepository;

    fn service() -> LocatorService {
        LocatorService::new(Arc::new(SeedRepository::seeded()), SelectionStore::new())
    }

    fn session(name: &str) -> SessionKey {
        SessionKey(name.to_string())
    }

    #[test]
    fn search_by_geo_accepts_signed_decimal_coordinates() {
        let results = service().search_by_geo("35.3395", "-97.4867").expect("valid coords");
        assert_eq!(results.len(), 6);
    }

    #[test]
    fn search_by_geo_rejects_non_numeric_coordinates() {
        let err = service().search_by_geo("north", "-97.4867").unwrap_err();
        assert!(matches!(err, LocatorError::InvalidInput(_)));
    }

    #[test]
    fn search_by_geo_rejects_non_finite_coordinates() {
        let err = service().search_by_geo("inf", "0").unwrap_err();
        assert!(matches!(err, LocatorError::InvalidInput(_)));
    }

    #[test]
    fn search_by_zip_accepts_five_digits() {
        let results = service().search_by_zip("73160").expect("valid zip");
        assert_eq!(results.len(), 6);
    }

    #[test]
    fn search_by_zip_rejects_short_zip() {
        let err = service().search_by_zip("1234").unwrap_err();
        assert!(matches!(err, LocatorError::InvalidInput(_)));
    }

    #[test]
    fn search_by_zip_rejects_overlong_and_mixed_input() {
        assert!(service().search_by_zip("731600").is_err());
        assert!(service().search_by_zip("7316a").is_err());
        assert!(service().search_by_zip("").is_err());
    }

    #[test]
    fn store_by_id_resolves_and_rejects() {
        let svc = service();
        assert_eq!(svc.store_by_id(7).expect("known id").name, "Shared Store 1");
        assert!(matches!(svc.store_by_id(99), Err(LocatorError::NotFound(99))));
    }

    #[tokio::test]
    async fn set_current_then_current_store_round_trips() {
        let svc = service();
        let sess = session("a");
        svc.set_current(&sess, 4).await.expect("id 4 exists");
        let current = svc.current_store(&sess).await.expect("selection set");
        assert_eq!(current.id, 4);
    }

    #[tokio::test]
    async fn set_current_rejects_unknown_id_without_persisting() {
        let svc = service();
        let sess = session("a");
        let err = svc.set_current(&sess, 99).await.unwrap_err();
        assert!(matches!(err, LocatorError::NotFound(99)));
        assert!(svc.current_store(&sess).await.is_none());
    }

    #[tokio::test]
    async fn current_store_is_empty_without_selection() {
        assert!(service().current_store(&session("nobody")).await.is_none());
    }

    #[tokio::test]
    async fn current_store_is_empty_when_selected_id_no_longer_resolves() {
        // A repository variant can change between deploys; a stale selection
        // must read as empty rather than erroring.
        let repo = Arc::new(SeedRepository::seeded());
        let selections = SelectionStore::new();
        let sess = session("a");
        selections.set(&sess, 1234).await;
        let svc = LocatorService::new(repo, selections);
        assert!(svc.current_store(&sess).await.is_none());
    }
}
