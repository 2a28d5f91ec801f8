//! Store locator core: repository pools, ranked search, and per-session
//! current-store selection behind the [`LocatorService`] facade.

mod repository;
mod search;
mod selection;
mod service;

pub use repository::{PoolKind, SeedRepository, StoreRepository};
pub use search::SearchEngine;
pub use selection::{SelectionStore, SessionKey, DEFAULT_RETENTION};
pub use service::{LocatorError, LocatorService};
