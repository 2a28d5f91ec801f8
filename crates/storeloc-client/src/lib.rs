//! Client side of the store locator: the HTTP API client and the
//! fixed-page-size pagination state machine the UI drives.

mod client;
mod pager;

pub use client::{ClientError, EffectiveSelection, StoreApiClient};
pub use pager::{PageEntry, PageView, Pager, PAGE_SIZE};
