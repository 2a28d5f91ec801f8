use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use storeloc_core::{Store, StoreId};
use storeloc_locator::SessionKey;

use crate::middleware::{RequestId, SessionId};

use super::{map_locator_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct StoreItem {
    pub id: StoreId,
    pub name: String,
    pub address_1: String,
    pub address_2: String,
    pub distance: f64,
}

impl From<Store> for StoreItem {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            name: store.name,
            address_1: store.address_1,
            address_2: store.address_2,
            distance: store.distance,
        }
    }
}

fn items(stores: Vec<Store>) -> Vec<StoreItem> {
    stores.into_iter().map(StoreItem::from).collect()
}

pub(super) async fn get_current_store(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(session): Extension<SessionId>,
) -> Json<ApiResponse<Option<StoreItem>>> {
    let current = state
        .service
        .current_store(&SessionKey(session.0))
        .await
        .map(StoreItem::from);

    Json(ApiResponse {
        data: current,
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_stores_by_geo(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((lat, long)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<StoreItem>>>, ApiError> {
    let stores = state
        .service
        .search_by_geo(&lat, &long)
        .map_err(|e| map_locator_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: items(stores),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_stores_by_zip_code(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(zipcode): Path<String>,
) -> Result<Json<ApiResponse<Vec<StoreItem>>>, ApiError> {
    let stores = state
        .service
        .search_by_zip(&zipcode)
        .map_err(|e| map_locator_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: items(stores),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_store_by_id(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<StoreId>,
) -> Result<Json<ApiResponse<StoreItem>>, ApiError> {
    let store = state
        .service
        .store_by_id(id)
        .map_err(|e| map_locator_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: store.into(),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn set_current_store(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<StoreId>,
) -> Result<Json<ApiResponse<StoreItem>>, ApiError> {
    let store = state
        .service
        .set_current(&SessionKey(session.0), id)
        .await
        .map_err(|e| map_locator_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: store.into(),
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_item_is_serializable() {
        let item = StoreItem {
            id: 7,
            name: "Shared Store 1".to_string(),
            address_1: "1 Shared Road".to_string(),
            address_2: "Moore, OK 73160".to_string(),
            distance: 2.0,
        };
        let json = serde_json::to_string(&item).expect("serialize StoreItem");
        assert!(json.contains("\"id\":7"), "serialized JSON should contain id");
        assert!(
            json.contains("\"address_1\":\"1 Shared Road\""),
            "serialized JSON should contain address_1"
        );
    }
}
