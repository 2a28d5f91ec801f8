use serde::{Deserialize, Serialize};

/// Identity of a store in the repository.
pub type StoreId = i64;

/// An immutable store record.
///
/// Seeded at repository construction and never mutated afterwards.
/// `distance` is a unit-agnostic ranking scalar computed at ingestion time;
/// search never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub address_1: String,
    pub address_2: String,
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_serializes_with_flat_field_names() {
        let store = Store {
            id: 7,
            name: "Shared Store 1".to_string(),
            address_1: "1 Shared Road".to_string(),
            address_2: "Moore, OK 73160".to_string(),
            distance: 2.0,
        };
        let json = serde_json::to_value(&store).expect("serialize Store");
        assert_eq!(json["id"].as_i64(), Some(7));
        assert_eq!(json["address_1"].as_str(), Some("1 Shared Road"));
        assert!((json["distance"].as_f64().unwrap() - 2.0).abs() < f64::EPSILON);
    }
}
