use serde::{Deserialize, Serialize};
use utility::{geo::GeoPoint, id::HasId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "Latitud", alias = "latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitud", alias = "longitude")]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl GeoPoint for Coordinates {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A place where presents are delivered.
///
/// `good_count` is whatever the creator supplied. It is stored as is and
/// never recomputed; live counts are in [`crate::delivery::DeliveryStop`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "coordenadas", alias = "coordinates")]
    pub coordinates: Coordinates,
    #[serde(rename = "NumBuenos", alias = "count")]
    pub good_count: f64,
}

impl HasId for Location {
    type IdType = String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WithId;
    use serde_json::json;
    use utility::id::Id;

    #[test]
    fn serializes_with_wire_names() {
        let location = WithId::new(
            Id::new("l1".to_owned()),
            Location {
                name: "Kiel".to_owned(),
                coordinates: Coordinates::new(54.3, 10.1),
                good_count: 3.5,
            },
        );
        assert_eq!(
            serde_json::to_value(&location).unwrap(),
            json!({
                "id": "l1",
                "nombre": "Kiel",
                "coordenadas": { "Latitud": 54.3, "Longitud": 10.1 },
                "NumBuenos": 3.5,
            })
        );
    }

    #[test]
    fn accepts_english_field_names() {
        let coordinates: Coordinates =
            serde_json::from_value(json!({ "latitude": 1.0, "longitude": 2.0 }))
                .unwrap();
        assert_eq!(coordinates, Coordinates::new(1.0, 2.0));
    }
}
