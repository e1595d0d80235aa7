use serde::Serialize;
use utility::geo::GeoPoint;

use crate::location::{Coordinates, Location};

/// A location with the number of good children living there, counted at
/// request time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryStop {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "coordenadas")]
    pub coordinates: Coordinates,
    #[serde(rename = "NumBuenos")]
    pub good_children: usize,
}

impl DeliveryStop {
    pub fn new(location: Location, good_children: usize) -> Self {
        Self {
            name: location.name,
            coordinates: location.coordinates,
            good_children,
        }
    }
}

impl GeoPoint for DeliveryStop {
    fn latitude(&self) -> f64 {
        self.coordinates.latitude
    }

    fn longitude(&self) -> f64 {
        self.coordinates.longitude
    }
}
