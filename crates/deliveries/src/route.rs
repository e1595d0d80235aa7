//! Ordering delivery stops and measuring the route through them.

use std::cmp::Reverse;

use model::delivery::DeliveryStop;
use utility::geo;

/// Sorts stops by descending number of good children. Stops with the same
/// count keep their relative order.
pub fn rank(mut stops: Vec<DeliveryStop>) -> Vec<DeliveryStop> {
    stops.sort_by_key(|stop| Reverse(stop.good_children));
    stops
}

/// Length in km of the route visiting `stops` in the given order.
pub fn total_distance(stops: &[DeliveryStop]) -> f64 {
    geo::path_length(stops)
}
