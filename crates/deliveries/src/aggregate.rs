//! Counting children per location.

use itertools::Itertools;
use model::{child::Child, delivery::DeliveryStop, location::Location, WithId};
use utility::id::Key;

/// Builds one [`DeliveryStop`] per location, in the order the locations are
/// given, counting the children that reference it. Locations nobody
/// references get a count of zero.
///
/// References are matched on their normalized string form, so ids that
/// differ only in representation still count.
pub fn tally(
    children: &[WithId<Child>],
    locations: Vec<WithId<Location>>,
) -> Vec<DeliveryStop> {
    let counts = children
        .iter()
        .map(|child| child.content.location.string_key())
        .counts();

    locations
        .into_iter()
        .map(|location| {
            let count = counts
                .get(&location.id.string_key())
                .copied()
                .unwrap_or(0);
            DeliveryStop::new(location.content, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{child::Behavior, location::Coordinates};
    use utility::id::Id;

    fn location(id: &str, name: &str) -> WithId<Location> {
        WithId::new(
            Id::new(id.to_owned()),
            Location {
                name: name.to_owned(),
                coordinates: Coordinates::new(0.0, 0.0),
                good_count: 99.0,
            },
        )
    }

    fn child(location: &str) -> WithId<Child> {
        WithId::new(
            Id::new(format!("child-at-{location}")),
            Child {
                name: "x".to_owned(),
                behavior: Behavior::Good,
                location: Id::new(location.to_owned()),
            },
        )
    }

    fn counts(stops: &[DeliveryStop]) -> Vec<(&str, usize)> {
        stops
            .iter()
            .map(|stop| (stop.name.as_str(), stop.good_children))
            .collect()
    }

    #[test]
    fn one_stop_per_location_in_store_order() {
        let locations = vec![location("1", "A"), location("2", "B"), location("3", "C")];
        let children = vec![child("3"), child("1"), child("3")];
        let stops = tally(&children, locations);
        assert_eq!(counts(&stops), vec![("A", 1), ("B", 0), ("C", 2)]);
    }

    #[test]
    fn stored_count_is_ignored() {
        let stops = tally(&[], vec![location("1", "A")]);
        assert_eq!(stops[0].good_children, 0);
    }

    #[test]
    fn references_to_unknown_locations_are_not_counted() {
        let stops = tally(&[child("404")], vec![location("1", "A")]);
        assert_eq!(counts(&stops), vec![("A", 0)]);
    }

    #[test]
    fn references_match_by_normalized_id() {
        let stops = tally(&[child(" 1 ")], vec![location("1", "A")]);
        assert_eq!(counts(&stops), vec![("A", 1)]);
    }

    #[test]
    fn no_locations_no_stops() {
        assert!(tally(&[child("1")], vec![]).is_empty());
    }
}
