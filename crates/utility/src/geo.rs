use itertools::Itertools;

/// Mean earth radius.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Anything with a position on the globe, in degrees.
pub trait GeoPoint {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;

    fn is_on_globe(&self) -> bool {
        LATITUDE_RANGE.contains(&self.latitude())
            && LONGITUDE_RANGE.contains(&self.longitude())
    }
}

impl GeoPoint for (f64, f64) {
    fn latitude(&self) -> f64 {
        self.0
    }

    fn longitude(&self) -> f64 {
        self.1
    }
}

impl<P: GeoPoint> GeoPoint for &P {
    fn latitude(&self) -> f64 {
        P::latitude(*self)
    }

    fn longitude(&self) -> f64 {
        P::longitude(*self)
    }
}

/// Great-circle distance in km between two points on a spherical earth.
pub fn haversine_distance<A: GeoPoint, B: GeoPoint>(from: &A, to: &B) -> f64 {
    let lat1_rad = from.latitude().to_radians();
    let lat2_rad = to.latitude().to_radians();

    let dlat = (to.latitude() - from.latitude()).to_radians();
    let dlon = (to.longitude() - from.longitude()).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total length in km of the path visiting `stops` in order.
/// Paths with fewer than two stops have length zero.
pub fn path_length<I>(stops: I) -> f64
where
    I: IntoIterator,
    I::Item: GeoPoint + Clone,
{
    stops
        .into_iter()
        .tuple_windows()
        .fold(0.0, |total, (from, to)| total + haversine_distance(&from, &to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_itself_is_zero() {
        let kiel = (54.3233, 10.1228);
        assert_eq!(haversine_distance(&kiel, &kiel), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let kiel = (54.3233, 10.1228);
        let madrid = (40.4168, -3.7038);
        assert_eq!(
            haversine_distance(&kiel, &madrid),
            haversine_distance(&madrid, &kiel)
        );
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let distance = haversine_distance(&(0.0, 0.0), &(0.0, 1.0));
        assert!((distance - 111.19).abs() < 0.01, "got {distance}");
    }

    #[test]
    fn pole_to_pole_is_half_circumference() {
        let distance = haversine_distance(&(90.0, 0.0), &(-90.0, 0.0));
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance - expected).abs() < 1e-6);
    }

    #[test]
    fn short_paths_have_no_length() {
        assert_eq!(path_length(Vec::<(f64, f64)>::new()), 0.0);
        assert_eq!(path_length(vec![(10.0, 20.0)]), 0.0);
    }

    #[test]
    fn two_stop_path_is_single_leg() {
        let a = (0.0, 0.0);
        let b = (0.0, 1.0);
        assert_eq!(path_length(vec![a, b]), haversine_distance(&a, &b));
    }

    #[test]
    fn path_sums_consecutive_legs() {
        let stops = vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        let expected = haversine_distance(&stops[0], &stops[1])
            + haversine_distance(&stops[1], &stops[2]);
        assert_eq!(path_length(stops.iter()), expected);
    }

    #[test]
    fn globe_bounds_are_inclusive() {
        assert!((90.0, 180.0).is_on_globe());
        assert!((-90.0, -180.0).is_on_globe());
        assert!(!(91.0, 0.0).is_on_globe());
        assert!(!(0.0, -180.5).is_on_globe());
        assert!(!(f64::NAN, 0.0).is_on_globe());
    }
}
