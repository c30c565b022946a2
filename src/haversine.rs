//! Great-circle distance between geographic coordinates.
//!
//! Straight-line estimates are adequate at collection-district scale;
//! road-network routing is out of scope for the planner core.

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two (lat, lng) points in meters.
///
/// Symmetric and non-negative for finite inputs; ~0 for identical points.
/// Callers are responsible for supplying finite degrees.
pub fn haversine_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point() {
        let dist = haversine_meters(-1.286389, 36.817223, -1.286389, 36.817223);
        assert!(dist < 0.001, "Same point should have ~0 distance, got {}", dist);
    }

    #[test]
    fn test_known_distance() {
        // Nairobi CBD (-1.286, 36.817) to Mombasa (-4.043, 39.668)
        // Actual great-circle distance ~440 km
        let dist = haversine_meters(-1.286389, 36.817223, -4.043477, 39.668206);
        assert!(
            dist > 420_000.0 && dist < 460_000.0,
            "Nairobi to Mombasa should be ~440km, got {}m",
            dist
        );
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // One degree of latitude is ~111.2 km everywhere on the sphere.
        let dist = haversine_meters(0.0, 36.8, 1.0, 36.8);
        assert!(
            dist > 110_000.0 && dist < 112_500.0,
            "1 degree latitude should be ~111km, got {}m",
            dist
        );
    }

    #[test]
    fn test_symmetric() {
        let forward = haversine_meters(-1.29, 36.82, -1.30, 36.81);
        let backward = haversine_meters(-1.30, 36.81, -1.29, 36.82);
        assert!(
            (forward - backward).abs() < 1e-9,
            "Haversine should be symmetric"
        );
    }

    #[test]
    fn test_non_negative() {
        let dist = haversine_meters(-1.29, 36.82, -1.30, 36.81);
        assert!(dist > 0.0, "Distinct points should have positive distance");
    }
}
