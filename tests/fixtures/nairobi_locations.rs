//! Real Nairobi locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. The depot is Nairobi City Hall;
//! report sites are spread across the CBD and surrounding estates.

use collection_planner::Report;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Depot used by the dispatch scenarios (Nairobi City Hall).
pub const DEPOT: (f64, f64) = (-1.286389, 36.817223);

// ============================================================================
// CBD sites (dense, within a few hundred meters of each other)
// ============================================================================

pub const CBD_SITES: &[Location] = &[
    Location::new("Kencom Stage", -1.2849, 36.8233),
    Location::new("Moi Avenue Market", -1.2843, 36.8254),
    Location::new("Tom Mboya Street", -1.2830, 36.8262),
    Location::new("River Road", -1.2814, 36.8281),
    Location::new("Jeevanjee Gardens", -1.2796, 36.8190),
    Location::new("City Market", -1.2829, 36.8179),
];

// ============================================================================
// Eastlands sites (several kilometers east of the CBD)
// ============================================================================

pub const EASTLANDS_SITES: &[Location] = &[
    Location::new("Gikomba Market", -1.2846, 36.8410),
    Location::new("Burma Market", -1.2886, 36.8476),
    Location::new("Jogoo Road Footbridge", -1.2922, 36.8587),
    Location::new("Makadara Estate", -1.2975, 36.8684),
];

// ============================================================================
// Westlands / Upper Hill sites
// ============================================================================

pub const WESTLANDS_SITES: &[Location] = &[
    Location::new("Westlands Roundabout", -1.2649, 36.8028),
    Location::new("Sarit Centre", -1.2610, 36.8020),
    Location::new("Upper Hill", -1.2987, 36.8126),
];

/// Returns all locations as a single vector.
pub fn all_locations() -> Vec<Location> {
    let mut all = Vec::with_capacity(16);
    all.extend_from_slice(CBD_SITES);
    all.extend_from_slice(EASTLANDS_SITES);
    all.extend_from_slice(WESTLANDS_SITES);
    all
}

// ============================================================================
// Report builders
// ============================================================================

/// A located report with the flat coordinate shape.
pub fn report_at(id: &str, lat: f64, lng: f64) -> Report {
    Report::new(id, lat, lng)
}

/// A located report at a named fixture location, address attached.
pub fn report_from(id: &str, location: &Location) -> Report {
    Report::new(id, location.lat, location.lng)
        .with_address(format!("{}, Nairobi", location.name))
        .with_description("overflowing collection point")
}

/// One report at each of the given fixture locations.
pub fn reports_from(locations: &[Location]) -> Vec<Report> {
    locations
        .iter()
        .enumerate()
        .map(|(i, location)| report_from(&format!("r{}", i + 1), location))
        .collect()
}
