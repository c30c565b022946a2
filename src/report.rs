//! Citizen waste report records.
//!
//! The reporting subsystem has historically produced two coordinate shapes:
//! a top-level latitude/longitude pair, and a nested `location` object.
//! Both are accepted here and normalized behind [`Report::coordinates`] so
//! the clustering and routing code only ever sees one canonical accessor.

use serde::Deserialize;

/// Address text treated as "no address" when deriving cluster names.
const PLACEHOLDER_ADDRESS: &str = "unknown";

/// A single citizen waste report.
///
/// Reports are produced by the external reporting subsystem; the planner
/// only reads them. A report without a usable coordinate pair in either
/// shape is unlocatable and silently excluded from clustering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Report {
    pub id: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location: Option<ReportLocation>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Nested coordinate shape some report producers emit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub address: Option<String>,
}

impl Report {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            location: None,
            address: None,
            description: String::new(),
        }
    }

    /// A report with no coordinates in either shape.
    pub fn unlocated(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            latitude: None,
            longitude: None,
            location: None,
            address: None,
            description: String::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The usable coordinate pair, if any.
    ///
    /// Prefers the top-level pair, falls back to the nested `location` pair.
    /// A pair is usable only when both components are finite and within
    /// lat −90..90 / lng −180..180.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        if let (Some(lat), Some(lng)) = (self.latitude, self.longitude) {
            if usable_pair(lat, lng) {
                return Some((lat, lng));
            }
        }
        if let Some(location) = &self.location {
            if usable_pair(location.latitude, location.longitude) {
                return Some((location.latitude, location.longitude));
            }
        }
        None
    }

    /// The first non-placeholder address attached to this report.
    pub fn street_address(&self) -> Option<&str> {
        [
            self.address.as_deref(),
            self.location.as_ref().and_then(|l| l.address.as_deref()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|a| !a.is_empty() && !a.eq_ignore_ascii_case(PLACEHOLDER_ADDRESS))
    }
}

fn usable_pair(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}
