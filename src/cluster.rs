//! Spatial clustering of waste reports into service clusters.
//!
//! Clustering is single-pass and seed-relative: each unclaimed report opens
//! a cluster and absorbs every later unclaimed report within a fixed degree
//! radius of that seed. Absorption is not transitive, so the partition
//! depends on input order. That run-order sensitivity is intentional policy,
//! kept for output parity with the dispatch platform.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::report::Report;

/// Seed-relative absorption radius in raw degrees (~100 m at the equator).
pub const DEFAULT_ABSORB_THRESHOLD_DEG: f64 = 0.001;

/// Centroids within this many degrees of the batch mean coordinate on both
/// axes take the "Central" fallback name.
const CENTRAL_BAND_DEG: f64 = 0.002;

/// Urgency tier derived from cluster size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

// Unknown wire values rank lowest rather than failing the whole selection.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tier = String::deserialize(deserializer)?;
        Ok(match tier.as_str() {
            "critical" => Priority::Critical,
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::Low,
        })
    }
}

impl Priority {
    /// Priority is a pure function of cluster size.
    pub fn from_report_count(count: usize) -> Self {
        match count {
            c if c >= 5 => Priority::Critical,
            c if c >= 3 => Priority::High,
            2 => Priority::Medium,
            _ => Priority::Low,
        }
    }

    /// Ranking weight used when ordering clusters into routes.
    pub fn weight(self) -> u8 {
        match self {
            Priority::Critical => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Tunables for the cluster builder.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Seed-relative absorption radius in raw degrees.
    pub absorb_threshold_deg: f64,
    /// Region text for directional fallback names ("North {region_name}").
    pub region_name: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            absorb_threshold_deg: DEFAULT_ABSORB_THRESHOLD_DEG,
            region_name: "Service Area".to_string(),
        }
    }
}

/// A spatial grouping of reports, built fresh on every call.
///
/// Ids are 1-based and stable only within one invocation. Member order is
/// discovery order (seed first).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: usize,
    pub name: String,
    /// Mean (lat, lng) of all members.
    pub center: (f64, f64),
    #[serde(skip)]
    pub members: Vec<Report>,
    pub report_count: usize,
    pub priority: Priority,
}

/// Groups located reports into service clusters.
///
/// Reports without a usable coordinate pair are silently excluded; every
/// located report lands in exactly one cluster. Output order is the order
/// in which clusters were opened.
pub fn build_clusters(reports: &[Report], config: &ClusterConfig) -> Vec<Cluster> {
    let located: Vec<(&Report, (f64, f64))> = reports
        .iter()
        .filter_map(|report| report.coordinates().map(|at| (report, at)))
        .collect();

    let region_mean = mean_coordinate(&located);

    let mut claimed = vec![false; located.len()];
    let mut clusters: Vec<Cluster> = Vec::new();

    for seed_idx in 0..located.len() {
        if claimed[seed_idx] {
            continue;
        }
        claimed[seed_idx] = true;

        let (seed, seed_at) = located[seed_idx];
        let mut members = vec![seed.clone()];
        let mut lat_sum = seed_at.0;
        let mut lng_sum = seed_at.1;

        // Absorption is measured against the seed, not the latest member:
        // a report near an absorbed member but outside the seed radius
        // stays out.
        for other_idx in seed_idx + 1..located.len() {
            if claimed[other_idx] {
                continue;
            }
            let (other, other_at) = located[other_idx];
            if degree_distance(seed_at, other_at) <= config.absorb_threshold_deg {
                claimed[other_idx] = true;
                lat_sum += other_at.0;
                lng_sum += other_at.1;
                members.push(other.clone());
            }
        }

        let count = members.len();
        let center = (lat_sum / count as f64, lng_sum / count as f64);
        clusters.push(Cluster {
            id: clusters.len() + 1,
            name: cluster_name(&members[0], center, region_mean, &config.region_name),
            center,
            members,
            report_count: count,
            priority: Priority::from_report_count(count),
        });
    }

    debug!(
        reports = reports.len(),
        located = located.len(),
        clusters = clusters.len(),
        "clustered reports"
    );

    clusters
}

/// Planar distance in raw degrees.
///
/// A cheap proxy for real distance, adequate at the sub-kilometer scale the
/// absorption threshold operates on. Haversine is reserved for route metrics.
fn degree_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn mean_coordinate(located: &[(&Report, (f64, f64))]) -> (f64, f64) {
    let n = located.len().max(1) as f64;
    let lat_sum: f64 = located.iter().map(|(_, at)| at.0).sum();
    let lng_sum: f64 = located.iter().map(|(_, at)| at.1).sum();
    (lat_sum / n, lng_sum / n)
}

/// Seed address up to the first comma, else a directional fallback relative
/// to the mean coordinate of the batch.
fn cluster_name(
    seed: &Report,
    center: (f64, f64),
    region_mean: (f64, f64),
    region_name: &str,
) -> String {
    if let Some(address) = seed.street_address() {
        let head = address.split(',').next().unwrap_or(address).trim();
        if !head.is_empty() {
            return head.to_string();
        }
    }

    let direction = if center.0 - region_mean.0 > CENTRAL_BAND_DEG {
        "North"
    } else if region_mean.0 - center.0 > CENTRAL_BAND_DEG {
        "South"
    } else if center.1 - region_mean.1 > CENTRAL_BAND_DEG {
        "East"
    } else if region_mean.1 - center.1 > CENTRAL_BAND_DEG {
        "West"
    } else {
        "Central"
    };

    format!("{} {}", direction, region_name)
}
