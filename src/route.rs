//! Vehicle route construction over selected clusters.
//!
//! Clusters are ranked by priority, split into bounded chunks, and each
//! chunk is sequenced depot-to-depot with a greedy nearest-neighbor pass.
//! The heuristic is intentionally greedy, not optimal; its cost constants
//! are fixed so downstream consumers can rely on exact output values.

use rayon::prelude::*;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::cluster::{Cluster, Priority};
use crate::error::{PlanError, PlanResult};
use crate::haversine::haversine_meters;

/// Default number of cluster stops per vehicle route.
pub const DEFAULT_MAX_STOPS_PER_ROUTE: usize = 3;

/// Service time budgeted at each stop, in minutes.
pub const DEFAULT_SERVICE_MINUTES_PER_STOP: f64 = 25.0;

/// Travel-time factor per kilometer of path, in minutes.
pub const DEFAULT_TRAVEL_MINUTES_PER_KM: f64 = 20.0;

/// Assumed round-trip distance per cluster when each is serviced by its own
/// uncoordinated trip. Baseline for the efficiency comparison.
const SOLO_TRIP_METERS: f64 = 2_000.0;

/// Minutes of driving saved per kilometer not driven.
const SAVED_MINUTES_PER_KM: f64 = 3.0;

/// Tunables for the route sequencer.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Upper bound on cluster stops per route. Clamped to at least 1.
    pub max_stops_per_route: usize,
    pub service_minutes_per_stop: f64,
    pub travel_minutes_per_km: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            max_stops_per_route: DEFAULT_MAX_STOPS_PER_ROUTE,
            service_minutes_per_stop: DEFAULT_SERVICE_MINUTES_PER_STOP,
            travel_minutes_per_km: DEFAULT_TRAVEL_MINUTES_PER_KM,
        }
    }
}

/// One cluster visit on a route, in service order.
#[derive(Debug, Clone)]
pub struct RouteStop {
    pub cluster_id: usize,
    pub name: String,
    pub center: (f64, f64),
    pub priority: Priority,
}

// The wire shape carries only the centroid for each stop.
impl Serialize for RouteStop {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.center.serialize(serializer)
    }
}

/// An ordered collection route between two depot visits.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: usize,
    pub name: String,
    /// Stops in service order, depot excluded.
    #[serde(rename = "clusters")]
    pub stops: Vec<RouteStop>,
    /// Full path: depot, each stop centroid, depot.
    pub path: Vec<(f64, f64)>,
    pub total_stops: usize,
    #[serde(rename = "distance")]
    pub distance_km: f64,
    #[serde(rename = "estimatedTime")]
    pub estimated_time_minutes: i64,
    /// Priority of the highest-ranked stop; display hint only.
    pub priority: Priority,
}

/// Partitions the caller's cluster selection into bounded routes and
/// sequences each one from the depot.
///
/// Clusters are stably sorted by descending priority weight, so equal
/// priorities keep the caller's relative order. An empty selection yields
/// an empty plan, not an error.
pub fn build_routes(
    clusters: &[Cluster],
    depot: (f64, f64),
    config: &RouteConfig,
) -> PlanResult<Vec<Route>> {
    if clusters.is_empty() {
        return Ok(Vec::new());
    }

    validate_depot(depot)?;
    for cluster in clusters {
        validate_finite(cluster.center)?;
    }

    let mut ranked: Vec<&Cluster> = clusters.iter().collect();
    ranked.sort_by_key(|cluster| std::cmp::Reverse(cluster.priority.weight()));

    let chunk_size = config.max_stops_per_route.max(1);

    // Chunks are independent; par_chunks keeps output order deterministic.
    let routes: Vec<Route> = ranked
        .par_chunks(chunk_size)
        .enumerate()
        .map(|(index, chunk)| sequence_route(index + 1, chunk, depot, config))
        .collect();

    debug!(
        clusters = clusters.len(),
        routes = routes.len(),
        "built routes"
    );

    Ok(routes)
}

/// Greedy nearest-neighbor sequencing for one chunk, anchored at the depot.
fn sequence_route(
    id: usize,
    chunk: &[&Cluster],
    depot: (f64, f64),
    config: &RouteConfig,
) -> Route {
    let mut remaining: Vec<&Cluster> = chunk.to_vec();
    let mut stops: Vec<RouteStop> = Vec::with_capacity(remaining.len());
    let mut path: Vec<(f64, f64)> = Vec::with_capacity(remaining.len() + 2);

    path.push(depot);
    let mut at = depot;

    while !remaining.is_empty() {
        // Strict < keeps distance ties on the earliest remaining cluster.
        let mut nearest = 0;
        let mut nearest_m =
            haversine_meters(at.0, at.1, remaining[0].center.0, remaining[0].center.1);
        for (idx, candidate) in remaining.iter().enumerate().skip(1) {
            let meters = haversine_meters(at.0, at.1, candidate.center.0, candidate.center.1);
            if meters < nearest_m {
                nearest = idx;
                nearest_m = meters;
            }
        }

        let next = remaining.remove(nearest);
        at = next.center;
        path.push(at);
        stops.push(RouteStop {
            cluster_id: next.id,
            name: next.name.clone(),
            center: next.center,
            priority: next.priority,
        });
    }

    path.push(depot);

    let distance_km = path_meters(&path) / 1000.0;
    let estimated_time_minutes = (stops.len() as f64 * config.service_minutes_per_stop
        + distance_km * config.travel_minutes_per_km)
        .round() as i64;

    Route {
        id,
        name: format!("Route {}", id),
        priority: chunk[0].priority,
        total_stops: stops.len(),
        stops,
        path,
        distance_km,
        estimated_time_minutes,
    }
}

fn path_meters(path: &[(f64, f64)]) -> f64 {
    path.windows(2)
        .map(|leg| haversine_meters(leg[0].0, leg[0].1, leg[1].0, leg[1].1))
        .sum()
}

fn validate_depot((lat, lng): (f64, f64)) -> PlanResult<()> {
    let in_range = lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng);
    if in_range {
        Ok(())
    } else {
        Err(PlanError::InvalidCoordinate { lat, lng })
    }
}

// Cluster centers come from the cluster builder, which already range-checks
// its inputs; only reject values the distance math cannot handle.
fn validate_finite((lat, lng): (f64, f64)) -> PlanResult<()> {
    if lat.is_finite() && lng.is_finite() {
        Ok(())
    } else {
        Err(PlanError::InvalidCoordinate { lat, lng })
    }
}

/// Savings of a routed plan over one uncoordinated trip per cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Efficiency {
    /// Percent of baseline distance saved, rounded to one decimal.
    pub improvement_percent: f64,
    /// Kilometers saved, rounded to one decimal.
    pub distance_saved_km: f64,
    /// Coarse driving-time estimate; serialized with an explicit "~" marker.
    pub time_saved_minutes: i64,
}

// Wire shape: {"improvement":"12.5%","distanceSaved":"3.4km","timeSaved":"~10 minutes"}
impl Serialize for Efficiency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Efficiency", 3)?;
        state.serialize_field("improvement", &format!("{:.1}%", self.improvement_percent))?;
        state.serialize_field("distanceSaved", &format!("{:.1}km", self.distance_saved_km))?;
        state.serialize_field("timeSaved", &format!("~{} minutes", self.time_saved_minutes))?;
        state.end()
    }
}

/// Compares the routed plan against a per-cluster solo-trip baseline.
///
/// Returns `None` when `original_clusters` is empty: with a zero baseline
/// there is nothing to compare against, and the division never happens.
pub fn efficiency(original_clusters: &[Cluster], routes: &[Route]) -> Option<Efficiency> {
    if original_clusters.is_empty() {
        return None;
    }

    let baseline_m = original_clusters.len() as f64 * SOLO_TRIP_METERS;
    let optimized_m: f64 = routes.iter().map(|route| route.distance_km * 1000.0).sum();

    let improvement_percent = round1((baseline_m - optimized_m) / baseline_m * 100.0);
    let distance_saved_km = round1((baseline_m - optimized_m) / 1000.0);

    Some(Efficiency {
        improvement_percent,
        distance_saved_km,
        time_saved_minutes: (distance_saved_km * SAVED_MINUTES_PER_KM).round() as i64,
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
