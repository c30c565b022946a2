//! collection-planner core
//!
//! Clustering, prioritization, and route sequencing for municipal waste
//! collection dispatch. Pure synchronous batch functions over caller-supplied
//! snapshots; HTTP, persistence, and auth live in the surrounding service.

pub mod cluster;
pub mod error;
pub mod haversine;
pub mod report;
pub mod route;

pub use cluster::{Cluster, ClusterConfig, Priority, build_clusters};
pub use error::{PlanError, PlanResult};
pub use report::{Report, ReportLocation};
pub use route::{Efficiency, Route, RouteConfig, RouteStop, build_routes, efficiency};
