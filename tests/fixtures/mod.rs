//! Test fixtures for collection-planner.
//!
//! Provides realistic test data including:
//! - Real Nairobi locations (from OpenStreetMap)
//! - Report builders for the two accepted coordinate shapes

#![allow(dead_code)]

pub mod nairobi_locations;

pub use nairobi_locations::*;
