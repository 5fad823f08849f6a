//! Core data types for the catalogue.

use std::collections::HashSet;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Entities
// ============================================================================

/// Build a location from latitude/longitude in degrees.
///
/// `geo` stores points as (x, y), i.e. (longitude, latitude).
pub fn lat_lng(latitude: f64, longitude: f64) -> Point {
    Point::new(longitude, latitude)
}

/// A named stop with a stable dense id
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: StopName,
    pub location: Point,
}

impl Stop {
    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }
}

/// A bus route over stops already registered in the catalogue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bus {
    pub name: BusName,

    /// Declared path; the return leg of a non-roundtrip route is implicit.
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    /// Stops visited by one full run, counting the turnaround stop once.
    pub fn stop_count(&self) -> usize {
        if self.is_roundtrip {
            self.stops.len()
        } else {
            (self.stops.len() * 2).saturating_sub(1)
        }
    }

    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// The directions a vehicle actually drives: the declared path and, for
    /// out-and-back routes, the same path reversed.
    pub fn directions(&self) -> Vec<Vec<StopId>> {
        let mut directions = vec![self.stops.clone()];
        if !self.is_roundtrip {
            directions.push(self.stops.iter().rev().copied().collect());
        }
        directions
    }
}

/// Aggregate statistics of one bus route
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BusRouteInfo {
    /// Sum of road distances in meters over every driven direction.
    pub road_length: f64,

    /// `road_length` divided by the great-circle length of the same path.
    pub curvature: f64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("Stop not found: {0}")]
    StopNotFound(StopName),

    #[error("Bus not found: {0}")]
    BusNotFound(BusName),

    #[error("Bus already registered: {0}")]
    DuplicateBus(BusName),

    #[error("No road distance between {from} and {to} (bus {bus})")]
    MissingDistance {
        from: StopName,
        to: StopName,
        bus: BusName,
    },

    #[error("Route {0} has zero geographic length, curvature is undefined")]
    DegenerateRoute(BusName),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl CatalogueError {
    /// Whether the error names an unknown stop or bus, as opposed to bad data.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StopNotFound(_) | Self::BusNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
