//! In-memory transport catalogue.
//!
//! Stops and buses live in arenas indexed by dense ids; name lookups go
//! through hash maps. Road distances are keyed by ordered [`StopId`] pairs.

use std::collections::{BTreeSet, HashMap};

use geo::Point;

use crate::identifiers::*;
use crate::models::types::*;
use crate::spatial::great_circle_length;

// ============================================================================
// Catalogue
// ============================================================================

/// Owner of all stops, buses and road distances.
///
/// Loading happens through `&mut self` methods; everything downstream
/// (router, renderer, request handler) borrows the catalogue immutably, so
/// the load phase is over once the first of those is built.
#[derive(Clone, Debug, Default)]
pub struct TransportCatalogue {
    // Arenas, indexed by `StopId` and bus position
    stops: Vec<Stop>,
    buses: Vec<Bus>,

    // Lookup maps
    stop_map: HashMap<StopName, StopId>,
    bus_map: HashMap<BusName, usize>,

    // Directed road distances in meters
    distances: HashMap<(StopId, StopId), f64>,

    // Buses visiting each stop, indexed by `StopId`
    stop_buses: Vec<BTreeSet<BusName>>,
}

impl TransportCatalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Loading ----

    /// Register a stop. Re-adding a known name keeps the original stop.
    pub fn add_stop(&mut self, name: impl Into<StopName>, location: Point) -> StopId {
        let name = name.into();
        if let Some(&id) = self.stop_map.get(&name) {
            log::debug!("Stop {} already registered as {}", name, id);
            return id;
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop {
            id,
            name: name.clone(),
            location,
        });
        self.stop_map.insert(name, id);
        self.stop_buses.push(BTreeSet::new());
        id
    }

    /// Register a bus over already known stops.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<BusName>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<()> {
        let name = name.into();
        if self.bus_map.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }

        let stops = stops
            .iter()
            .map(|stop| self.stop_id(stop.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        for id in &stops {
            self.stop_buses[id.0].insert(name.clone());
        }

        self.bus_map.insert(name.clone(), self.buses.len());
        self.buses.push(Bus {
            name,
            stops,
            is_roundtrip,
        });
        Ok(())
    }

    /// Record the road distance from `from` to `to` in meters.
    ///
    /// The reverse direction is a separate slot. A slot that is already set
    /// keeps its first value.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<()> {
        if !(meters.is_finite() && meters > 0.0) {
            return Err(CatalogueError::InvalidData(format!(
                "Road distance from {} to {} must be positive, got {}",
                from, to, meters
            )));
        }

        let key = (self.stop_id(from)?, self.stop_id(to)?);
        if self.distances.contains_key(&key) {
            log::debug!("Distance {} -> {} already set, keeping the first value", from, to);
            return Ok(());
        }
        self.distances.insert(key, meters);
        Ok(())
    }

    // ---- Lookups ----

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_map.get(name).map(|id| &self.stops[id.0])
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_map.get(name).map(|&index| &self.buses[index])
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    pub fn stop_id(&self, name: &str) -> Result<StopId> {
        self.stop_map
            .get(name)
            .copied()
            .ok_or_else(|| CatalogueError::StopNotFound(name.into()))
    }

    /// Road distance, falling back to the reverse direction when only that
    /// one was recorded.
    pub fn distance(&self, from: StopId, to: StopId) -> Option<f64> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Buses visiting a stop, ordered by name. `None` for an unknown stop.
    pub fn buses_for_stop(&self, name: &str) -> Option<&BTreeSet<BusName>> {
        self.stop_map.get(name).map(|id| &self.stop_buses[id.0])
    }

    // ---- Collections ----

    /// All stops in id order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    // ---- Statistics ----

    /// Length, curvature and stop counts of a bus route.
    pub fn route_info(&self, bus_name: &str) -> Result<BusRouteInfo> {
        let bus = self
            .find_bus(bus_name)
            .ok_or_else(|| CatalogueError::BusNotFound(bus_name.into()))?;

        let mut road_length = 0.0;
        let mut geo_length = 0.0;
        for direction in bus.directions() {
            road_length += self.road_length(bus, &direction);
            geo_length += great_circle_length(direction.iter().map(|id| self.stops[id.0].location));
        }

        if geo_length <= 0.0 || geo_length.is_nan() {
            return Err(CatalogueError::DegenerateRoute(bus.name.clone()));
        }

        Ok(BusRouteInfo {
            road_length,
            curvature: road_length / geo_length,
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
        })
    }

    /// Road length of one direction. Unknown legs count as zero.
    fn road_length(&self, bus: &Bus, path: &[StopId]) -> f64 {
        path.windows(2)
            .map(|leg| {
                self.distance(leg[0], leg[1]).unwrap_or_else(|| {
                    log::warn!(
                        "Bus {}: no road distance between {} and {}",
                        bus.name,
                        self.stops[leg[0].0].name,
                        self.stops[leg[1].0].name
                    );
                    0.0
                })
            })
            .sum()
    }
}
