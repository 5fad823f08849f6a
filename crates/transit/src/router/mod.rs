//! Fastest-itinerary search over the catalogue.
//!
//! The routing graph has one vertex per stop. For every bus and every
//! driven direction, each stop gets a direct edge to every later stop of
//! the same direction, weighted by the boarding wait plus the ride time.
//! A shortest path therefore only chooses where to change buses; staying
//! aboard for several stops is always a single edge, which is what lets an
//! itinerary report one ride segment per boarding.

pub mod itinerary;
pub mod settings;

pub use itinerary::{Itinerary, Segment};
pub use settings::RoutingSettings;

use crate::catalogue::TransportCatalogue;
use crate::graph::{DirectedWeightedGraph, Edge, EdgeId};
use crate::identifiers::*;
use crate::models::types::*;

/// Metadata of one routing-graph edge, indexed by [`EdgeId`]
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeInfo {
    pub from: StopId,
    pub to: StopId,
    pub bus: BusName,

    /// Stops advanced while staying aboard
    pub span_count: usize,

    /// Minutes, boarding wait included
    pub travel_time: f64,
}

/// Routing graph built once from a fully loaded catalogue
pub struct TransportRouter<'c> {
    catalogue: &'c TransportCatalogue,
    settings: RoutingSettings,
    graph: DirectedWeightedGraph,
    edges: Vec<EdgeInfo>,
}

impl<'c> TransportRouter<'c> {
    /// Build the full routing graph.
    ///
    /// Fails with [`CatalogueError::MissingDistance`] if any bus drives
    /// between two adjacent stops with no road distance in either direction.
    pub fn new(catalogue: &'c TransportCatalogue, settings: RoutingSettings) -> Result<Self> {
        settings.validate()?;

        let mut router = Self {
            catalogue,
            settings,
            graph: DirectedWeightedGraph::new(catalogue.stops().len()),
            edges: Vec::new(),
        };

        for bus in catalogue.buses() {
            for direction in bus.directions() {
                router.add_edges_along(bus, &direction)?;
            }
        }

        log::debug!(
            "Routing graph built: {} vertices, {} edges from {} buses",
            router.graph.vertex_count(),
            router.graph.edge_count(),
            catalogue.buses().len()
        );
        Ok(router)
    }

    fn add_edges_along(&mut self, bus: &Bus, path: &[StopId]) -> Result<()> {
        let wait = self.settings.wait_minutes();
        let speed = self.settings.meters_per_minute();

        for (i, &start) in path.iter().enumerate() {
            let mut meters = 0.0;
            for j in i + 1..path.len() {
                meters += self.leg_distance(bus, path[j - 1], path[j])?;
                let travel_time = wait + meters / speed;

                let id = self.graph.add_edge(Edge {
                    from: start.index(),
                    to: path[j].index(),
                    weight: travel_time,
                });
                debug_assert_eq!(id, self.edges.len());

                self.edges.push(EdgeInfo {
                    from: start,
                    to: path[j],
                    bus: bus.name.clone(),
                    span_count: j - i,
                    travel_time,
                });
            }
        }
        Ok(())
    }

    fn leg_distance(&self, bus: &Bus, from: StopId, to: StopId) -> Result<f64> {
        self.catalogue
            .distance(from, to)
            .ok_or_else(|| CatalogueError::MissingDistance {
                from: self.stop_name(from),
                to: self.stop_name(to),
                bus: bus.name.clone(),
            })
    }

    fn stop_name(&self, id: StopId) -> StopName {
        self.catalogue.stops()[id.index()].name.clone()
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    pub fn edge_info(&self, id: EdgeId) -> Option<&EdgeInfo> {
        self.edges.get(id)
    }

    /// Edge table in edge-id order
    pub fn edges(&self) -> &[EdgeInfo] {
        &self.edges
    }

    /// Fastest itinerary between two stops.
    ///
    /// Unknown stop names are reported as [`CatalogueError::StopNotFound`].
    pub fn build_itinerary(&self, from: &str, to: &str) -> Result<Itinerary> {
        let from = self.catalogue.stop_id(from)?;
        let to = self.catalogue.stop_id(to)?;

        let Some(route) = self.graph.build_route(from.index(), to.index()) else {
            return Ok(Itinerary::NoRoute);
        };
        if route.edges.is_empty() {
            return Ok(Itinerary::AlreadyThere);
        }

        let wait = self.settings.wait_minutes();
        let mut segments = Vec::with_capacity(route.edges.len() * 2);
        for edge in route.edges.iter().map(|&id| &self.edges[id]) {
            segments.push(Segment::Wait {
                stop: self.stop_name(edge.from),
                duration: wait,
            });

            if edge.from == edge.to {
                continue;
            }
            segments.push(Segment::Ride {
                bus: edge.bus.clone(),
                span_count: edge.span_count,
                duration: edge.travel_time - wait,
            });
        }

        Ok(Itinerary::from_segments(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A(0,0), B(0,1), C(0,2) with 100 m legs; at 6 km/h a leg takes 1 min.
    fn line_catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", lat_lng(0.0, 0.0));
        catalogue.add_stop("B", lat_lng(0.0, 1.0));
        catalogue.add_stop("C", lat_lng(0.0, 2.0));
        catalogue.set_distance("A", "B", 100.0).unwrap();
        catalogue.set_distance("B", "C", 100.0).unwrap();
        catalogue
    }

    fn settings() -> RoutingSettings {
        RoutingSettings::new(1, 6).unwrap()
    }

    fn endpoints(router: &TransportRouter<'_>) -> Vec<(usize, usize, usize)> {
        router
            .edges()
            .iter()
            .map(|e| (e.from.index(), e.to.index(), e.span_count))
            .collect()
    }

    #[test]
    fn test_two_stop_roundtrip_has_one_edge() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B"], true).unwrap();

        let router = TransportRouter::new(&catalogue, settings()).unwrap();
        assert_eq!(endpoints(&router), vec![(0, 1, 1)]);
    }

    #[test]
    fn test_every_later_stop_gets_an_edge() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B", "C"], true).unwrap();

        let router = TransportRouter::new(&catalogue, settings()).unwrap();
        assert_eq!(endpoints(&router), vec![(0, 1, 1), (0, 2, 2), (1, 2, 1)]);
        assert_eq!(router.graph().edge_count(), 3);
    }

    #[test]
    fn test_out_and_back_adds_return_edges() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B", "C"], false).unwrap();

        let router = TransportRouter::new(&catalogue, settings()).unwrap();
        assert_eq!(
            endpoints(&router),
            vec![(0, 1, 1), (0, 2, 2), (1, 2, 1), (2, 1, 1), (2, 0, 2), (1, 0, 1)]
        );
    }

    #[test]
    fn test_edge_weights() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B", "C"], true).unwrap();

        // 40 km/h = 666.67 m/min
        let router = TransportRouter::new(&catalogue, RoutingSettings::new(6, 40).unwrap()).unwrap();
        let info = router.edge_info(1).unwrap();
        assert_eq!(info.bus.as_str(), "1");
        assert_relative_eq!(info.travel_time, 6.0 + 200.0 / (40_000.0 / 60.0));
        assert_relative_eq!(router.graph().edge(1).unwrap().weight, info.travel_time);
    }

    #[test]
    fn test_missing_distance_aborts_construction() {
        let mut catalogue = line_catalogue();
        catalogue.add_stop("D", lat_lng(0.0, 3.0));
        catalogue.add_bus("1", &["A", "B", "C", "D"], true).unwrap();

        match TransportRouter::new(&catalogue, settings()) {
            Err(CatalogueError::MissingDistance { from, to, bus }) => {
                assert_eq!(from.as_str(), "C");
                assert_eq!(to.as_str(), "D");
                assert_eq!(bus.as_str(), "1");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("graph construction should fail"),
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let catalogue = line_catalogue();
        let settings = RoutingSettings {
            bus_wait_time: 0,
            bus_velocity: 6,
        };
        assert!(TransportRouter::new(&catalogue, settings).is_err());
    }

    #[test]
    fn test_single_ride_itinerary() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B", "C"], true).unwrap();
        let router = TransportRouter::new(&catalogue, settings()).unwrap();

        let itinerary = router.build_itinerary("A", "C").unwrap();
        assert_eq!(
            itinerary.segments(),
            &[
                Segment::Wait { stop: "A".into(), duration: 1.0 },
                Segment::Ride { bus: "1".into(), span_count: 2, duration: 2.0 },
            ]
        );
        assert_eq!(itinerary.total_time(), Some(3.0));
    }

    #[test]
    fn test_transfer_between_buses() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B"], true).unwrap();
        catalogue.add_bus("2", &["B", "C"], true).unwrap();
        let router = TransportRouter::new(&catalogue, settings()).unwrap();

        let itinerary = router.build_itinerary("A", "C").unwrap();
        assert_eq!(
            itinerary.segments(),
            &[
                Segment::Wait { stop: "A".into(), duration: 1.0 },
                Segment::Ride { bus: "1".into(), span_count: 1, duration: 1.0 },
                Segment::Wait { stop: "B".into(), duration: 1.0 },
                Segment::Ride { bus: "2".into(), span_count: 1, duration: 1.0 },
            ]
        );
        assert_eq!(itinerary.total_time(), Some(4.0));
    }

    #[test]
    fn test_return_leg_is_routable() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B", "C"], false).unwrap();
        let router = TransportRouter::new(&catalogue, settings()).unwrap();

        let itinerary = router.build_itinerary("C", "A").unwrap();
        assert_eq!(itinerary.total_time(), Some(3.0));
        assert_eq!(
            itinerary.segments()[1],
            Segment::Ride { bus: "1".into(), span_count: 2, duration: 2.0 }
        );
    }

    #[test]
    fn test_roundtrip_is_one_way() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B", "C"], true).unwrap();
        let router = TransportRouter::new(&catalogue, settings()).unwrap();

        assert_eq!(router.build_itinerary("C", "A").unwrap(), Itinerary::NoRoute);
    }

    #[test]
    fn test_already_there() {
        let mut catalogue = line_catalogue();
        catalogue.add_bus("1", &["A", "B", "C"], true).unwrap();
        let router = TransportRouter::new(&catalogue, settings()).unwrap();

        let itinerary = router.build_itinerary("B", "B").unwrap();
        assert_eq!(itinerary, Itinerary::AlreadyThere);
        assert_eq!(itinerary.total_time(), Some(0.0));
    }

    #[test]
    fn test_no_connecting_bus() {
        let mut catalogue = line_catalogue();
        catalogue.add_stop("Island", lat_lng(1.0, 1.0));
        catalogue.add_bus("1", &["A", "B", "C"], false).unwrap();
        let router = TransportRouter::new(&catalogue, settings()).unwrap();

        assert_eq!(router.build_itinerary("A", "Island").unwrap(), Itinerary::NoRoute);
    }

    #[test]
    fn test_unknown_stop() {
        let catalogue = line_catalogue();
        let router = TransportRouter::new(&catalogue, settings()).unwrap();

        assert!(matches!(
            router.build_itinerary("A", "Atlantis"),
            Err(CatalogueError::StopNotFound(_))
        ));
    }
}
