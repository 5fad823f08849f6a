//! # transport-catalogue
//!
//! In-memory public transit catalogue with route statistics, fastest
//! itineraries and an SVG network map.
//!
//! ## Features
//!
//! - **Catalogue**: stops with dense ids, bus routes, directed road distances
//! - **Statistics**: route length, curvature and stop counts per bus
//! - **Itineraries**: wait/ride segments from a dense per-route graph
//! - **Map**: SVG rendering of routes and stops
//!
//! ## Example
//!
//! ```
//! use transport_catalogue::prelude::*;
//!
//! let mut catalogue = TransportCatalogue::new();
//! catalogue.add_stop("A", lat_lng(0.0, 0.0));
//! catalogue.add_stop("B", lat_lng(0.0, 1.0));
//! catalogue.add_stop("C", lat_lng(0.0, 2.0));
//! catalogue.set_distance("A", "B", 100.0)?;
//! catalogue.set_distance("B", "C", 100.0)?;
//! catalogue.add_bus("1", &["A", "B", "C"], true)?;
//!
//! let info = catalogue.route_info("1")?;
//! assert_eq!(info.stop_count, 3);
//! assert_eq!(info.road_length, 200.0);
//!
//! // 1 minute boarding wait, 6 km/h = 100 m per minute
//! let router = TransportRouter::new(&catalogue, RoutingSettings::new(1, 6)?)?;
//! let itinerary = router.build_itinerary("A", "C")?;
//! assert_eq!(itinerary.total_time(), Some(3.0));
//! # Ok::<(), CatalogueError>(())
//! ```

pub mod catalogue;
pub mod graph;
pub mod handler;
pub mod identifiers;
pub mod models;
pub mod render;
pub mod router;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::catalogue::TransportCatalogue;
    pub use crate::handler::RequestHandler;
    pub use crate::identifiers::*;
    pub use crate::models::types::*;
    pub use crate::render::{MapRenderer, RenderSettings};
    pub use crate::router::{EdgeInfo, Itinerary, RoutingSettings, Segment, TransportRouter};
}

pub use prelude::*;
