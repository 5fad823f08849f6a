//! Query façade consumed by the serialization layer.

use std::collections::BTreeSet;

use crate::catalogue::TransportCatalogue;
use crate::identifiers::BusName;
use crate::models::types::*;
use crate::render::{Document, MapRenderer};
use crate::router::{Itinerary, TransportRouter};

/// Read-only view over a loaded catalogue and its optional collaborators
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    router: Option<&'a TransportRouter<'a>>,
    renderer: Option<&'a MapRenderer>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(catalogue: &'a TransportCatalogue) -> Self {
        Self {
            catalogue,
            router: None,
            renderer: None,
        }
    }

    pub fn with_router(mut self, router: &'a TransportRouter<'a>) -> Self {
        self.router = Some(router);
        self
    }

    pub fn with_renderer(mut self, renderer: &'a MapRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn bus_stat(&self, bus_name: &str) -> Result<BusRouteInfo> {
        self.catalogue.route_info(bus_name)
    }

    pub fn buses_by_stop(&self, stop_name: &str) -> Option<&'a BTreeSet<BusName>> {
        self.catalogue.buses_for_stop(stop_name)
    }

    pub fn build_itinerary(&self, from: &str, to: &str) -> Result<Itinerary> {
        self.router
            .ok_or(CatalogueError::NotConfigured("routing"))?
            .build_itinerary(from, to)
    }

    pub fn render_map(&self) -> Result<Document> {
        let renderer = self.renderer.ok_or(CatalogueError::NotConfigured("map rendering"))?;
        Ok(renderer.render(self.catalogue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderSettings;
    use crate::router::RoutingSettings;
    use approx::assert_relative_eq;

    fn catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", lat_lng(55.611087, 37.20829));
        catalogue.add_stop("B", lat_lng(55.595884, 37.209755));
        catalogue.set_distance("A", "B", 3900.0).unwrap();
        catalogue.add_bus("114", &["A", "B"], false).unwrap();
        catalogue
    }

    #[test]
    fn test_catalogue_queries_without_collaborators() {
        let catalogue = catalogue();
        let handler = RequestHandler::new(&catalogue);

        assert_eq!(handler.bus_stat("114").unwrap().stop_count, 3);
        assert!(handler.bus_stat("115").unwrap_err().is_not_found());
        assert_eq!(handler.buses_by_stop("A").map(BTreeSet::len), Some(1));
        assert!(handler.buses_by_stop("Z").is_none());

        assert!(matches!(
            handler.build_itinerary("A", "B"),
            Err(CatalogueError::NotConfigured(_))
        ));
        assert!(matches!(handler.render_map(), Err(CatalogueError::NotConfigured(_))));
    }

    #[test]
    fn test_with_collaborators() {
        let catalogue = catalogue();
        let router = TransportRouter::new(&catalogue, RoutingSettings::new(2, 30).unwrap()).unwrap();
        let renderer = MapRenderer::new(RenderSettings::default());
        let handler = RequestHandler::new(&catalogue)
            .with_router(&router)
            .with_renderer(&renderer);

        // 3900 m at 500 m/min
        let itinerary = handler.build_itinerary("B", "A").unwrap();
        assert_relative_eq!(itinerary.total_time().unwrap(), 2.0 + 7.8);

        let map = handler.render_map().unwrap().to_string();
        assert!(map.starts_with("<?xml"));
        assert!(map.contains(">114</text>"));
    }
}
