use anyhow::{Context, Result};
use transit_api_types::{BaseRequest, BusRequest, RenderSettings, StopRequest};
use transport_catalogue::{lat_lng, MapRenderer, RoutingSettings, TransportCatalogue};

/// Build the catalogue from base requests: every stop first, then every road
/// distance, then every bus, so requests may reference stops declared later.
pub fn load_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue> {
    let stops: Vec<&StopRequest> = requests
        .iter()
        .filter_map(|r| match r {
            BaseRequest::Stop(stop) => Some(stop),
            BaseRequest::Bus(_) => None,
        })
        .collect();
    let buses: Vec<&BusRequest> = requests
        .iter()
        .filter_map(|r| match r {
            BaseRequest::Bus(bus) => Some(bus),
            BaseRequest::Stop(_) => None,
        })
        .collect();

    let mut catalogue = TransportCatalogue::new();

    for stop in &stops {
        catalogue.add_stop(stop.name.as_str(), lat_lng(stop.latitude, stop.longitude));
    }

    for stop in &stops {
        for (neighbour, &meters) in &stop.road_distances {
            catalogue
                .set_distance(&stop.name, neighbour, meters)
                .with_context(|| format!("Invalid road distance from stop {}", stop.name))?;
        }
    }

    for bus in &buses {
        catalogue
            .add_bus(bus.name.as_str(), &bus.stops, bus.is_roundtrip)
            .with_context(|| format!("Failed to add bus {}", bus.name))?;
    }

    log::info!("Catalogue: {} stops, {} buses", stops.len(), buses.len());
    Ok(catalogue)
}

pub fn routing_settings(settings: Option<RoutingSettings>) -> Result<Option<RoutingSettings>> {
    let Some(settings) = settings else {
        log::debug!("No routing settings, route requests will answer not found");
        return Ok(None);
    };
    settings.validate().context("Invalid routing settings")?;
    Ok(Some(settings))
}

pub fn map_renderer(settings: Option<&RenderSettings>) -> Option<MapRenderer> {
    match settings {
        Some(settings) => Some(MapRenderer::new(settings.clone().into())),
        None => {
            log::debug!("No render settings, map requests will answer not found");
            None
        }
    }
}
