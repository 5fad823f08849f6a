use anyhow::{Context, Result};
use transit_api_types::*;
use transport_catalogue::{CatalogueError, RequestHandler, TransportRouter};

use crate::loader;

/// Load the document and answer its stat requests in order.
pub fn answer_all(document: &RequestDocument) -> Result<Vec<StatResponse>> {
    let catalogue = loader::load_catalogue(&document.base_requests)?;

    let router = match loader::routing_settings(document.routing_settings)? {
        Some(settings) => Some(
            TransportRouter::new(&catalogue, settings).context("Failed to build the itinerary graph")?,
        ),
        None => None,
    };
    let renderer = loader::map_renderer(document.render_settings.as_ref());

    let mut handler = RequestHandler::new(&catalogue);
    if let Some(router) = &router {
        log::debug!(
            "Itinerary graph: {} vertices, {} edges",
            router.graph().vertex_count(),
            router.graph().edge_count()
        );
        handler = handler.with_router(router);
    }
    if let Some(renderer) = &renderer {
        handler = handler.with_renderer(renderer);
    }

    Ok(document
        .stat_requests
        .iter()
        .map(|request| answer(&handler, request))
        .collect())
}

pub fn answer(handler: &RequestHandler<'_>, request: &StatRequest) -> StatResponse {
    let id = request.id();
    match request {
        StatRequest::Bus { name, .. } => match handler.bus_stat(name) {
            Ok(info) => StatResponse::Bus(BusResponse::new(id, &info)),
            Err(err) => error_response(id, err),
        },
        StatRequest::Stop { name, .. } => match handler.buses_by_stop(name) {
            Some(buses) => StatResponse::Stop(StopResponse {
                request_id: id,
                buses: buses.iter().map(ToString::to_string).collect(),
            }),
            None => StatResponse::not_found(id),
        },
        StatRequest::Map { .. } => match handler.render_map() {
            Ok(map) => StatResponse::Map(MapResponse {
                request_id: id,
                map: map.to_string(),
            }),
            Err(err) => error_response(id, err),
        },
        StatRequest::Route { from, to, .. } => match handler.build_itinerary(from, to) {
            Ok(itinerary) => RouteResponse::new(id, &itinerary)
                .map(StatResponse::Route)
                .unwrap_or_else(|| StatResponse::not_found(id)),
            Err(err) => error_response(id, err),
        },
    }
}

fn error_response(request_id: i64, err: CatalogueError) -> StatResponse {
    if err.is_not_found() || matches!(err, CatalogueError::NotConfigured(_)) {
        return StatResponse::not_found(request_id);
    }

    log::warn!("Request {} failed: {}", request_id, err);
    StatResponse::Error(ErrorResponse {
        request_id,
        error_message: err.to_string(),
    })
}
