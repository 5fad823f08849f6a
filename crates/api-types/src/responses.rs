//! Output document models. The tool prints a JSON array of [`StatResponse`].

use serde::Serialize;
use transport_catalogue::{BusRouteInfo, Itinerary, Segment};

pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Map(MapResponse),
    Route(RouteResponse),
    Error(ErrorResponse),
}

impl StatResponse {
    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Bus(r) => r.request_id,
            StatResponse::Stop(r) => r.request_id,
            StatResponse::Map(r) => r.request_id,
            StatResponse::Route(r) => r.request_id,
            StatResponse::Error(r) => r.request_id,
        }
    }

    pub fn not_found(request_id: i64) -> Self {
        StatResponse::Error(ErrorResponse {
            request_id,
            error_message: NOT_FOUND.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    pub curvature: f64,
    pub route_length: f64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

impl BusResponse {
    pub fn new(request_id: i64, info: &BusRouteInfo) -> Self {
        Self {
            request_id,
            curvature: info.curvature,
            route_length: info.road_length,
            stop_count: info.stop_count,
            unique_stop_count: info.unique_stop_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,

    /// Bus names in lexicographic order
    pub buses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    pub request_id: i64,

    /// The whole SVG document as a string
    pub map: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl RouteResponse {
    /// `None` when the stops are not connected
    pub fn new(request_id: i64, itinerary: &Itinerary) -> Option<Self> {
        let total_time = itinerary.total_time()?;
        Some(Self {
            request_id,
            total_time,
            items: itinerary.segments().iter().map(RouteItem::from).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&Segment> for RouteItem {
    fn from(segment: &Segment) -> Self {
        match segment {
            Segment::Wait { stop, duration } => RouteItem::Wait {
                stop_name: stop.to_string(),
                time: *duration,
            },
            Segment::Ride {
                bus,
                span_count,
                duration,
            } => RouteItem::Bus {
                bus: bus.to_string(),
                span_count: *span_count,
                time: *duration,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    pub error_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bus_response_shape() {
        let info = BusRouteInfo {
            road_length: 5950.0,
            curvature: 1.361239,
            stop_count: 5,
            unique_stop_count: 3,
        };
        let response = StatResponse::Bus(BusResponse::new(1, &info));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "request_id": 1,
                "curvature": 1.361239,
                "route_length": 5950.0,
                "stop_count": 5,
                "unique_stop_count": 3
            })
        );
    }

    #[test]
    fn test_not_found_shape() {
        let response = StatResponse::not_found(7);
        assert_eq!(response.request_id(), 7);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"request_id": 7, "error_message": "not found"})
        );
    }

    #[test]
    fn test_route_items_are_tagged() {
        let itinerary = Itinerary::from_segments(vec![
            Segment::Wait {
                stop: "A".into(),
                duration: 1.0,
            },
            Segment::Ride {
                bus: "1".into(),
                span_count: 2,
                duration: 2.0,
            },
        ]);
        let response = RouteResponse::new(3, &itinerary).unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "request_id": 3,
                "total_time": 3.0,
                "items": [
                    {"type": "Wait", "stop_name": "A", "time": 1.0},
                    {"type": "Bus", "bus": "1", "span_count": 2, "time": 2.0}
                ]
            })
        );
    }

    #[test]
    fn test_route_response_trivial_and_missing() {
        let here = RouteResponse::new(1, &Itinerary::AlreadyThere).unwrap();
        assert_eq!(here.total_time, 0.0);
        assert!(here.items.is_empty());

        assert!(RouteResponse::new(1, &Itinerary::NoRoute).is_none());
    }
}
