//! JSON request and response models for the transit query tool.
//!
//! The input document carries the network (`base_requests`), optional
//! routing and rendering settings, and the queries (`stat_requests`).
//! Every query gets exactly one response, tagged with its `request_id`.

pub mod requests;
pub mod responses;

pub use requests::{BaseRequest, BusRequest, ColorValue, RenderSettings, RequestDocument, StatRequest, StopRequest};
pub use responses::{NOT_FOUND, BusResponse, ErrorResponse, MapResponse, RouteItem, RouteResponse, StatResponse, StopResponse};
