//! Input document models.

use std::collections::BTreeMap;

use serde::Deserialize;
use transport_catalogue::render::{self, svg};
use transport_catalogue::router::RoutingSettings;

#[derive(Debug, Deserialize)]
pub struct RequestDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub render_settings: Option<RenderSettings>,

    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

// ============================================================================
// Base requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Road distances in meters from this stop to its neighbours
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

// ============================================================================
// Stat requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

// ============================================================================
// Render settings
// ============================================================================

/// A color given as a name, `[r, g, b]` or `[r, g, b, opacity]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<ColorValue> for svg::Color {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Named(name) => svg::Color::Named(name),
            ColorValue::Rgb(r, g, b) => svg::Color::Rgb(r, g, b),
            ColorValue::Rgba(r, g, b, a) => svg::Color::Rgba(r, g, b, a),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: ColorValue,
    pub underlayer_width: f64,
    pub color_palette: Vec<ColorValue>,
}

impl From<RenderSettings> for render::RenderSettings {
    fn from(value: RenderSettings) -> Self {
        let [bus_dx, bus_dy] = value.bus_label_offset;
        let [stop_dx, stop_dy] = value.stop_label_offset;
        Self {
            width: value.width,
            height: value.height,
            padding: value.padding,
            line_width: value.line_width,
            stop_radius: value.stop_radius,
            bus_label_font_size: value.bus_label_font_size,
            bus_label_offset: svg::Point::new(bus_dx, bus_dy),
            stop_label_font_size: value.stop_label_font_size,
            stop_label_offset: svg::Point::new(stop_dx, stop_dy),
            underlayer_color: value.underlayer_color.into(),
            underlayer_width: value.underlayer_width,
            color_palette: value.color_palette.into_iter().map(Into::into).collect(),
        }
    }
}
