//! SVG map of the network.

pub mod projector;
pub mod svg;

pub use projector::SphereProjector;
pub use svg::{Color, Document};

use std::collections::BTreeMap;

use crate::catalogue::TransportCatalogue;
use crate::identifiers::*;
use crate::models::types::*;
use svg::{Circle, Point, Polyline, StrokeLineCap, StrokeLineJoin, Styled, Text};

const FONT_FAMILY: &str = "Verdana";

/// Canvas geometry and styling of the map
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Point,
    pub underlayer_color: Color,
    pub underlayer_width: f64,

    /// Route colors, assigned to buses in name order and reused cyclically
    pub color_palette: Vec<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Point::new(7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: Point::new(7.0, -3.0),
            underlayer_color: Color::Rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![Color::from("green"), Color::Rgb(255, 160, 0), Color::from("red")],
        }
    }
}

pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Draw every non-empty route and every stop served by a bus.
    ///
    /// Layers, bottom to top: route lines, route labels, stop symbols,
    /// stop labels. Buses and stops are drawn in name order.
    pub fn render(&self, catalogue: &TransportCatalogue) -> Document {
        let mut buses: Vec<&Bus> = catalogue
            .buses()
            .iter()
            .filter(|bus| !bus.stops.is_empty())
            .collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        let stops: BTreeMap<&StopName, &Stop> = buses
            .iter()
            .flat_map(|bus| bus.stops.iter())
            .filter_map(|&id| catalogue.stop(id))
            .map(|stop| (&stop.name, stop))
            .collect();

        let locations: Vec<geo::Point> = stops.values().map(|stop| stop.location).collect();
        let projector = SphereProjector::new(
            &locations,
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        let mut doc = Document::new();
        for (index, bus) in buses.iter().enumerate() {
            doc.add(self.route_line(catalogue, bus, index, &projector));
        }
        for (index, bus) in buses.iter().enumerate() {
            for label in self.route_labels(catalogue, bus, index, &projector) {
                doc.add(label);
            }
        }
        for stop in stops.values() {
            doc.add(
                Circle::new(projector.project(stop.location), self.settings.stop_radius).fill("white"),
            );
        }
        for stop in stops.values() {
            let [underlayer, label] = self.stop_label(stop, &projector);
            doc.add(underlayer);
            doc.add(label);
        }

        log::debug!("Rendered map with {} routes and {} stops", buses.len(), stops.len());
        doc
    }

    fn palette_color(&self, index: usize) -> Color {
        match self.settings.color_palette.len() {
            0 => Color::None,
            len => self.settings.color_palette[index % len].clone(),
        }
    }

    fn route_line(&self, catalogue: &TransportCatalogue, bus: &Bus, index: usize, projector: &SphereProjector) -> Polyline {
        let mut line = Polyline::new()
            .fill(Color::None)
            .stroke(self.palette_color(index))
            .stroke_width(self.settings.line_width)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round);

        let forward = bus.stops.iter();
        // Out-and-back lines return without repeating the turnaround stop
        let back = bus.stops.iter().rev().skip(1).filter(|_| !bus.is_roundtrip);
        for &id in forward.chain(back) {
            if let Some(stop) = catalogue.stop(id) {
                line = line.point(projector.project(stop.location));
            }
        }
        line
    }

    fn route_labels(&self, catalogue: &TransportCatalogue, bus: &Bus, index: usize, projector: &SphereProjector) -> Vec<Text> {
        let (Some(&first), Some(&last)) = (bus.stops.first(), bus.stops.last()) else {
            return Vec::new();
        };

        let mut ends = vec![first];
        if !bus.is_roundtrip && first != last {
            ends.push(last);
        }

        ends.into_iter()
            .filter_map(|id| catalogue.stop(id))
            .flat_map(|stop| {
                let base = Text::new(projector.project(stop.location), bus.name.as_str())
                    .offset(self.settings.bus_label_offset)
                    .font_size(self.settings.bus_label_font_size)
                    .font_family(FONT_FAMILY)
                    .font_weight("bold");
                [
                    self.underlayer(base.clone()),
                    base.fill(self.palette_color(index)),
                ]
            })
            .collect()
    }

    fn stop_label(&self, stop: &Stop, projector: &SphereProjector) -> [Text; 2] {
        let base = Text::new(projector.project(stop.location), stop.name.as_str())
            .offset(self.settings.stop_label_offset)
            .font_size(self.settings.stop_label_font_size)
            .font_family(FONT_FAMILY);
        [self.underlayer(base.clone()), base.fill("black")]
    }

    fn underlayer(&self, text: Text) -> Text {
        text.fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round)
    }
}
