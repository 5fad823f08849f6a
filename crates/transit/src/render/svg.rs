//! Minimal SVG document model.
//!
//! Only what the network map needs: circles, polylines and text, each with
//! optional fill/stroke presentation attributes.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Named(name) => write!(f, "{}", name),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineCap::Butt => "butt",
            StrokeLineCap::Round => "round",
            StrokeLineCap::Square => "square",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrokeLineJoin::Arcs => "arcs",
            StrokeLineJoin::Bevel => "bevel",
            StrokeLineJoin::Miter => "miter",
            StrokeLineJoin::MiterClip => "miter-clip",
            StrokeLineJoin::Round => "round",
        })
    }
}

// ============================================================================
// Presentation attributes
// ============================================================================

/// Fill and stroke attributes shared by every shape
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathProps {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    line_cap: Option<StrokeLineCap>,
    line_join: Option<StrokeLineJoin>,
}

impl fmt::Display for PathProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{}\"", fill)?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{}\"", stroke)?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{}\"", width)?;
        }
        if let Some(cap) = self.line_cap {
            write!(f, " stroke-linecap=\"{}\"", cap)?;
        }
        if let Some(join) = self.line_join {
            write!(f, " stroke-linejoin=\"{}\"", join)?;
        }
        Ok(())
    }
}

/// Builder-style setters for anything carrying [`PathProps`]
pub trait Styled: Sized {
    fn props_mut(&mut self) -> &mut PathProps;

    fn fill(mut self, color: impl Into<Color>) -> Self {
        self.props_mut().fill = Some(color.into());
        self
    }

    fn stroke(mut self, color: impl Into<Color>) -> Self {
        self.props_mut().stroke = Some(color.into());
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.props_mut().stroke_width = Some(width);
        self
    }

    fn line_cap(mut self, cap: StrokeLineCap) -> Self {
        self.props_mut().line_cap = Some(cap);
        self
    }

    fn line_join(mut self, join: StrokeLineJoin) -> Self {
        self.props_mut().line_join = Some(join);
        self
    }
}

// ============================================================================
// Shapes
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    props: PathProps,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            props: PathProps::default(),
        }
    }
}

impl Styled for Circle {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
            self.center.x, self.center.y, self.radius, self.props
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    props: PathProps,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }
}

impl Styled for Polyline {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<polyline points=\"")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{},{}", p.x, p.y)?;
        }
        write!(f, "\"{}/>", self.props)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    pub position: Point,
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data: String,
    props: PathProps,
}

impl Text {
    pub fn new(position: Point, data: impl Into<String>) -> Self {
        Self {
            position,
            font_size: 1,
            data: data.into(),
            ..Self::default()
        }
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }
}

impl Styled for Text {
    fn props_mut(&mut self) -> &mut PathProps {
        &mut self.props
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if let Some(family) = &self.font_family {
            write!(f, " font-family=\"{}\"", escape(family))?;
        }
        if let Some(weight) = &self.font_weight {
            write!(f, " font-weight=\"{}\"", escape(weight))?;
        }
        write!(f, "{}>{}</text>", self.props, escape(&self.data))
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Document
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Element::Circle(circle)
    }
}

impl From<Polyline> for Element {
    fn from(polyline: Polyline) -> Self {
        Element::Polyline(polyline)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Circle(circle) => fmt::Display::fmt(circle, f),
            Element::Polyline(polyline) => fmt::Display::fmt(polyline, f),
            Element::Text(text) => fmt::Display::fmt(text, f),
        }
    }
}

/// Elements in paint order; later elements are drawn on top
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(f, "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">")?;
        for element in &self.elements {
            writeln!(f, "  {}", element)?;
        }
        write!(f, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::None.to_string(), "none");
        assert_eq!(Color::from("white").to_string(), "white");
        assert_eq!(Color::Rgb(255, 16, 12).to_string(), "rgb(255,16,12)");
        assert_eq!(Color::Rgba(255, 200, 23, 0.85).to_string(), "rgba(255,200,23,0.85)");
    }

    #[test]
    fn test_circle() {
        let circle = Circle::new(Point::new(20.0, 20.5), 5.0).fill("white");
        assert_eq!(circle.to_string(), r#"<circle cx="20" cy="20.5" r="5" fill="white"/>"#);
    }

    #[test]
    fn test_polyline() {
        let line = Polyline::new()
            .point(Point::new(1.0, 2.0))
            .point(Point::new(3.5, 4.0))
            .fill(Color::None)
            .stroke(Color::Rgb(0, 128, 0))
            .stroke_width(14.0)
            .line_cap(StrokeLineCap::Round)
            .line_join(StrokeLineJoin::Round);

        assert_eq!(
            line.to_string(),
            r#"<polyline points="1,2 3.5,4" fill="none" stroke="rgb(0,128,0)" stroke-width="14" stroke-linecap="round" stroke-linejoin="round"/>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let text = Text::new(Point::new(1.0, 2.0), "Tom & \"Jerry\" <3")
            .offset(Point::new(7.0, -3.0))
            .font_size(20)
            .font_family("Verdana")
            .fill("black");

        assert_eq!(
            text.to_string(),
            r#"<text x="1" y="2" dx="7" dy="-3" font-size="20" font-family="Verdana" fill="black">Tom &amp; &quot;Jerry&quot; &lt;3</text>"#
        );
    }

    #[test]
    fn test_document_layout() {
        let mut doc = Document::new();
        doc.add(Circle::new(Point::new(0.0, 0.0), 1.0));

        let rendered = doc.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8" ?>"#);
        assert_eq!(lines[2], r#"  <circle cx="0" cy="0" r="1"/>"#);
        assert_eq!(lines[3], "</svg>");
    }
}
