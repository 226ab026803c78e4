use serde_json::{json, Value};

use crate::position::{lat_lng, Position};

/// A circle with a radius given in screen pixels.
pub struct Circle {
    pub center: Position,
    pub radius: u32,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub popup: Option<String>,
}

/// A filled polygon. The ring does not need to repeat the first vertex; the
/// viewer closes it.
pub struct Polygon {
    pub ring: Vec<Position>,
    pub color: String,
    pub weight: u32,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub popup: Option<String>,
}

/// A geographic shape with a style and an optional popup.
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub(crate) fn payload(&self) -> (&'static str, Value) {
        match self {
            Self::Circle(circle) => (
                "circles",
                json!({
                    "center": lat_lng(circle.center),
                    "radius": circle.radius,
                    "color": circle.color,
                    "fill_color": circle.fill_color,
                    "fill_opacity": circle.fill_opacity,
                    "popup": circle.popup,
                }),
            ),
            Self::Polygon(polygon) => (
                "polygons",
                json!({
                    "ring": polygon.ring.iter().map(|p| lat_lng(*p)).collect::<Vec<_>>(),
                    "color": polygon.color,
                    "weight": polygon.weight,
                    "fill_color": polygon.fill_color,
                    "fill_opacity": polygon.fill_opacity,
                    "popup": polygon.popup,
                }),
            ),
        }
    }
}
