use serde_json::{json, Value};

use crate::position::{lat_lng, Position};

/// Weighted point cloud rendered as a heat gradient.
pub struct Heatmap {
    /// `(position, intensity)` pairs, intensity in `0.0..=1.0`.
    pub points: Vec<(Position, f64)>,
    pub radius: u32,
    pub blur: u32,
}

impl Heatmap {
    pub fn new(points: Vec<(Position, f64)>) -> Self {
        Self {
            points,
            radius: 25,
            blur: 15,
        }
    }

    pub(crate) fn payload(&self) -> Value {
        let points: Vec<[f64; 3]> = self
            .points
            .iter()
            .map(|(position, intensity)| {
                let [lat, lng] = lat_lng(*position);
                [lat, lng, *intensity]
            })
            .collect();
        json!({
            "points": points,
            "radius": self.radius,
            "blur": self.blur,
        })
    }
}
