use serde_json::{json, Value};

use crate::position::{lat_lng, Position};

/// A georeferenced image stretched between two corners, e.g. a scan of a
/// historical map.
pub struct ImageOverlay {
    pub url: String,
    /// South-west and north-east corners.
    pub bounds: (Position, Position),
    pub opacity: f64,
}

impl ImageOverlay {
    pub(crate) fn payload(&self) -> Value {
        json!({
            "url": self.url,
            "bounds": [lat_lng(self.bounds.0), lat_lng(self.bounds.1)],
            "opacity": self.opacity,
        })
    }
}
