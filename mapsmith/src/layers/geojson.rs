use serde_json::{json, Value};

/// A GeoJSON `FeatureCollection` overlay.
///
/// Styling follows the same convention as the feature properties themselves:
/// `fillColor`, `strokeColor` and `weight` read from each feature with the
/// defaults below as fallback. Tooltips and popups are assembled from the
/// named property fields.
pub struct GeoJsonLayer {
    pub data: Value,
    pub tooltip_fields: Vec<String>,
    pub popup_fields: Vec<String>,
    pub default_fill: String,
    pub default_stroke: String,
    pub default_weight: u32,
    pub fill_opacity: f64,
    /// Highlight features on hover.
    pub highlight: bool,
}

impl GeoJsonLayer {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            tooltip_fields: Vec::new(),
            popup_fields: Vec::new(),
            default_fill: "#0000ff".to_owned(),
            default_stroke: "#0000ff".to_owned(),
            default_weight: 3,
            fill_opacity: 0.5,
            highlight: false,
        }
    }

    pub fn with_tooltip_fields(mut self, fields: &[&str]) -> Self {
        self.tooltip_fields = fields.iter().map(|f| (*f).to_owned()).collect();
        self
    }

    pub fn with_popup_fields(mut self, fields: &[&str]) -> Self {
        self.popup_fields = fields.iter().map(|f| (*f).to_owned()).collect();
        self
    }

    pub fn with_highlight(mut self) -> Self {
        self.highlight = true;
        self
    }

    pub(crate) fn payload(&self) -> Value {
        json!({
            "data": self.data,
            "tooltip_fields": self.tooltip_fields,
            "popup_fields": self.popup_fields,
            "default_fill": self.default_fill,
            "default_stroke": self.default_stroke,
            "default_weight": self.default_weight,
            "fill_opacity": self.fill_opacity,
            "highlight": self.highlight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_keeps_the_feature_collection_intact() {
        let data = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "name": "Hyde Park" },
                "geometry": { "type": "Point", "coordinates": [-0.16, 51.5] }
            }]
        });
        let layer = GeoJsonLayer::new(data.clone()).with_tooltip_fields(&["name"]);
        let payload = layer.payload();
        assert_eq!(payload["data"], data);
        assert_eq!(payload["tooltip_fields"][0], "name");
    }
}
