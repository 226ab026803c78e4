//! The map document builder.

use std::path::Path;

use serde_json::{json, Value};

use crate::controls::{Anchor, Control};
use crate::layers::{
    Choropleth, GeoJsonLayer, Heatmap, ImageOverlay, Marker, Shape, TimedGeoJson,
};
use crate::panel::InsightPanel;
use crate::position::{lat_lng, Position};
use crate::sources::TileSource;
use crate::{render, writer, Error};

/// One layer, reduced to the name of its script template and the payload the
/// template renders with.
pub(crate) struct LayerScript {
    /// JavaScript variable the layer is bound to.
    pub var: String,
    /// Name listed in the layer control.
    pub name: String,
    /// Template this layer renders with.
    pub kind: &'static str,
    /// Base layers are exclusive entries in the layer control, everything
    /// else is a togglable overlay.
    pub base: bool,
    pub payload: Value,
}

/// The one map being built. Accumulates layers and controls; consumed by
/// [`finalize`](Self::finalize).
///
/// Layers can only enter the document through the `add_*` methods, and the
/// layer control is derived from exactly that set when the builder is
/// finalized, so a layer can neither be forgotten by the control nor added
/// after it.
pub struct Map {
    title: String,
    center: Position,
    zoom: u8,
    layers: Vec<LayerScript>,
    controls: Vec<Control>,
    panel: Option<InsightPanel>,
    layer_control_anchor: Anchor,
}

impl Map {
    pub fn new(center: Position, zoom: u8) -> Self {
        Self {
            title: "Interactive Map".to_owned(),
            center,
            zoom,
            layers: Vec::new(),
            controls: Vec::new(),
            panel: None,
            layer_control_anchor: Anchor::BottomRight,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_layer_control_anchor(&mut self, anchor: Anchor) {
        self.layer_control_anchor = anchor;
    }

    fn push_layer(&mut self, name: &str, kind: &'static str, base: bool, mut payload: Value) {
        let var = format!("layer_{}", self.layers.len());
        payload["var"] = json!(var);
        payload["name"] = json!(name);
        log::debug!("Adding layer '{name}' as {var} ({kind})");
        self.layers.push(LayerScript {
            var,
            name: name.to_owned(),
            kind,
            base,
            payload,
        });
    }

    /// Add a base tile layer. The first one added is the initially visible
    /// style; the rest are switchable through the layer control.
    pub fn add_tile_layer(&mut self, source: &dyn TileSource, name: &str) {
        let visible = !self.layers.iter().any(|layer| layer.base);
        let payload = json!({
            "url": source.tile_url(),
            "attribution": source.attribution().html,
            "max_zoom": source.max_zoom(),
            "opacity": 1.0,
            "visible": visible,
        });
        self.push_layer(name, "tiles", true, payload);
    }

    /// Add a semi-transparent tile overlay, e.g. a weather layer.
    pub fn add_tile_overlay(&mut self, source: &dyn TileSource, name: &str, opacity: f64) {
        let payload = json!({
            "url": source.tile_url(),
            "attribution": source.attribution().html,
            "max_zoom": source.max_zoom(),
            "opacity": opacity,
            "visible": true,
        });
        self.push_layer(name, "tiles", false, payload);
    }

    /// Add a named group of markers.
    pub fn add_markers(&mut self, name: &str, markers: &[Marker]) {
        let payload = json!({
            "markers": markers.iter().map(Marker::payload).collect::<Vec<_>>(),
        });
        self.push_layer(name, "markers", false, payload);
    }

    /// Add a named group of circles and polygons.
    pub fn add_shapes(&mut self, name: &str, shapes: &[Shape]) {
        let mut circles = Vec::new();
        let mut polygons = Vec::new();
        for shape in shapes {
            let (group, payload) = shape.payload();
            match group {
                "circles" => circles.push(payload),
                _ => polygons.push(payload),
            }
        }
        let payload = json!({ "circles": circles, "polygons": polygons });
        self.push_layer(name, "shapes", false, payload);
    }

    pub fn add_geojson(&mut self, name: &str, layer: &GeoJsonLayer) {
        self.push_layer(name, "geojson", false, layer.payload());
    }

    pub fn add_choropleth(&mut self, name: &str, choropleth: &Choropleth) {
        self.push_layer(name, "choropleth", false, choropleth.payload());
    }

    pub fn add_heatmap(&mut self, name: &str, heatmap: &Heatmap) {
        self.push_layer(name, "heatmap", false, heatmap.payload());
    }

    /// Add markers grouped by a clustering plugin which expands on zoom.
    pub fn add_marker_cluster(&mut self, name: &str, markers: &[Marker]) {
        let payload = json!({
            "markers": markers.iter().map(Marker::payload).collect::<Vec<_>>(),
        });
        self.push_layer(name, "cluster", false, payload);
    }

    pub fn add_timed_geojson(&mut self, name: &str, layer: &TimedGeoJson) {
        self.push_layer(name, "timed", false, layer.payload());
    }

    pub fn add_image_overlay(&mut self, name: &str, overlay: &ImageOverlay) {
        self.push_layer(name, "image", false, overlay.payload());
    }

    pub fn add_control(&mut self, control: Control) {
        self.controls.push(control);
    }

    pub fn set_insight_panel(&mut self, panel: InsightPanel) {
        self.panel = Some(panel);
    }

    /// Consume the builder and produce the finished document, with the layer
    /// control listing exactly the layers that were added.
    pub fn finalize(self) -> Document {
        log::debug!(
            "Finalizing document with {} layers and {} controls",
            self.layers.len(),
            self.controls.len()
        );
        Document {
            title: self.title,
            center: lat_lng(self.center),
            zoom: self.zoom,
            layers: self.layers,
            controls: self.controls,
            panel: self.panel,
            layer_control_anchor: self.layer_control_anchor,
        }
    }
}

/// A finished map document, ready to render or save.
pub struct Document {
    pub(crate) title: String,
    pub(crate) center: [f64; 2],
    pub(crate) zoom: u8,
    pub(crate) layers: Vec<LayerScript>,
    pub(crate) controls: Vec<Control>,
    pub(crate) panel: Option<InsightPanel>,
    pub(crate) layer_control_anchor: Anchor,
}

impl Document {
    /// Names of all layers, in insertion order. The layer control lists the
    /// same set.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name.as_str()).collect()
    }

    /// Render the document to a standalone HTML page.
    pub fn render(&self) -> Result<String, Error> {
        render::render(self)
    }

    /// Render and write the document, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let html = self.render()?;
        writer::write(&html, path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;
    use crate::sources::{CartoDbPositron, OpenStreetMap, OpenWeatherMap};

    fn base_map() -> Map {
        Map::new(lat_lon(51.5074, -0.1278), 7)
    }

    #[test]
    fn first_base_layer_is_visible_later_ones_are_not() {
        let mut map = base_map();
        map.add_tile_layer(&OpenStreetMap, "OpenStreetMap");
        map.add_tile_layer(&CartoDbPositron, "Light Mode");
        let document = map.finalize();
        assert_eq!(document.layers[0].payload["visible"], true);
        assert_eq!(document.layers[1].payload["visible"], false);
    }

    #[test]
    fn tile_overlays_stay_visible() {
        let mut map = base_map();
        map.add_tile_layer(&OpenStreetMap, "OpenStreetMap");
        map.add_tile_overlay(&OpenWeatherMap::Clouds, "Clouds", 0.6);
        let document = map.finalize();
        assert!(!document.layers[1].base);
        assert_eq!(document.layers[1].payload["visible"], true);
        assert_eq!(document.layers[1].payload["opacity"], 0.6);
    }

    #[test]
    fn layer_names_follow_insertion_order() {
        let mut map = base_map();
        map.add_tile_layer(&OpenStreetMap, "OpenStreetMap");
        map.add_markers("Landmarks", &[]);
        map.add_heatmap("Heatmap", &crate::layers::Heatmap::new(Vec::new()));
        let document = map.finalize();
        assert_eq!(
            document.layer_names(),
            vec!["OpenStreetMap", "Landmarks", "Heatmap"]
        );
    }

    #[test]
    fn layer_vars_are_unique() {
        let mut map = base_map();
        map.add_markers("A", &[]);
        map.add_markers("B", &[]);
        let document = map.finalize();
        assert_ne!(document.layers[0].var, document.layers[1].var);
    }
}
