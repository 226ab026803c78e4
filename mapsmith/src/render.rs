//! Rendering of a finished document into a standalone HTML page.
//!
//! Every layer, control and the insight panel is a small handlebars template
//! rendered over a typed JSON payload; the page template then stitches the
//! snippets together. Dynamic values are injected through the `json` helper,
//! never concatenated as raw strings.

use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde_json::{json, Value};

use crate::map::Document;
use crate::Error;

/// Serialize a payload value straight into the emitted JavaScript, so quoting
/// and escaping always hold.
fn json_helper(
    h: &Helper<'_>,
    _: &Handlebars<'_>,
    _: &Context,
    _: &mut RenderContext<'_, '_>,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).map_or(Value::Null, |p| p.value().clone());
    let rendered = serde_json::to_string(&value).unwrap_or_else(|_| "null".to_owned());
    out.write(&rendered)?;
    Ok(())
}

fn templates() -> Result<Handlebars<'static>, Error> {
    let mut handlebars = Handlebars::new();
    handlebars.register_helper("json", Box::new(json_helper));
    for (name, template) in [
        ("page", include_str!("../templates/page.html.hbr")),
        ("tiles", include_str!("../templates/tiles.js.hbr")),
        ("markers", include_str!("../templates/markers.js.hbr")),
        ("shapes", include_str!("../templates/shapes.js.hbr")),
        ("geojson", include_str!("../templates/geojson.js.hbr")),
        ("choropleth", include_str!("../templates/choropleth.js.hbr")),
        ("heatmap", include_str!("../templates/heatmap.js.hbr")),
        ("cluster", include_str!("../templates/cluster.js.hbr")),
        ("timed", include_str!("../templates/timed.js.hbr")),
        ("image", include_str!("../templates/image.js.hbr")),
        ("layer_control", include_str!("../templates/layer_control.js.hbr")),
        ("fullscreen", include_str!("../templates/fullscreen.js.hbr")),
        ("minimap", include_str!("../templates/minimap.js.hbr")),
        ("draw", include_str!("../templates/draw.js.hbr")),
        ("geocoder", include_str!("../templates/geocoder.js.hbr")),
        ("locate", include_str!("../templates/locate.js.hbr")),
        (
            "mouse_position",
            include_str!("../templates/mouse_position.js.hbr"),
        ),
        ("measure", include_str!("../templates/measure.js.hbr")),
        (
            "insight_panel",
            include_str!("../templates/insight_panel.js.hbr"),
        ),
    ] {
        handlebars
            .register_template_string(name, template)
            .map_err(Box::new)?;
    }
    Ok(handlebars)
}

pub(crate) fn render(document: &Document) -> Result<String, Error> {
    let handlebars = templates()?;

    let mut layers = Vec::with_capacity(document.layers.len());
    for layer in &document.layers {
        layers.push(handlebars.render(layer.kind, &layer.payload)?);
    }

    let mut controls = Vec::with_capacity(document.controls.len());
    for control in &document.controls {
        controls.push(handlebars.render(control.kind(), &control.payload())?);
    }

    let entry = |layer: &crate::map::LayerScript| json!({ "var": layer.var, "name": layer.name });
    let base: Vec<Value> = document
        .layers
        .iter()
        .filter(|layer| layer.base)
        .map(entry)
        .collect();
    let overlays: Vec<Value> = document
        .layers
        .iter()
        .filter(|layer| !layer.base)
        .map(entry)
        .collect();
    let layer_control = handlebars.render(
        "layer_control",
        &json!({
            "anchor": document.layer_control_anchor.leaflet(),
            "base": base,
            "overlays": overlays,
        }),
    )?;

    let panel = match &document.panel {
        Some(panel) => handlebars.render("insight_panel", &panel.payload())?,
        None => String::new(),
    };

    handlebars
        .render(
            "page",
            &json!({
                "title": document.title,
                "center": document.center,
                "zoom": document.zoom,
                "layers": layers,
                "controls": controls,
                "layer_control": layer_control,
                "panel": panel,
            }),
        )
        .map_err(Error::from)
}
