use serde_json::{json, Value};

/// Linear color ramp between a list of hex color stops.
pub struct ColorScale {
    colors: Vec<[u8; 3]>,
}

impl ColorScale {
    /// The yellow-green-blue ramp commonly used for intensity data.
    pub fn yl_gn_bu() -> Self {
        Self::from_hex(&[
            "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8",
            "#253494", "#081d58",
        ])
    }

    /// Build a scale from `#rrggbb` stops. Malformed stops are skipped.
    pub fn from_hex(stops: &[&str]) -> Self {
        let colors = stops.iter().filter_map(|stop| parse_hex(stop)).collect();
        Self { colors }
    }

    /// Color for a value normalized to `0.0..=1.0`. Out-of-range values clamp.
    pub fn color(&self, t: f64) -> String {
        match self.colors.as_slice() {
            [] => return "#cccccc".to_owned(),
            [only] => return format!("#{:02x}{:02x}{:02x}", only[0], only[1], only[2]),
            _ => {}
        }
        let t = t.clamp(0.0, 1.0);
        let segments = self.colors.len() - 1;
        let scaled = t * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let fraction = scaled - index as f64;

        let low = self.colors[index];
        let high = self.colors[index + 1];
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * fraction) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            mix(low[0], high[0]),
            mix(low[1], high[1]),
            mix(low[2], high[2])
        )
    }
}

fn parse_hex(stop: &str) -> Option<[u8; 3]> {
    let hex = stop.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// A region-shaded overlay encoding a data value per region via color
/// intensity, with a legend.
///
/// Regions are GeoJSON features whose `id` matches the first element of a data
/// row. Regions without a row are painted grey.
pub struct Choropleth {
    pub regions: Value,
    pub rows: Vec<(String, f64)>,
    pub legend_label: String,
    pub scale: ColorScale,
    pub fill_opacity: f64,
    pub line_opacity: f64,
}

impl Choropleth {
    pub fn new(regions: Value, rows: Vec<(String, f64)>, legend_label: impl Into<String>) -> Self {
        Self {
            regions,
            rows,
            legend_label: legend_label.into(),
            scale: ColorScale::yl_gn_bu(),
            fill_opacity: 0.7,
            line_opacity: 0.2,
        }
    }

    fn bounds(&self) -> (f64, f64) {
        let min = self.rows.iter().map(|r| r.1).fold(f64::INFINITY, f64::min);
        let max = self
            .rows
            .iter()
            .map(|r| r.1)
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    fn normalized(&self, value: f64) -> f64 {
        let (min, max) = self.bounds();
        if max > min {
            (value - min) / (max - min)
        } else {
            0.0
        }
    }

    /// Regions with the fill color and value baked into their properties, so
    /// the emitted script needs no color logic of its own.
    pub(crate) fn payload(&self) -> Value {
        let mut regions = self.regions.clone();
        if let Some(features) = regions["features"].as_array_mut() {
            for feature in features {
                let row = feature["id"]
                    .as_str()
                    .and_then(|id| self.rows.iter().find(|(key, _)| key == id));
                match row {
                    Some((_, value)) => {
                        feature["properties"]["__fill"] =
                            json!(self.scale.color(self.normalized(*value)));
                        feature["properties"]["__value"] = json!(value);
                    }
                    None => {
                        feature["properties"]["__fill"] = json!("#cccccc");
                        feature["properties"]["__value"] = Value::Null;
                    }
                }
            }
        }

        let (min, max) = self.bounds();
        let legend_stops: Vec<Value> = (0..5)
            .map(|i| {
                let t = f64::from(i) / 4.0;
                json!({
                    "color": self.scale.color(t),
                    "value": (min + (max - min) * t).round(),
                })
            })
            .collect();

        json!({
            "geojson": regions,
            "legend_label": self.legend_label,
            "stops": legend_stops,
            "fill_opacity": self.fill_opacity,
            "line_opacity": self.line_opacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_endpoints_hit_the_first_and_last_stop() {
        let scale = ColorScale::yl_gn_bu();
        assert_eq!(scale.color(0.0), "#ffffd9");
        assert_eq!(scale.color(1.0), "#081d58");
        assert_eq!(scale.color(-1.0), "#ffffd9");
        assert_eq!(scale.color(2.0), "#081d58");
    }

    #[test]
    fn scale_interpolates_between_stops() {
        let scale = ColorScale::from_hex(&["#000000", "#ff0000"]);
        assert_eq!(scale.color(0.5), "#7f0000");
    }

    #[test]
    fn degenerate_scales_still_produce_a_color() {
        assert_eq!(ColorScale::from_hex(&[]).color(0.5), "#cccccc");
        assert_eq!(ColorScale::from_hex(&["#102030"]).color(0.9), "#102030");
    }

    fn regions() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "BoroughA",
                    "properties": { "name": "Mock Borough A" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0]]] }
                },
                {
                    "type": "Feature",
                    "id": "Unknown",
                    "properties": { "name": "No data" },
                    "geometry": { "type": "Polygon", "coordinates": [[[1.0, 1.0]]] }
                }
            ]
        })
    }

    #[test]
    fn regions_get_fill_colors_baked_in() {
        let choropleth = Choropleth::new(
            regions(),
            vec![("BoroughA".to_owned(), 80000.0), ("BoroughB".to_owned(), 120000.0)],
            "Population",
        );
        let payload = choropleth.payload();
        let features = payload["geojson"]["features"].as_array().unwrap();
        // Lowest value maps to the lowest stop.
        assert_eq!(features[0]["properties"]["__fill"], "#ffffd9");
        assert_eq!(features[0]["properties"]["__value"], 80000.0);
        // Regions without data are grey.
        assert_eq!(features[1]["properties"]["__fill"], "#cccccc");
    }

    #[test]
    fn legend_spans_the_data_range() {
        let choropleth = Choropleth::new(
            regions(),
            vec![("BoroughA".to_owned(), 100.0), ("BoroughB".to_owned(), 200.0)],
            "Value",
        );
        let payload = choropleth.payload();
        let stops = payload["stops"].as_array().unwrap();
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0]["value"], 100.0);
        assert_eq!(stops[4]["value"], 200.0);
    }
}
