//! Renders a document exercising every layer kind and inspects the emitted
//! page, since the generated script only ever runs in a browser.

use serde_json::json;

use mapsmith::layers::{
    Choropleth, GeoJsonLayer, Heatmap, Icon, ImageOverlay, Marker, Polygon, Shape, TimedGeoJson,
};
use mapsmith::sources::{CartoDbPositron, OpenStreetMap, OpenWeatherMap};
use mapsmith::{lat_lon, Anchor, Control, InsightPanel, Map};

fn full_map() -> Map {
    let mut map = Map::new(lat_lon(51.5074, -0.1278), 7);
    map.add_tile_layer(&OpenStreetMap, "OpenStreetMap");
    map.add_tile_layer(&CartoDbPositron, "Light Mode");
    map.add_tile_overlay(&OpenWeatherMap::Temperature, "Temperature", 0.6);

    map.add_markers(
        "Landmarks",
        &[
            Marker::new(lat_lon(51.5033, -0.1196))
                .with_popup("<b>London Eye</b>")
                .with_tooltip("London Eye"),
            Marker::new(lat_lon(51.5194, -0.1269)).with_icon(Icon::Named {
                color: "red".to_owned(),
                icon: "info-sign".to_owned(),
                prefix: "glyphicon".to_owned(),
            }),
        ],
    );

    map.add_shapes(
        "Area Features",
        &[Shape::Polygon(Polygon {
            ring: vec![
                lat_lon(51.509, -0.10),
                lat_lon(51.509, -0.09),
                lat_lon(51.508, -0.09),
            ],
            color: "green".to_owned(),
            weight: 3,
            fill_color: "lightgreen".to_owned(),
            fill_opacity: 0.6,
            popup: Some("Small Park Area".to_owned()),
        })],
    );

    map.add_geojson(
        "Sample GeoJSON Data",
        &GeoJsonLayer::new(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "name": "Hyde Park", "description": "A large park" },
                "geometry": { "type": "Point", "coordinates": [-0.16, 51.5] }
            }]
        }))
        .with_tooltip_fields(&["name", "description"]),
    );

    map.add_choropleth(
        "Population Density",
        &Choropleth::new(
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "id": "BoroughA",
                    "properties": { "name": "Mock Borough A" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0]]] }
                }]
            }),
            vec![("BoroughA".to_owned(), 80000.0)],
            "Population",
        ),
    );

    map.add_heatmap("Heatmap", &Heatmap::new(vec![(lat_lon(51.50, -0.12), 0.5)]));
    map.add_marker_cluster(
        "Clustered Locations",
        &[Marker::new(lat_lon(51.50, -0.05)).with_tooltip("Clustered Point 1")],
    );
    map.add_timed_geojson(
        "Temporal Data",
        &TimedGeoJson::new(json!({ "type": "FeatureCollection", "features": [] })),
    );
    map.add_image_overlay(
        "Historical Map Overlay",
        &ImageOverlay {
            url: "https://example.com/old_map.jpg".to_owned(),
            bounds: (lat_lon(51.505, -0.14), lat_lon(51.52, -0.09)),
            opacity: 0.6,
        },
    );

    map.add_control(Control::Fullscreen {
        anchor: Anchor::TopLeft,
    });
    map.add_control(Control::MiniMap {
        anchor: Anchor::BottomRight,
        toggle_display: true,
    });
    map.add_control(Control::Draw {
        anchor: Anchor::BottomLeft,
        export: true,
        filename: "drawn_features.geojson".to_owned(),
    });
    map.add_control(Control::Geocoder {
        anchor: Anchor::TopLeft,
    });
    map.add_control(Control::Locate {
        anchor: Anchor::TopLeft,
    });
    map.add_control(Control::MousePosition {
        anchor: Anchor::BottomRight,
        prefix: "Coordinates: ".to_owned(),
        separator: " | ".to_owned(),
        num_digits: 4,
        empty_string: "LatLng".to_owned(),
    });
    map.add_control(Control::Measure {
        anchor: Anchor::BottomLeft,
        primary_length_unit: "meters".to_owned(),
        secondary_length_unit: "miles".to_owned(),
    });

    map.set_insight_panel(InsightPanel::new());
    map
}

#[test]
fn layer_control_lists_exactly_the_added_layers() {
    let document = full_map().finalize();
    let names = document
        .layer_names()
        .iter()
        .map(|n| (*n).to_owned())
        .collect::<Vec<_>>();
    let html = document.render().unwrap();

    for (index, name) in names.iter().enumerate() {
        let quoted = serde_json::to_string(name).unwrap();
        let entry = format!("[{quoted}] = layer_{index};");
        assert!(html.contains(&entry), "layer control misses {name}");
    }

    // No duplicates: each variable is registered with the control only once.
    for index in 0..names.len() {
        let suffix = format!("= layer_{index};");
        assert_eq!(html.matches(&suffix).count(), 1);
    }
}

#[test]
fn both_key_placeholders_are_emitted_even_when_empty() {
    let html = full_map().finalize().render().unwrap();
    assert!(html.contains("var OPENWEATHERMAP_API_KEY = \"\";"));
    assert!(html.contains("var AI_INSIGHT_API_KEY = \"\";"));
}

#[test]
fn missing_keys_short_circuit_before_any_network_call() {
    let html = full_map().finalize().render().unwrap();
    // Each fetch function bails out with the designated message first.
    let weather = html.find("function fetchWeather").unwrap();
    let weather_body = &html[weather..html[weather..].find("fetch(").unwrap() + weather];
    assert!(weather_body.contains("if (!OPENWEATHERMAP_API_KEY)"));
    assert!(weather_body.contains("Missing or invalid API key."));

    let insight = html.find("function fetchInsight").unwrap();
    let insight_body = &html[insight..html[insight..].find("fetch(").unwrap() + insight];
    assert!(insight_body.contains("if (!AI_INSIGHT_API_KEY)"));
    assert!(insight_body.contains("Missing or invalid API key."));
}

#[test]
fn route_analysis_requires_both_endpoints() {
    let html = full_map().finalize().render().unwrap();
    assert!(html.contains(r#"<button id="analyze-route" type="button" disabled>"#));
    assert!(html.contains("disabled = !(routeStart && routeEnd);"));
    assert!(html.contains("if (!(routeStart && routeEnd))"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let first = full_map().finalize().render().unwrap();
    let second = full_map().finalize().render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn document_saves_to_disk() {
    let path = std::env::temp_dir().join(format!("mapsmith-full-{}.html", std::process::id()));
    let document = full_map().finalize();
    document.save(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, document.render().unwrap());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn panel_is_absent_unless_requested() {
    let mut map = Map::new(lat_lon(0.0, 0.0), 2);
    map.add_tile_layer(&OpenStreetMap, "OpenStreetMap");
    let html = map.finalize().render().unwrap();
    assert!(!html.contains("OPENWEATHERMAP_API_KEY"));
}
