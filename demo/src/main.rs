//! Generates a feature-packed interactive map of London and opens it in the
//! default browser.

mod places;
mod sample_data;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mapsmith::layers::{
    Choropleth, Circle, GeoJsonLayer, Heatmap, Icon, ImageOverlay, Marker, Polygon, Shape,
    TimedGeoJson,
};
use mapsmith::sources::{
    CartoDbDarkMatter, CartoDbPositron, OpenStreetMap, OpenWeatherMap, StamenTerrain, StamenToner,
};
use mapsmith::{lat_lon, Anchor, Control, InsightPanel, Map};

const OUTPUT_FILE: &str = "interactive_map.html";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    env_logger::init();

    let map = build_map();
    let document = map.finalize();

    document
        .save(OUTPUT_FILE)
        .with_context(|| format!("could not write {OUTPUT_FILE}"))?;
    log::info!("map saved to {OUTPUT_FILE}");

    if let Err(err) = webbrowser::open(OUTPUT_FILE) {
        log::warn!("could not open the browser: {err}");
    }
    Ok(())
}

fn build_map() -> Map {
    let mut rng = StdRng::from_os_rng();
    let mut map = Map::new(lat_lon(51.5074, -0.1278), 7);
    map.set_title("Interactive Map of London");

    log::info!("adding base tile layers");
    map.add_tile_layer(&OpenStreetMap, "OpenStreetMap");
    map.add_tile_layer(&CartoDbPositron, "Light Mode");
    map.add_tile_layer(&CartoDbDarkMatter, "Dark Mode");
    map.add_tile_layer(&StamenToner, "Stamen Toner");
    map.add_tile_layer(&StamenTerrain, "Stamen Terrain");

    log::info!("adding landmark markers");
    map.add_markers(
        "Landmarks",
        &[
            Marker::new(places::london_eye())
                .with_popup("<b>London Eye</b><br>A giant Ferris wheel.")
                .with_tooltip("Click for info")
                .with_icon(Icon::Named {
                    color: "red".to_owned(),
                    icon: "info-sign".to_owned(),
                    prefix: "glyphicon".to_owned(),
                }),
            Marker::new(places::british_museum())
                .with_popup("<b>British Museum</b><br>Human history and culture.")
                .with_tooltip("British Museum")
                .with_icon(Icon::Named {
                    color: "blue".to_owned(),
                    icon: "university".to_owned(),
                    prefix: "fa".to_owned(),
                }),
            Marker::new(places::buckingham_palace())
                .with_popup("<b>Buckingham Palace</b>")
                .with_tooltip("Buckingham Palace")
                .with_icon(Icon::Image {
                    url: "https://leafletjs.com/examples/custom-icons/leaf-green.png".to_owned(),
                    size: [38, 95],
                    anchor: [22, 94],
                    popup_anchor: [-3, -76],
                }),
        ],
    );

    log::info!("adding drawn shapes");
    map.add_shapes(
        "Area Features",
        &[
            Shape::Circle(Circle {
                center: places::financial_district(),
                radius: 500,
                color: "crimson".to_owned(),
                fill_color: "crimson".to_owned(),
                fill_opacity: 0.2,
                popup: Some("Financial District (Approx. Area)".to_owned()),
            }),
            Shape::Polygon(Polygon {
                ring: vec![
                    lat_lon(51.5090, -0.1000),
                    lat_lon(51.5090, -0.0950),
                    lat_lon(51.5060, -0.0950),
                    lat_lon(51.5060, -0.1000),
                ],
                color: "green".to_owned(),
                weight: 3,
                fill_color: "lightgreen".to_owned(),
                fill_opacity: 0.6,
                popup: Some("Small Park Area".to_owned()),
            }),
        ],
    );

    log::info!("adding GeoJSON overlays");
    map.add_geojson(
        "Sample GeoJSON Data",
        &GeoJsonLayer::new(sample_data::sample_geojson())
            .with_tooltip_fields(&["name", "description"])
            .with_highlight(),
    );
    map.add_geojson(
        "Clickable Regions",
        &GeoJsonLayer::new(sample_data::clickable_regions())
            .with_tooltip_fields(&["name"])
            .with_popup_fields(&["name", "info", "type"])
            .with_highlight(),
    );

    log::info!("adding choropleth");
    map.add_choropleth(
        "Population Density (Mock)",
        &Choropleth::new(
            sample_data::borough_regions(),
            sample_data::borough_population(),
            "Mock Population",
        ),
    );

    log::info!("adding randomized layers");
    map.add_heatmap(
        "Global Heatmap (Simulated)",
        &Heatmap::new(sample_data::heatmap_points(&mut rng)),
    );
    map.add_marker_cluster(
        "Clustered Locations (Simulated)",
        &sample_data::cluster_markers(&mut rng),
    );
    map.add_markers(
        "Random Data Points",
        &sample_data::random_markers(&mut rng),
    );

    log::info!("adding temporal layer");
    map.add_timed_geojson(
        "Temporal Data (Monthly)",
        &TimedGeoJson::new(sample_data::timestamped_features()),
    );

    log::info!("adding image overlay");
    map.add_image_overlay(
        "1843 London Map Overlay",
        &ImageOverlay {
            url: "https://upload.wikimedia.org/wikipedia/commons/3/3e/London_1843_map.jpg"
                .to_owned(),
            bounds: (lat_lon(51.4800, -0.2000), lat_lon(51.5400, -0.0500)),
            opacity: 0.6,
        },
    );

    log::info!("adding weather overlays");
    map.add_tile_overlay(&OpenWeatherMap::Temperature, "Temperature (OWM)", 0.6);
    map.add_tile_overlay(&OpenWeatherMap::Precipitation, "Precipitation (OWM)", 0.6);
    map.add_tile_overlay(&OpenWeatherMap::Clouds, "Clouds (OWM)", 0.6);
    map.add_tile_overlay(&OpenWeatherMap::WindSpeed, "Wind Speed (OWM)", 0.6);

    log::info!("adding controls");
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
    map.set_layer_control_anchor(Anchor::BottomRight);

    map.set_insight_panel(InsightPanel::new());
    map
}
