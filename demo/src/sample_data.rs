//! Fixed and randomized sample datasets for the example map.
//!
//! The GeoJSON snippets are simplified stand-ins for real datasets; only the
//! point layers below are randomized, everything else is constant between
//! runs.

use mapsmith::layers::{Icon, Marker};
use mapsmith::{lat_lon, Position};
use rand::Rng;
use serde_json::{json, Value};

/// Number of simulated heatmap points.
pub const HEAT_SAMPLES: usize = 100;
/// Number of simulated clustered locations.
pub const CLUSTER_SAMPLES: usize = 100;
/// Number of random data-driven markers.
pub const RANDOM_POINT_SAMPLES: usize = 50;

/// Latitude range the randomized layers are scattered over.
pub const LAT_RANGE: std::ops::Range<f64> = -60.0..80.0;
/// Longitude range the randomized layers are scattered over.
pub const LON_RANGE: std::ops::Range<f64> = -180.0..180.0;

pub fn sample_geojson() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "name": "Hyde Park",
                    "description": "A large park in Central London",
                    "fillColor": "#6a0dad",
                    "strokeColor": "#6a0dad"
                },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-0.18, 51.51], [-0.15, 51.51], [-0.15, 51.50],
                        [-0.18, 51.50], [-0.18, 51.51]
                    ]]
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "name": "Westminster Bridge",
                    "description": "Bridge over the River Thames",
                    "color": "#000000",
                    "weight": 5
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-0.122, 51.500], [-0.118, 51.501]]
                }
            }
        ]
    })
}

/// Two mock boroughs; a real dataset would be loaded from a detailed file.
pub fn borough_regions() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "BoroughA",
                "properties": { "name": "Mock Borough A" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-0.05, 51.52], [-0.03, 51.52], [-0.03, 51.50],
                        [-0.05, 51.50], [-0.05, 51.52]
                    ]]
                }
            },
            {
                "type": "Feature",
                "id": "BoroughB",
                "properties": { "name": "Mock Borough B" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-0.08, 51.53], [-0.06, 51.53], [-0.06, 51.51],
                        [-0.08, 51.51], [-0.08, 51.53]
                    ]]
                }
            }
        ]
    })
}

pub fn borough_population() -> Vec<(String, f64)> {
    vec![
        ("BoroughA".to_owned(), 80000.0),
        ("BoroughB".to_owned(), 120000.0),
    ]
}

pub fn clickable_regions() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "name": "Amazon Rainforest",
                    "info": "Vast tropical rainforest in South America, known for its biodiversity.",
                    "type": "Biome"
                },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [-70.0, -10.0], [-50.0, -10.0], [-50.0, 0.0],
                        [-70.0, 0.0], [-70.0, -10.0]
                    ]]
                }
            },
            {
                "type": "Feature",
                "properties": {
                    "name": "Mount Everest",
                    "info": "Earth's highest mountain above sea level, located in the Himalayas.",
                    "type": "Mountain"
                },
                "geometry": {
                    "type": "Point",
                    "coordinates": [86.925, 27.988]
                }
            }
        ]
    })
}

/// Features appearing and disappearing along the time slider.
pub fn timestamped_features() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
                "properties": {
                    "times": ["2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z", "2024-03-01T00:00:00Z"],
                    "iconstyle": { "fillOpacity": 0.8, "radius": 8, "fillColor": "blue" },
                    "popup": "<b>January Event:</b> Global pinpoint."
                }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [15.0, 45.0] },
                "properties": {
                    "times": ["2024-02-15T00:00:00Z", "2024-03-15T00:00:00Z", "2024-04-15T00:00:00Z"],
                    "iconstyle": { "fillOpacity": 0.8, "radius": 8, "fillColor": "red" },
                    "popup": "<b>February Event:</b> European activity."
                }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-70.0, 40.0], [-75.0, 35.0]]
                },
                "properties": {
                    "times": [
                        "2024-01-20T00:00:00Z", "2024-02-20T00:00:00Z",
                        "2024-03-20T00:00:00Z", "2024-04-20T00:00:00Z"
                    ],
                    "iconstyle": { "color": "orange", "weight": 5, "opacity": 0.7 },
                    "popup": "<b>March Movement:</b> Path taken over North America."
                }
            }
        ]
    })
}

fn random_position(rng: &mut impl Rng) -> Position {
    lat_lon(
        rng.random_range(LAT_RANGE),
        rng.random_range(LON_RANGE),
    )
}

pub fn heatmap_points(rng: &mut impl Rng) -> Vec<(Position, f64)> {
    (0..HEAT_SAMPLES)
        .map(|_| (random_position(rng), rng.random_range(0.1..1.0)))
        .collect()
}

pub fn cluster_markers(rng: &mut impl Rng) -> Vec<Marker> {
    (0..CLUSTER_SAMPLES)
        .map(|i| {
            let position = random_position(rng);
            Marker::new(position).with_tooltip(format!(
                "Clustered Point {}<br>Lat: {:.2}, Lng: {:.2}",
                i + 1,
                position.y(),
                position.x()
            ))
        })
        .collect()
}

/// Random markers whose icon and popup depend on an attached data value.
pub fn random_markers(rng: &mut impl Rng) -> Vec<Marker> {
    (0..RANDOM_POINT_SAMPLES)
        .map(|i| {
            let position = random_position(rng);
            let value: u32 = rng.random_range(10..=100);
            let (color, icon, verdict) = if value > 80 {
                ("green", "cloud-sun", "High Value")
            } else if value > 40 {
                ("orange", "info-circle", "Medium Value")
            } else {
                ("red", "exclamation-triangle", "Low Value")
            };
            let popup = format!(
                "<h4>Random Point {}</h4>\
                 <p>Value: <b>{value}</b></p>\
                 <p>Coordinates: {:.4}, {:.4}</p>\
                 <p>{verdict}: {value}</p>\
                 <small>Data generated randomly.</small>",
                i + 1,
                position.y(),
                position.x()
            );
            Marker::new(position)
                .with_popup(popup)
                .with_tooltip(format!("Point {} (Value: {value})", i + 1))
                .with_icon(Icon::Named {
                    color: color.to_owned(),
                    icon: icon.to_owned(),
                    prefix: "fa".to_owned(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn randomized_layers_match_the_configured_sample_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(heatmap_points(&mut rng).len(), HEAT_SAMPLES);
        assert_eq!(cluster_markers(&mut rng).len(), CLUSTER_SAMPLES);
        assert_eq!(random_markers(&mut rng).len(), RANDOM_POINT_SAMPLES);
    }

    #[test]
    fn random_points_fall_within_the_declared_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for (position, intensity) in heatmap_points(&mut rng) {
            assert!(LAT_RANGE.contains(&position.y()));
            assert!(LON_RANGE.contains(&position.x()));
            assert!((0.1..1.0).contains(&intensity));
        }
        for marker in random_markers(&mut rng) {
            assert!(LAT_RANGE.contains(&marker.position.y()));
            assert!(LON_RANGE.contains(&marker.position.x()));
        }
    }

    #[test]
    fn fixed_datasets_are_well_formed_feature_collections() {
        for data in [
            sample_geojson(),
            borough_regions(),
            clickable_regions(),
            timestamped_features(),
        ] {
            assert_eq!(data["type"], "FeatureCollection");
            assert!(!data["features"].as_array().unwrap().is_empty());
        }
    }
}
