//! UI controls placed in the corners of the map.

use serde::Serialize;
use serde_json::{json, Value};

use crate::sources::{OpenStreetMap, TileSource};

/// Corner of the map a control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    pub(crate) fn leaflet(self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
        }
    }
}

/// A UI control widget. Each variant maps to one Leaflet control plugin.
pub enum Control {
    /// Expand the map to full screen.
    Fullscreen { anchor: Anchor },
    /// Overview map in the corner.
    MiniMap { anchor: Anchor, toggle_display: bool },
    /// Draw tools, optionally with an export-to-GeoJSON button.
    Draw {
        anchor: Anchor,
        export: bool,
        filename: String,
    },
    /// Address search bar.
    Geocoder { anchor: Anchor },
    /// Button centering the map on the user's location.
    Locate { anchor: Anchor },
    /// Live display of the coordinates under the mouse pointer.
    MousePosition {
        anchor: Anchor,
        prefix: String,
        separator: String,
        num_digits: u8,
        empty_string: String,
    },
    /// Distance and area measurement.
    Measure {
        anchor: Anchor,
        primary_length_unit: String,
        secondary_length_unit: String,
    },
}

impl Control {
    /// Template name this control renders with.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Fullscreen { .. } => "fullscreen",
            Self::MiniMap { .. } => "minimap",
            Self::Draw { .. } => "draw",
            Self::Geocoder { .. } => "geocoder",
            Self::Locate { .. } => "locate",
            Self::MousePosition { .. } => "mouse_position",
            Self::Measure { .. } => "measure",
        }
    }

    pub(crate) fn payload(&self) -> Value {
        match self {
            Self::Fullscreen { anchor } | Self::Geocoder { anchor } | Self::Locate { anchor } => {
                json!({ "anchor": anchor.leaflet() })
            }
            Self::MiniMap {
                anchor,
                toggle_display,
            } => {
                // The overview pane needs its own tile layer.
                json!({
                    "anchor": anchor.leaflet(),
                    "toggle_display": toggle_display,
                    "tiles_url": OpenStreetMap.tile_url(),
                    "tiles_attribution": OpenStreetMap.attribution().html,
                })
            }
            Self::Draw {
                anchor,
                export,
                filename,
            } => json!({
                "anchor": anchor.leaflet(),
                "export": export,
                "filename": filename,
            }),
            Self::MousePosition {
                anchor,
                prefix,
                separator,
                num_digits,
                empty_string,
            } => json!({
                "anchor": anchor.leaflet(),
                "prefix": prefix,
                "separator": separator,
                "num_digits": num_digits,
                "empty_string": empty_string,
            }),
            Self::Measure {
                anchor,
                primary_length_unit,
                secondary_length_unit,
            } => json!({
                "anchor": anchor.leaflet(),
                "primary_length_unit": primary_length_unit,
                "secondary_length_unit": secondary_length_unit,
            }),
        }
    }
}
