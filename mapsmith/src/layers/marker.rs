use serde_json::{json, Value};

use crate::position::{lat_lng, Position};

/// Icon drawn for a [`Marker`].
pub enum Icon {
    /// The stock Leaflet pin.
    Default,
    /// A colored pin with a named glyph, e.g. `("fa", "camera")`.
    Named {
        color: String,
        icon: String,
        prefix: String,
    },
    /// A custom image icon.
    Image {
        url: String,
        size: [u32; 2],
        anchor: [u32; 2],
        popup_anchor: [i32; 2],
    },
}

impl Icon {
    fn payload(&self) -> Option<Value> {
        match self {
            Self::Default => None,
            Self::Named {
                color,
                icon,
                prefix,
            } => Some(json!({
                "type": "named",
                "color": color,
                "icon": icon,
                "prefix": prefix,
            })),
            Self::Image {
                url,
                size,
                anchor,
                popup_anchor,
            } => Some(json!({
                "type": "image",
                "url": url,
                "size": size,
                "anchor": anchor,
                "popup_anchor": popup_anchor,
            })),
        }
    }
}

/// A point on the map, optionally with a popup shown on click and a tooltip
/// shown on hover. Popups may contain HTML.
pub struct Marker {
    pub position: Position,
    pub popup: Option<String>,
    pub tooltip: Option<String>,
    pub icon: Icon,
}

impl Marker {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            popup: None,
            tooltip: None,
            icon: Icon::Default,
        }
    }

    pub fn with_popup(mut self, popup: impl Into<String>) -> Self {
        self.popup = Some(popup.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub(crate) fn payload(&self) -> Value {
        json!({
            "lat_lng": lat_lng(self.position),
            "popup": self.popup,
            "tooltip": self.tooltip,
            "icon": self.icon.payload(),
        })
    }
}
