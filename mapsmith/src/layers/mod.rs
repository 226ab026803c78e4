//! Layer types composing the map document.
//!
//! Each layer owns its geometry and style and knows how to turn itself into a
//! JSON payload for the script templates. Layers are independent; the order in
//! which they are added to the [`crate::Map`] determines their z-ordering and
//! their position in the layer control.

mod choropleth;
mod geojson;
mod heatmap;
mod image;
mod marker;
mod shapes;
mod timed;

pub use choropleth::{Choropleth, ColorScale};
pub use geojson::GeoJsonLayer;
pub use heatmap::Heatmap;
pub use image::ImageOverlay;
pub use marker::{Icon, Marker};
pub use shapes::{Circle, Polygon, Shape};
pub use timed::TimedGeoJson;
