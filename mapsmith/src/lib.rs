#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod controls;
mod error;
pub mod layers;
mod map;
mod panel;
mod position;
mod render;
pub mod sources;
mod writer;

pub use controls::{Anchor, Control};
pub use error::Error;
pub use map::{Document, Map};
pub use panel::InsightPanel;
pub use position::{lat_lon, lon_lat, Position};
