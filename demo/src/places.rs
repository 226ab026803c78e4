//! Few well known places in London, used in the example map.

use mapsmith::{lat_lon, Position};

/// Famous Ferris wheel on the South Bank of the Thames.
/// https://en.wikipedia.org/wiki/London_Eye
pub fn london_eye() -> Position {
    lat_lon(51.5033, -0.1196)
}

/// World-renowned museum of human history, art and culture.
/// https://www.britishmuseum.org/
pub fn british_museum() -> Position {
    lat_lon(51.5194, -0.1269)
}

/// The King's official London residence.
pub fn buckingham_palace() -> Position {
    lat_lon(51.5014, -0.1419)
}

/// Rough center of the City of London financial district.
pub fn financial_district() -> Position {
    lat_lon(51.51, -0.09)
}
