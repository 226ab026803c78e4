//! Types and functions for working with positions.

/// Geographical position with latitude and longitude.
pub type Position = geo_types::Point;

/// Construct `Position` from latitude and longitude.
pub fn lat_lon(lat: f64, lon: f64) -> Position {
    Position::new(lon, lat)
}

/// Construct `Position` from longitude and latitude. Note that it is common standard to write
/// coordinates starting with the latitude instead.
pub fn lon_lat(lon: f64, lat: f64) -> Position {
    Position::new(lon, lat)
}

/// `[latitude, longitude]` pair in the order Leaflet expects.
pub(crate) fn lat_lng(position: Position) -> [f64; 2] {
    [position.y(), position.x()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constructors_agree() {
        assert_eq!(lat_lon(51.0, 17.0), lon_lat(17.0, 51.0));
    }

    #[test]
    fn leaflet_order_is_lat_first() {
        let pair = lat_lng(lat_lon(51.5074, -0.1278));
        assert_relative_eq!(pair[0], 51.5074);
        assert_relative_eq!(pair[1], -0.1278);
    }
}
