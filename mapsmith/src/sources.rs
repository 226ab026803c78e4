//! Some common tile sources. Make sure you follow terms of usage of the particular source.

/// Attribution displayed in the corner of the map. May contain HTML.
#[derive(Clone)]
pub struct Attribution {
    pub html: &'static str,
}

/// Remote tile server definition, source for a tile layer of the map.
///
/// [`tile_url`](Self::tile_url) returns a URL template with `{z}`, `{x}` and `{y}`
/// placeholders which the viewer substitutes at runtime; the generator never
/// requests any tiles itself.
pub trait TileSource {
    fn tile_url(&self) -> String;
    fn attribution(&self) -> Attribution;

    fn max_zoom(&self) -> u8 {
        19
    }
}

/// <https://www.openstreetmap.org/about>
pub struct OpenStreetMap;

impl TileSource for OpenStreetMap {
    fn tile_url(&self) -> String {
        "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_owned()
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            html: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        }
    }
}

/// Light CartoDB basemap, a good background for dense overlays.
pub struct CartoDbPositron;

impl TileSource for CartoDbPositron {
    fn tile_url(&self) -> String {
        "https://basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png".to_owned()
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            html: "&copy; <a href=\"https://carto.com/attributions\">CartoDB</a>",
        }
    }
}

/// Dark CartoDB basemap.
pub struct CartoDbDarkMatter;

impl TileSource for CartoDbDarkMatter {
    fn tile_url(&self) -> String {
        "https://basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png".to_owned()
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            html: "&copy; <a href=\"https://carto.com/attributions\">CartoDB</a>",
        }
    }
}

const STAMEN_ATTRIBUTION: &str = "Map tiles by <a href=\"http://stamen.com\">Stamen Design</a>, \
    <a href=\"http://creativecommons.org/licenses/by/3.0\">CC BY 3.0</a> &mdash; Map data \
    &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// High-contrast black and white Stamen tiles.
pub struct StamenToner;

impl TileSource for StamenToner {
    fn tile_url(&self) -> String {
        "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}.png".to_owned()
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            html: STAMEN_ATTRIBUTION,
        }
    }
}

/// Stamen tiles with hill shading and natural colors.
pub struct StamenTerrain;

impl TileSource for StamenTerrain {
    fn tile_url(&self) -> String {
        "https://tiles.stadiamaps.com/tiles/stamen_terrain/{z}/{x}/{y}.png".to_owned()
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            html: STAMEN_ATTRIBUTION,
        }
    }
}

/// Semi-transparent weather overlays from OpenWeatherMap.
///
/// The tile URLs end with an empty `appid=` query parameter, the same
/// placeholder the insight panel uses. They render only after a real key is
/// substituted into the generated file.
pub enum OpenWeatherMap {
    Temperature,
    Precipitation,
    Clouds,
    WindSpeed,
}

impl OpenWeatherMap {
    fn layer(&self) -> &'static str {
        match self {
            Self::Temperature => "temp_new",
            Self::Precipitation => "precipitation_new",
            Self::Clouds => "clouds_new",
            Self::WindSpeed => "wind_new",
        }
    }
}

impl TileSource for OpenWeatherMap {
    fn tile_url(&self) -> String {
        format!(
            "https://tile.openweathermap.org/map/{}/{{z}}/{{x}}/{{y}}.png?appid=",
            self.layer()
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            html: "Weather data &copy; <a href=\"https://openweathermap.org/\">OpenWeatherMap</a>",
        }
    }
}
