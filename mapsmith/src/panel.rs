//! The insight panel injected into the generated document.
//!
//! The panel is pure template output: a Leaflet control plus a script block
//! that, at view time, reverse-geocodes clicks, fetches local weather, asks an
//! AI service for a short insight about the clicked location, and — once both
//! route endpoints are picked — for a textual route description. The generator
//! never performs any of these calls.

use serde_json::{json, Value};

/// Configuration of the injected panel.
///
/// Both API keys default to empty strings. They are always emitted, even when
/// empty, as the two placeholder variables meant to be substituted by hand in
/// the generated file; with a key missing the corresponding feature
/// short-circuits to an inline error instead of a network call.
pub struct InsightPanel {
    pub title: String,
    pub weather_api_key: String,
    pub ai_api_key: String,
    pub weather_endpoint: String,
    pub ai_endpoint: String,
    pub geocode_endpoint: String,
}

impl Default for InsightPanel {
    fn default() -> Self {
        Self {
            title: "Location Insights".to_owned(),
            weather_api_key: String::new(),
            ai_api_key: String::new(),
            weather_endpoint: "https://api.openweathermap.org/data/2.5/weather".to_owned(),
            ai_endpoint:
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
                    .to_owned(),
            geocode_endpoint: "https://nominatim.openstreetmap.org/reverse".to_owned(),
        }
    }
}

impl InsightPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(mut self, weather: impl Into<String>, ai: impl Into<String>) -> Self {
        self.weather_api_key = weather.into();
        self.ai_api_key = ai.into();
        self
    }

    pub(crate) fn payload(&self) -> Value {
        json!({
            "title": self.title,
            "weather_key": self.weather_api_key,
            "ai_key": self.ai_api_key,
            "weather_endpoint": self.weather_endpoint,
            "ai_endpoint": self.ai_endpoint,
            "geocode_endpoint": self.geocode_endpoint,
        })
    }
}
