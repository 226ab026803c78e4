use serde_json::{json, Value};

/// A GeoJSON collection whose features carry ISO-8601 `times` lists, animated
/// by a time slider in the viewer.
pub struct TimedGeoJson {
    pub data: Value,
    /// ISO-8601 period between animation steps, e.g. `P1M`.
    pub period: String,
    pub auto_play: bool,
    pub looped: bool,
    pub transition_ms: u32,
}

impl TimedGeoJson {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            period: "P1M".to_owned(),
            auto_play: true,
            looped: true,
            transition_ms: 700,
        }
    }

    pub(crate) fn payload(&self) -> Value {
        json!({
            "data": self.data,
            "period": self.period,
            "auto_play": self.auto_play,
            "looped": self.looped,
            "transition_ms": self.transition_ms,
        })
    }
}
