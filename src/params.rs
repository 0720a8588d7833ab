// src/params.rs
use std::path::PathBuf;

// Where the readings live on the page. Both query shapes are fixed:
// tag + class, scoped under a known container id. Locale assumptions
// (ASCII digits, "°F", the English cue words) live with the handlers;
// the selectors live here so neither side knows about the other.
pub const TEMP_LABELS: &str = "#seven-day-forecast-body p.temp";
pub const FORECAST_TEXT: &str = "#detailed-forecast div.forecast-text";

/// Decimal digits for label annotations: "High: 63 °F (17.2 °C)".
pub const LABEL_PRECISION: usize = 1;
/// Decimal digits for narrative annotations: "around 56 (13°C)".
pub const NARRATIVE_PRECISION: usize = 0;

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub input: Option<PathBuf>, // None = read stdin
    pub out: Option<PathBuf>,   // None = write stdout
    pub in_place: bool,         // rewrite the input file
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }
}
