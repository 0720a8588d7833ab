// src/annotate/label.rs
use crate::core::convert::fahrenheit_to_celsius;
use crate::params::LABEL_PRECISION;

/// Annotate a short temperature label:
/// "High: 63 °F" → "High: 63 °F (17.2 °C)".
///
/// Only the first reading counts; the page never puts two in one
/// label. Text without a reading passes through untouched.
pub fn annotate_label(text: &str) -> String {
    match find_fahrenheit(text) {
        Some(f) => join!(
            text,
            " (",
            &fahrenheit_to_celsius(f as f64, LABEL_PRECISION),
            " °C)",
        ),
        None => s!(text),
    }
}

/// First digit run followed by whitespace and a literal "°F".
fn find_fahrenheit(text: &str) -> Option<u32> {
    let b = text.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i].is_ascii_digit() {
            let start = i;
            while i < b.len() && b[i].is_ascii_digit() {
                i += 1;
            }
            let mut j = i;
            while j < b.len() && b[j].is_ascii_whitespace() {
                j += 1;
            }
            if j > i && text[j..].starts_with("°F") {
                return text[start..i].parse().ok();
            }
        } else {
            i += 1;
        }
    }
    None
}
