// src/core/sanitize.rs

/// Decode the handful of entities that actually show up in forecast
/// markup. `&deg;F` is how the pages spell "°F".
pub fn normalize_entities(s: &str) -> String {
    s.replace("&deg;", "°")
        .replace("&#176;", "°")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Escape plain text for re-insertion into markup.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Collapse whitespace runs to single spaces and trim. Used for log
/// previews of element text, which often spans indented lines.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
