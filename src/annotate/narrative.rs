// src/annotate/narrative.rs
use crate::core::convert::fahrenheit_to_celsius;
use crate::core::html::to_lower;
use crate::params::NARRATIVE_PRECISION;

// Cue words the forecast narrative uses before a temperature.
// Matched case-insensitively, as plain substrings (no word boundary),
// exactly like the page has always been handled.
const CUES: &[&str] = &["around", "near"];

/// Annotate every "around N" / "near N" phrase in forecast narrative:
/// "low around 56" → "low around 56 (13°C)".
///
/// All occurrences are annotated left to right; cue word casing and
/// the original number are preserved verbatim. Note the narrative
/// format glues the unit to the value ("13°C"), unlike the label
/// handler's "17.2 °C" — keep it that way.
pub fn annotate_narrative(text: &str) -> String {
    let lc = to_lower(text);
    let mut out = String::with_capacity(text.len() + 16);
    let mut pos = 0;
    while pos < text.len() {
        match next_phrase(text, &lc, pos) {
            Some(p) => {
                out.push_str(&text[pos..p.end]);
                out.push_str(" (");
                out.push_str(&fahrenheit_to_celsius(p.fahrenheit as f64, NARRATIVE_PRECISION));
                out.push_str("°C)");
                pos = p.end;
            }
            None => {
                out.push_str(&text[pos..]);
                break;
            }
        }
    }
    out
}

struct Phrase {
    end: usize, // byte offset just past the number
    fahrenheit: u32,
}

/// Earliest cue-plus-number phrase at or after `from`. A cue word with
/// no number behind it is skipped, and the scan resumes one byte in,
/// so overlapping candidates still get found.
fn next_phrase(text: &str, lc: &str, from: usize) -> Option<Phrase> {
    let b = text.as_bytes();
    let mut i = from;
    while i < lc.len() {
        let mut hit: Option<(usize, usize)> = None; // (start, cue len)
        for cue in CUES {
            if let Some(p) = lc[i..].find(cue) {
                let at = i + p;
                match hit {
                    Some((s, _)) if s <= at => {}
                    _ => hit = Some((at, cue.len())),
                }
            }
        }
        let (start, cue_len) = hit?;

        let mut j = start + cue_len;
        let ws0 = j;
        while j < b.len() && b[j].is_ascii_whitespace() {
            j += 1;
        }
        let d0 = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > d0 && d0 > ws0 {
            if let Ok(f) = text[d0..j].parse() {
                return Some(Phrase { end: j, fahrenheit: f });
            }
        }
        i = start + 1;
    }
    None
}
