// src/annotate/mod.rs
//! Fahrenheit → Celsius annotation for forecast pages.
//!
//! Two candidate sets, two handlers, one pass:
//! - `p.temp` labels under `#seven-day-forecast-body` get a
//!   ` (17.2 °C)` suffix ([`label`]).
//! - `div.forecast-text` narrative under `#detailed-forecast` gets
//!   every "around N" / "near N" phrase annotated inline
//!   ([`narrative`]).
//!
//! The page is only written when a handler actually changed the text.
//! That guard suppresses no-op writes; it does NOT make repeat runs
//! idempotent — already-annotated text picks up a second annotation,
//! which matches the behavior this replaces.

pub mod label;
pub mod narrative;

use std::error::Error;

use crate::core::html::NodeId;
use crate::core::sanitize;
use crate::core::selector::Selector;
use crate::page::Page;
use crate::params::{FORECAST_TEXT, TEMP_LABELS};

/// Counts of elements actually rewritten, per candidate set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rewrites {
    pub labels: usize,
    pub narratives: usize,
}

/// Run the full annotation pass over a page. The only effect on the
/// page is text mutation of matched elements; the counts are for host
/// reporting.
pub fn annotate_page(page: &mut dyn Page) -> Result<Rewrites, Box<dyn Error>> {
    let mut out = Rewrites::default();

    let labels = Selector::parse(TEMP_LABELS)?;
    for node in page.select(&labels) {
        if rewrite(page, node, label::annotate_label) {
            out.labels += 1;
        }
    }

    let narratives = Selector::parse(FORECAST_TEXT)?;
    for node in page.select(&narratives) {
        if rewrite(page, node, narrative::annotate_narrative) {
            out.narratives += 1;
        }
    }

    logd!("annotate: rewrote {} labels, {} narrative blocks", out.labels, out.narratives);
    Ok(out)
}

fn rewrite(page: &mut dyn Page, node: NodeId, handler: fn(&str) -> String) -> bool {
    let old = page.text(node);
    let new = handler(&old);
    if new == old {
        return false;
    }
    logd!("annotate: '{}'", sanitize::normalize_ws(&new));
    page.set_text(node, &new);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::NodeId;

    // Synthetic page: proves the orchestrator only needs the narrow
    // Page capability, and records which nodes actually got written.
    struct FakePage {
        labels: Vec<String>,
        narratives: Vec<String>,
        writes: Vec<NodeId>,
    }

    // label nodes are 0..N, narrative nodes N..N+M
    impl Page for FakePage {
        fn select(&self, sel: &Selector) -> Vec<NodeId> {
            match sel.ancestor_id.as_deref() {
                Some("seven-day-forecast-body") => (0..self.labels.len()).collect(),
                Some("detailed-forecast") => (self.labels.len()
                    ..self.labels.len() + self.narratives.len())
                    .collect(),
                _ => Vec::new(),
            }
        }

        fn text(&self, node: NodeId) -> String {
            if node < self.labels.len() {
                self.labels[node].clone()
            } else {
                self.narratives[node - self.labels.len()].clone()
            }
        }

        fn set_text(&mut self, node: NodeId, text: &str) {
            self.writes.push(node);
            if node < self.labels.len() {
                self.labels[node] = s!(text);
            } else {
                let n = self.labels.len();
                self.narratives[node - n] = s!(text);
            }
        }
    }

    fn page() -> FakePage {
        FakePage {
            labels: vec![s!("High: 63 °F"), s!("Sunny"), s!("Low: 46 °F")],
            narratives: vec![
                s!("Sunny, with a high near 63."),
                s!("Calm wind."),
                s!("highs near 70 and lows around 56"),
            ],
            writes: Vec::new(),
        }
    }

    #[test]
    fn annotates_both_candidate_sets() {
        let mut p = page();
        let stats = annotate_page(&mut p).unwrap();
        assert_eq!(stats, Rewrites { labels: 2, narratives: 2 });
        assert_eq!(p.labels[0], "High: 63 °F (17.2 °C)");
        assert_eq!(p.labels[2], "Low: 46 °F (7.8 °C)");
        assert_eq!(p.narratives[0], "Sunny, with a high near 63 (17°C).");
        assert_eq!(
            p.narratives[2],
            "highs near 70 (21°C) and lows around 56 (13°C)"
        );
    }

    #[test]
    fn unchanged_text_is_never_written() {
        let mut p = page();
        annotate_page(&mut p).unwrap();
        // node 1 ("Sunny") and narrative node 4 ("Calm wind.") untouched
        assert!(!p.writes.contains(&1));
        assert!(!p.writes.contains(&4));
        assert_eq!(p.labels[1], "Sunny");
        assert_eq!(p.narratives[1], "Calm wind.");
    }

    #[test]
    fn second_run_reannotates_annotated_text() {
        // Known gap, preserved: the equality guard only skips no-op
        // writes, it does not recognize existing annotations.
        let mut p = page();
        annotate_page(&mut p).unwrap();
        let stats = annotate_page(&mut p).unwrap();
        assert_eq!(stats, Rewrites { labels: 2, narratives: 2 });
        assert_eq!(p.labels[0], "High: 63 °F (17.2 °C) (17.2 °C)");
        assert_eq!(
            p.narratives[0],
            "Sunny, with a high near 63 (17°C) (17°C)."
        );
    }

    #[test]
    fn empty_page_is_a_no_op() {
        let mut p = FakePage { labels: vec![], narratives: vec![], writes: vec![] };
        let stats = annotate_page(&mut p).unwrap();
        assert_eq!(stats, Rewrites::default());
        assert!(p.writes.is_empty());
    }
}
