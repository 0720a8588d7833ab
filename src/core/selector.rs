// src/core/selector.rs
//
// The tiny selector language the annotator needs: an element type,
// an optional class, and an optional ancestor id. Nothing more.
// "#seven-day-forecast-body p.temp" → id + tag + class.

use std::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    pub ancestor_id: Option<String>,
    pub tag: String,
    pub class: Option<String>,
}

impl Selector {
    /// Parse `[#ancestor-id] tag[.class]`. Anything else is an error.
    pub fn parse(s: &str) -> Result<Selector, Box<dyn Error>> {
        let mut tokens = s.split_whitespace();

        let first = tokens.next().ok_or("Empty selector")?;
        let (ancestor_id, elem) = if let Some(id) = first.strip_prefix('#') {
            if id.is_empty() {
                return Err(format!("Selector '{}': empty ancestor id", s).into());
            }
            let elem = tokens
                .next()
                .ok_or_else(|| format!("Selector '{}': missing element after ancestor id", s))?;
            (Some(id.to_string()), elem)
        } else {
            (None, first)
        };

        if let Some(extra) = tokens.next() {
            return Err(format!("Selector '{}': unexpected token '{}'", s, extra).into());
        }

        let (tag, class) = match elem.split_once('.') {
            Some((t, c)) => (t, Some(c)),
            None => (elem, None),
        };
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("Selector '{}': bad element type '{}'", s, tag).into());
        }
        if let Some(c) = class {
            if c.is_empty() || c.contains('.') {
                return Err(format!("Selector '{}': bad class '{}'", s, c).into());
            }
        }

        Ok(Selector {
            ancestor_id,
            tag: tag.to_string(),
            class: class.map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_shape() {
        let sel = Selector::parse("#seven-day-forecast-body p.temp").unwrap();
        assert_eq!(sel.ancestor_id.as_deref(), Some("seven-day-forecast-body"));
        assert_eq!(sel.tag, "p");
        assert_eq!(sel.class.as_deref(), Some("temp"));
    }

    #[test]
    fn tag_only() {
        let sel = Selector::parse("div").unwrap();
        assert_eq!(sel.ancestor_id, None);
        assert_eq!(sel.tag, "div");
        assert_eq!(sel.class, None);
    }

    #[test]
    fn tag_class_without_ancestor() {
        let sel = Selector::parse("div.forecast-text").unwrap();
        assert_eq!(sel.class.as_deref(), Some("forecast-text"));
    }

    #[test]
    fn rejects_out_of_language_shapes() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("#only-an-id").is_err());
        assert!(Selector::parse("#a p.temp extra").is_err());
        assert!(Selector::parse("p..temp").is_err());
        assert!(Selector::parse("#a .temp").is_err());
    }
}
