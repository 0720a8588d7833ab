// src/core/convert.rs

/// Celsius equivalent of a Fahrenheit reading: (f − 32) × 5⁄9,
/// formatted to exactly `places` decimal digits.
pub fn fahrenheit_to_celsius(f: f64, places: usize) -> String {
    format!("{:.*}", places, (f - 32.0) * 5.0 / 9.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_precision() {
        // (63 − 32) × 5⁄9 = 17.222…
        assert_eq!(fahrenheit_to_celsius(63.0, 1), "17.2");
    }

    #[test]
    fn narrative_precision() {
        // (56 − 32) × 5⁄9 = 13.333…
        assert_eq!(fahrenheit_to_celsius(56.0, 0), "13");
    }

    #[test]
    fn freezing_point() {
        assert_eq!(fahrenheit_to_celsius(32.0, 1), "0.0");
        assert_eq!(fahrenheit_to_celsius(32.0, 0), "0");
    }

    #[test]
    fn below_freezing_goes_negative() {
        // (20 − 32) × 5⁄9 = −6.666…
        assert_eq!(fahrenheit_to_celsius(20.0, 0), "-7");
        assert_eq!(fahrenheit_to_celsius(20.0, 1), "-6.7");
    }

    #[test]
    fn digit_count_matches_places() {
        for f in [0.0, 5.0, 32.0, 56.0, 63.0, 70.0, 104.0] {
            for places in 0..=3 {
                let s = fahrenheit_to_celsius(f, places);
                let frac = s.split('.').nth(1).map(|d| d.len()).unwrap_or(0);
                assert_eq!(frac, places, "{f} °F at {places} places gave {s}");
            }
        }
    }

    #[test]
    fn formatted_value_is_close() {
        for f in [0u32, 14, 32, 41, 56, 63, 70, 99] {
            let exact = (f as f64 - 32.0) * 5.0 / 9.0;
            let got: f64 = fahrenheit_to_celsius(f as f64, 1).parse().unwrap();
            assert!((got - exact).abs() <= 0.05, "{f} °F: {got} vs {exact}");
        }
    }
}
