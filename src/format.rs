//! Tick and slice label formatting.
//!
//! The engine is unit-agnostic: the caller picks how axis values read
//! (plain numbers, thousands-grouped, or currency).

use serde::{Deserialize, Serialize};

/// How value-axis tick labels are written.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ValueFormat {
    /// The tick value as-is, e.g. `13200`
    #[default]
    Plain,
    /// Thousands separators, e.g. `13,200`
    Grouped,
    /// Currency symbol prefix with thousands separators, e.g. `$13,200`
    Currency { symbol: String },
}

impl ValueFormat {
    /// Format a tick value.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Plain => format!("{value}"),
            Self::Grouped => group_thousands(value),
            Self::Currency { symbol } => {
                if value < 0.0 {
                    format!("-{symbol}{}", group_thousands(-value))
                } else {
                    format!("{symbol}{}", group_thousands(value))
                }
            }
        }
    }
}

/// Whole-number percentage label for one donut slice.
///
/// Each slice rounds on its own, so labels of one ring may add up to 99 or 101.
pub fn percent_label(value: f64, total: f64) -> String {
    let pct = (value / total * 100.0).round();
    // `-0` prints as "-0"
    format!("{}%", pct + 0.0)
}

fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3 + 1);
    if value < 0.0 && rounded != "0" {
        out.push('-');
    }
    let len = rounded.len();
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "0")]
    #[test_case(13200.0, "13200")]
    #[test_case(2.5, "2.5")]
    fn test_plain(value: f64, expected: &str) {
        assert_eq!(ValueFormat::Plain.format(value), expected);
    }

    #[test_case(0.0, "0")]
    #[test_case(999.0, "999")]
    #[test_case(1000.0, "1,000")]
    #[test_case(66000.0, "66,000")]
    #[test_case(1234567.0, "1,234,567")]
    #[test_case(-4500.0, "-4,500")]
    fn test_grouped(value: f64, expected: &str) {
        assert_eq!(ValueFormat::Grouped.format(value), expected);
    }

    #[test]
    fn test_currency() {
        let fmt = ValueFormat::Currency {
            symbol: "$".to_string(),
        };
        assert_eq!(fmt.format(13200.0), "$13,200");
        assert_eq!(fmt.format(-50.0), "-$50");
    }

    #[test]
    fn test_percent_label_rounds_each_slice() {
        assert_eq!(percent_label(65.0, 100.0), "65%");
        assert_eq!(percent_label(1.0, 3.0), "33%");
        assert_eq!(percent_label(2.0, 3.0), "67%");
        assert_eq!(percent_label(0.0, 3.0), "0%");
    }
}
