//! Cell typing applied when a table is serialized.

use serde::{Deserialize, Serialize};

/// Inferred kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-empty value is a canonical finite number.
    Numeric,
    /// Anything else, including columns with no values at all.
    Text,
}

impl ColumnKind {
    /// Infer the kind of a column from its raw values.
    ///
    /// A column is numeric only if it holds at least one non-empty value and
    /// every non-empty value is a number in canonical form (see
    /// [`CellValue::parse_number`]).
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut seen_number = false;

        for value in values {
            if is_empty_value(value) {
                continue;
            }
            if CellValue::parse_number(value).is_none() {
                return ColumnKind::Text;
            }
            seen_number = true;
        }

        if seen_number {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }
}

impl Default for ColumnKind {
    fn default() -> Self {
        ColumnKind::Text
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

/// A typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Classify a raw cell according to the kind of its column.
    ///
    /// Text columns keep their values verbatim, so a number inside a
    /// mostly-text column stays text.
    pub fn classify(raw: &str, kind: ColumnKind) -> Self {
        if is_empty_value(raw) {
            return CellValue::Empty;
        }
        match kind {
            ColumnKind::Numeric => match Self::parse_number(raw) {
                Some(n) => CellValue::Number(n),
                None => CellValue::Text(raw.to_string()),
            },
            ColumnKind::Text => CellValue::Text(raw.to_string()),
        }
    }

    /// Parse a raw value as a finite number in canonical form.
    ///
    /// The text must be exactly what the number formats back to, so `30`,
    /// `-3.5` and `0.25` qualify while `02134`, `1.50`, `1e3` and ` 7` do
    /// not. Writing such a value as a number would change its text.
    pub fn parse_number(raw: &str) -> Option<f64> {
        // f64 parsing also accepts "infinity", "NaN" and friends; require a digit.
        if !raw.bytes().any(|b| b.is_ascii_digit()) {
            return None;
        }
        let n = raw.parse::<f64>().ok().filter(|n| n.is_finite())?;
        (n.to_string() == raw).then_some(n)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Only a zero-length value is empty; whitespace is content.
fn is_empty_value(raw: &str) -> bool {
    raw.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(CellValue::parse_number("30"), Some(30.0));
        assert_eq!(CellValue::parse_number("-2.5"), Some(-2.5));
        assert_eq!(CellValue::parse_number("0.25"), Some(0.25));
        assert_eq!(CellValue::parse_number("inf"), None);
        assert_eq!(CellValue::parse_number("NaN"), None);
        assert_eq!(CellValue::parse_number("12abc"), None);
        assert_eq!(CellValue::parse_number(""), None);
    }

    #[test]
    fn test_parse_number_rejects_non_canonical_text() {
        assert_eq!(CellValue::parse_number("02134"), None);
        assert_eq!(CellValue::parse_number("1.50"), None);
        assert_eq!(CellValue::parse_number("2.00"), None);
        assert_eq!(CellValue::parse_number("1e3"), None);
        assert_eq!(CellValue::parse_number(" -2.5 "), None);
        assert_eq!(CellValue::parse_number("+5"), None);
        assert_eq!(CellValue::parse_number("12345678901234567890"), None);
    }

    #[test]
    fn test_infer_numeric_with_blanks() {
        let kind = ColumnKind::infer(["1", "", "2.5"]);
        assert_eq!(kind, ColumnKind::Numeric);
    }

    #[test]
    fn test_infer_mixed_is_text() {
        assert_eq!(ColumnKind::infer(["1", "two", "3"]), ColumnKind::Text);
        assert_eq!(ColumnKind::infer(["02134", "10001"]), ColumnKind::Text);
        assert_eq!(ColumnKind::infer(["1", " ", "3"]), ColumnKind::Text);
    }

    #[test]
    fn test_infer_all_blank_is_text() {
        assert_eq!(ColumnKind::infer(["", ""]), ColumnKind::Text);
        assert_eq!(ColumnKind::infer(std::iter::empty()), ColumnKind::Text);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            CellValue::classify("30", ColumnKind::Numeric),
            CellValue::Number(30.0)
        );
        assert_eq!(
            CellValue::classify("30", ColumnKind::Text),
            CellValue::Text("30".to_string())
        );
        assert!(CellValue::classify("", ColumnKind::Numeric).is_empty());
        assert!(CellValue::classify("", ColumnKind::Text).is_empty());
    }

    #[test]
    fn test_classify_keeps_whitespace_text() {
        assert_eq!(
            CellValue::classify(" ", ColumnKind::Text),
            CellValue::Text(" ".to_string())
        );
    }
}
