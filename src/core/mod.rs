use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed `(id, score)` pair produced from one input line.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub score: Score,
}

impl Record {
    pub fn new(id: impl Into<String>, score: Score) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}

/// Best-effort integer parse result for the score column.
///
/// A score field without a leading integer still produces a record; the
/// sentinel ranks below every numeric value so those records end up at the
/// bottom of the descending ranking.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    // Variant order drives the derived `Ord`: the sentinel compares below
    // every numeric value.
    NotANumber,
    Value(i64),
}

impl Score {
    /// Parse a score field, taking the longest leading integer.
    ///
    /// Leading ASCII whitespace and an optional sign are accepted, trailing
    /// non-digit content is ignored (`"12abc"` parses as 12). A field with
    /// no leading digits at all yields [`Score::NotANumber`]. Values beyond
    /// the `i64` range saturate.
    pub fn parse(field: &str) -> Self {
        let trimmed = field.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let run = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
        if run == 0 {
            return Score::NotANumber;
        }

        // Accumulate on the negative side so i64::MIN parses exactly.
        let mut value: i64 = 0;
        for b in digits[..run].bytes() {
            let d = i64::from(b - b'0');
            value = match value.checked_mul(10).and_then(|v| v.checked_sub(d)) {
                Some(v) => v,
                None => return Score::Value(if negative { i64::MIN } else { i64::MAX }),
            };
        }
        if negative {
            Score::Value(value)
        } else {
            match value.checked_neg() {
                Some(v) => Score::Value(v),
                None => Score::Value(i64::MAX),
            }
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Score::Value(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Value(v) => write!(f, "{v}"),
            Score::NotANumber => write!(f, "NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_integers() {
        assert_eq!(Score::parse("42"), Score::Value(42));
        assert_eq!(Score::parse("-7"), Score::Value(-7));
        assert_eq!(Score::parse("+3"), Score::Value(3));
        assert_eq!(Score::parse("0"), Score::Value(0));
    }

    #[test]
    fn parse_takes_leading_digits_only() {
        assert_eq!(Score::parse("12abc"), Score::Value(12));
        assert_eq!(Score::parse("3.9"), Score::Value(3));
        assert_eq!(Score::parse(" 12"), Score::Value(12));
        assert_eq!(Score::parse("-5 apples"), Score::Value(-5));
    }

    #[test]
    fn parse_without_digits_is_not_a_number() {
        assert_eq!(Score::parse("abc"), Score::NotANumber);
        assert_eq!(Score::parse(""), Score::NotANumber);
        assert_eq!(Score::parse("-"), Score::NotANumber);
        assert_eq!(Score::parse("+"), Score::NotANumber);
        assert_eq!(Score::parse("NaN"), Score::NotANumber);
        assert_eq!(Score::parse("   "), Score::NotANumber);
    }

    #[test]
    fn parse_saturates_on_overflow() {
        assert_eq!(
            Score::parse("9223372036854775807"),
            Score::Value(i64::MAX)
        );
        assert_eq!(
            Score::parse("-9223372036854775808"),
            Score::Value(i64::MIN)
        );
        assert_eq!(
            Score::parse("99999999999999999999"),
            Score::Value(i64::MAX)
        );
        assert_eq!(
            Score::parse("-99999999999999999999"),
            Score::Value(i64::MIN)
        );
    }

    #[test]
    fn score_not_a_number_sorts_last() {
        // Descending ranking puts larger scores first, so the sentinel
        // must compare below every numeric value.
        assert!(Score::Value(i64::MIN) > Score::NotANumber);
        assert!(Score::Value(0) > Score::NotANumber);
        assert_eq!(Score::NotANumber, Score::NotANumber);
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::Value(30).to_string(), "30");
        assert_eq!(Score::Value(-2).to_string(), "-2");
        assert_eq!(Score::NotANumber.to_string(), "NaN");
    }
}
