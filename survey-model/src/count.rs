use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A non-negative whole-number answer on a survey form.
///
/// Three empty states are kept apart all the way to the API:
/// - `Untouched`: the input was never edited (`""` on the wire)
/// - `Unanswered`: the input was edited and left blank (`null`)
/// - `Value(n)`: an answer, zero included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Count {
    #[default]
    Untouched,
    Unanswered,
    Value(u32),
}

impl Count {
    /// Parse raw input text the way every numeric input does.
    ///
    /// All non-digit characters are dropped first, so `"12a3b"` reads as 123.
    /// Nothing left means `Unanswered`; a run of digits too large for `u32`
    /// reads as 0.
    pub fn parse(raw: &str) -> Count {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Count::Unanswered;
        }
        match digits.parse::<u32>() {
            Ok(n) => Count::Value(n),
            Err(_) => Count::Value(0),
        }
    }

    pub fn is_answered(self) -> bool {
        matches!(self, Count::Value(_))
    }

    pub fn value(self) -> Option<u32> {
        match self {
            Count::Value(n) => Some(n),
            _ => None,
        }
    }

    /// The number sent to endpoints that do not distinguish empty from zero.
    pub fn or_zero(self) -> u32 {
        self.value().unwrap_or(0)
    }

    /// Collapse both empty states into an explicit zero.
    pub fn collapsed(self) -> Count {
        Count::Value(self.or_zero())
    }

    /// Text shown inside a bound `<input>`.
    pub fn input_text(self) -> String {
        match self {
            Count::Value(n) => n.to_string(),
            _ => String::new(),
        }
    }
}

impl From<u32> for Count {
    fn from(n: u32) -> Self {
        Count::Value(n)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Untouched => f.write_str("-"),
            Count::Unanswered => f.write_str("not answered"),
            Count::Value(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Count {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Count::Untouched => serializer.serialize_str(""),
            Count::Unanswered => serializer.serialize_none(),
            Count::Value(n) => serializer.serialize_u32(*n),
        }
    }
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = Count;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer, a numeric string, \"\" or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Count, E> {
        Ok(Count::Unanswered)
    }

    fn visit_none<E: de::Error>(self) -> Result<Count, E> {
        Ok(Count::Unanswered)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Count, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Count, E> {
        Ok(Count::Value(u32::try_from(v).unwrap_or(0)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Count, E> {
        self.visit_u64(v.unsigned_abs())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Count, E> {
        if v.is_finite() && v >= 0.0 && v <= u32::MAX as f64 {
            Ok(Count::Value(v.trunc() as u32))
        } else {
            Ok(Count::Value(0))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Count, E> {
        if v.is_empty() {
            Ok(Count::Untouched)
        } else {
            Ok(Count::parse(v))
        }
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::Count;
    use serde_json::json;

    #[test]
    fn parse_strips_non_digits() {
        assert_eq!(Count::parse("12a3b"), Count::Value(123));
        assert_eq!(Count::parse(" 4 5 "), Count::Value(45));
        assert_eq!(Count::parse("-7"), Count::Value(7));
        assert_eq!(Count::parse("007"), Count::Value(7));
    }

    #[test]
    fn parse_empty_is_unanswered() {
        assert_eq!(Count::parse(""), Count::Unanswered);
        assert_eq!(Count::parse("abc"), Count::Unanswered);
    }

    #[test]
    fn parse_overflow_defaults_to_zero() {
        assert_eq!(Count::parse("99999999999999"), Count::Value(0));
    }

    #[test]
    fn parse_is_idempotent() {
        for raw in ["12a3b", "", "x", "0", "42", "9 9 9", "99999999999999"] {
            let once = Count::parse(raw);
            let twice = Count::parse(&once.input_text());
            assert_eq!(once, twice, "re-parsing {:?} changed the value", raw);
        }
    }

    #[test]
    fn three_empty_states_survive_json() {
        let values = vec![Count::Untouched, Count::Unanswered, Count::Value(0)];
        let encoded = serde_json::to_value(&values).unwrap();
        assert_eq!(encoded, json!(["", null, 0]));
        let decoded: Vec<Count> = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, values);
    }

    #[test]
    fn numeric_strings_follow_the_input_contract() {
        let decoded: Count = serde_json::from_value(json!("1,200")).unwrap();
        assert_eq!(decoded, Count::Value(1200));
    }

    #[test]
    fn collapsed_turns_empty_into_zero() {
        assert_eq!(Count::Untouched.collapsed(), Count::Value(0));
        assert_eq!(Count::Unanswered.collapsed(), Count::Value(0));
        assert_eq!(Count::Value(3).collapsed(), Count::Value(3));
    }
}
