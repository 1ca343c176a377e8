//! Lenient field decoders for backend payloads.
//!
//! `#[serde(default)]` only covers missing keys. The backend also sends
//! explicit `null`s and, for server-side aggregates, floats where a whole
//! number is expected; these helpers read both as the field's default or
//! nearest count instead of failing the whole record.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// `null` reads as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

struct AggregateVisitor;

impl<'de> Visitor<'de> for AggregateVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a count, a numeric string or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<u64, D::Error> {
        deserializer.deserialize_any(AggregateVisitor)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(u64::try_from(v).unwrap_or(0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        if v.is_finite() && v > 0.0 {
            // `as` saturates at u64::MAX
            Ok(v.round() as u64)
        } else {
            Ok(0)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        match v.trim().parse::<f64>() {
            Ok(n) => self.visit_f64(n),
            Err(_) => Ok(0),
        }
    }
}

/// Server-side count: `null` is 0, floats round to the nearest whole number,
/// negatives clamp to 0.
pub fn aggregate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    deserializer.deserialize_any(AggregateVisitor)
}

/// Metric map whose `null` entries are left out.
pub fn averages<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error> {
    let raw: Option<BTreeMap<String, Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(metric, value)| value.map(|v| (metric, v)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "aggregate")]
        total: u64,
        #[serde(deserialize_with = "averages")]
        averages: BTreeMap<String, f64>,
    }

    #[test]
    fn nulls_read_as_defaults() {
        let s: Sample =
            serde_json::from_value(json!({"name": null, "total": null, "averages": null})).unwrap();
        assert_eq!(s.name, "");
        assert_eq!(s.total, 0);
        assert!(s.averages.is_empty());
    }

    #[test]
    fn aggregates_accept_floats_and_strings() {
        let total = |v: serde_json::Value| serde_json::from_value::<Sample>(json!({ "total": v })).unwrap().total;
        assert_eq!(total(json!(12.5)), 13);
        assert_eq!(total(json!(40.0)), 40);
        assert_eq!(total(json!(-3)), 0);
        assert_eq!(total(json!("17")), 17);
        assert_eq!(total(json!("n/a")), 0);
    }

    #[test]
    fn null_averages_are_dropped() {
        let s: Sample =
            serde_json::from_value(json!({"averages": {"attendance": null, "newMembers": 2.5}}))
                .unwrap();
        assert_eq!(s.averages.len(), 1);
        assert_eq!(s.averages["newMembers"], 2.5);
    }
}
