//! Maps whose key set is exactly one catalog list.

use crate::catalog::{Choice, OptionList};
use crate::error::{ModelError, Result};
use log::warn;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A fully populated map over the keys of catalog list `L`.
///
/// Values are stored in catalog order. The key set cannot grow or shrink:
/// writes to unknown keys fail and unknown keys in incoming JSON are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedMap<L: OptionList, V> {
    values: Vec<V>,
    list: PhantomData<L>,
}

/// Checkbox group keyed by a catalog list.
pub type FlagMap<L> = KeyedMap<L, bool>;

impl<L: OptionList, V: Default> KeyedMap<L, V> {
    pub fn new() -> Self {
        Self {
            values: L::choices().iter().map(|_| V::default()).collect(),
            list: PhantomData,
        }
    }
}

impl<L: OptionList, V: Default> Default for KeyedMap<L, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: OptionList, V> KeyedMap<L, V> {
    fn index_of(key: &str) -> Result<usize> {
        L::ID.position(key).ok_or_else(|| ModelError::UnknownKey {
            list: L::ID,
            key: key.to_string(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        L::ID.position(key).map(|i| &self.values[i])
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let i = Self::index_of(key)?;
        Ok(&mut self.values[i])
    }

    pub fn set(&mut self, key: &str, value: V) -> Result<()> {
        *self.get_mut(key)? = value;
        Ok(())
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Choice, &V)> {
        L::choices().iter().zip(self.values.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.values.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<L: OptionList> KeyedMap<L, bool> {
    /// Absent or unknown keys read as unchecked.
    pub fn is_checked(&self, key: &str) -> bool {
        self.get(key).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, key: &str) -> Result<bool> {
        let flag = self.get_mut(key)?;
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn any_checked(&self) -> bool {
        self.values.iter().any(|v| *v)
    }

    /// Keys of every checked option, in catalog order.
    pub fn checked_keys(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, checked)| **checked)
            .map(|(choice, _)| choice.key)
            .collect()
    }
}

impl<L: OptionList, V: Serialize> Serialize for KeyedMap<L, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (choice, value) in self.iter() {
            map.serialize_entry(choice.key, value)?;
        }
        map.end()
    }
}

struct KeyedMapVisitor<L, V>(PhantomData<(L, V)>);

/// Decode one cell. A `null` the value type cannot read itself (flags,
/// attendance rows) becomes `V::default()`; `Count` keeps its own `null`.
fn cell<V: Default + DeserializeOwned>(raw: Value) -> std::result::Result<V, serde_json::Error> {
    let is_null = raw.is_null();
    match serde_json::from_value(raw) {
        Ok(value) => Ok(value),
        Err(_) if is_null => Ok(V::default()),
        Err(e) => Err(e),
    }
}

impl<'de, L, V> Visitor<'de> for KeyedMapVisitor<L, V>
where
    L: OptionList,
    V: Default + DeserializeOwned,
{
    type Value = KeyedMap<L, V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map keyed by {}", L::ID.name())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(KeyedMap::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut result = KeyedMap::<L, V>::new();
        while let Some(key) = access.next_key::<String>()? {
            match L::ID.position(&key) {
                Some(i) => {
                    let raw: Value = access.next_value()?;
                    result.values[i] = cell(raw).map_err(de::Error::custom)?;
                }
                None => {
                    warn!("Dropping unknown {} key '{}'", L::ID.name(), key);
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(result)
    }
}

impl<'de, L, V> Deserialize<'de> for KeyedMap<L, V>
where
    L: OptionList,
    V: Default + DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(KeyedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ExpansionActivities, GrowthWings, PersonCategories};
    use crate::count::Count;
    use serde_json::json;

    #[test]
    fn new_map_is_fully_populated() {
        let flags: FlagMap<PersonCategories> = FlagMap::new();
        assert_eq!(flags.len(), 27);
        assert!(!flags.any_checked());
    }

    #[test]
    fn toggle_changes_only_one_key() {
        let mut flags: FlagMap<ExpansionActivities> = FlagMap::new();
        flags.set("campaigns", true).unwrap();
        let before: Vec<bool> = flags.values().copied().collect();

        flags.toggle("houseVisits").unwrap();

        for (i, (choice, checked)) in flags.iter().enumerate() {
            if choice.key == "houseVisits" {
                assert_ne!(*checked, before[i]);
            } else {
                assert_eq!(*checked, before[i], "{} changed", choice.key);
            }
        }
    }

    #[test]
    fn person_category_toggles_are_independent() {
        let mut flags: FlagMap<PersonCategories> = FlagMap::new();
        for key in ["doctors", "teachers"] {
            flags.set(key, true).unwrap();
        }
        for choice in PersonCategories::choices() {
            let before: Vec<bool> = flags.values().copied().collect();
            flags.toggle(choice.key).unwrap();
            for (i, (other, checked)) in flags.iter().enumerate() {
                if other.key == choice.key {
                    assert_ne!(*checked, before[i]);
                } else {
                    assert_eq!(*checked, before[i], "{} changed with {}", other.key, choice.key);
                }
            }
            flags.toggle(choice.key).unwrap();
        }
        assert_eq!(flags.checked_keys().len(), 2);
    }

    #[test]
    fn null_cells_read_as_default() {
        let flags: FlagMap<ExpansionActivities> =
            serde_json::from_value(json!({"houseVisits": null, "campaigns": true})).unwrap();
        assert!(!flags.is_checked("houseVisits"));
        assert!(flags.is_checked("campaigns"));

        let growth: KeyedMap<GrowthWings, Count> =
            serde_json::from_value(json!({"jih": null, "sio": 3})).unwrap();
        assert_eq!(growth.get("jih"), Some(&Count::Unanswered));
        assert_eq!(growth.get("sio"), Some(&Count::Value(3)));
        assert_eq!(growth.get("gio"), Some(&Count::Untouched));
    }

    #[test]
    fn wrong_cell_type_is_still_an_error() {
        let decoded = serde_json::from_value::<FlagMap<ExpansionActivities>>(json!({"houseVisits": "yes"}));
        assert!(decoded.is_err());
    }

    #[test]
    fn unknown_keys_are_rejected_on_write() {
        let mut flags: FlagMap<ExpansionActivities> = FlagMap::new();
        assert!(flags.toggle("notAnActivity").is_err());
        assert!(!flags.is_checked("notAnActivity"));
    }

    #[test]
    fn missing_keys_read_as_default_after_decode() {
        let flags: FlagMap<PersonCategories> =
            serde_json::from_value(json!({"doctors": true, "astronauts": true})).unwrap();
        assert!(flags.is_checked("doctors"));
        assert!(!flags.is_checked("teachers"));
        assert_eq!(flags.len(), 27);
        assert_eq!(flags.checked_keys(), vec!["doctors"]);
    }

    #[test]
    fn serializes_in_catalog_order() {
        let mut growth: KeyedMap<GrowthWings, Count> = KeyedMap::new();
        growth.set("teenIndia", Count::Value(2)).unwrap();
        let encoded = serde_json::to_string(&growth).unwrap();
        assert!(encoded.starts_with("{\"jih\":\"\""));
        assert!(encoded.ends_with("\"teenIndia\":2}"));
    }
}
