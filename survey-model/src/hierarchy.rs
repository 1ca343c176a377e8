//! District → area → unit lookups and the cached user profile.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One node returned by the hierarchy lookup endpoints.
///
/// The backend is inconsistent about field names: the identifier arrives as
/// `id`, `_id` or `code` and the display name as `title` or `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyEntry {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct RawEntry {
    id: Option<Value>,
    #[serde(rename = "_id")]
    underscore_id: Option<Value>,
    code: Option<Value>,
    title: Option<String>,
    name: Option<String>,
}

/// Render a JSON string or number as an identifier.
pub fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for HierarchyEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEntry::deserialize(deserializer)?;
        let id = [&raw.id, &raw.underscore_id, &raw.code]
            .into_iter()
            .flatten()
            .find_map(id_text)
            .unwrap_or_default();
        let name = raw
            .title
            .filter(|t| !t.is_empty())
            .or(raw.name)
            .unwrap_or_default();
        Ok(HierarchyEntry { id, name })
    }
}

/// Name of the entry with identifier `id`, if the list has one.
pub fn find_name<'a>(entries: &'a [HierarchyEntry], id: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.as_str())
        .filter(|name| !name.is_empty())
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_text))
}

/// Profile cached at sign-in, used only to pre-fill hierarchy fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_id")]
    pub district_id: Option<String>,
    #[serde(deserialize_with = "lenient_id")]
    pub area_id: Option<String>,
    #[serde(deserialize_with = "lenient_id")]
    pub unit_id: Option<String>,
    pub district_name: Option<String>,
    pub area_name: Option<String>,
    pub unit_name: Option<String>,
}

/// Display names for the three hierarchy levels of a form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HierarchyNames {
    pub district: String,
    pub area: String,
    pub unit: String,
}

impl HierarchyNames {
    /// Starting values before any lookup: cached names, else the raw ids.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let pick = |name: &Option<String>, id: &Option<String>| {
            name.clone()
                .filter(|n| !n.is_empty())
                .or_else(|| id.clone())
                .unwrap_or_default()
        };
        Self {
            district: pick(&profile.district_name, &profile.district_id),
            area: pick(&profile.area_name, &profile.area_id),
            unit: pick(&profile.unit_name, &profile.unit_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_accepts_every_id_and_name_spelling() {
        let entries: Vec<HierarchyEntry> = serde_json::from_value(json!([
            {"id": "d1", "title": "Kozhikode"},
            {"_id": "d2", "name": "Malappuram"},
            {"code": 33, "title": "", "name": "Kannur"},
        ]))
        .unwrap();
        assert_eq!(entries[0], HierarchyEntry { id: "d1".into(), name: "Kozhikode".into() });
        assert_eq!(entries[1], HierarchyEntry { id: "d2".into(), name: "Malappuram".into() });
        assert_eq!(entries[2], HierarchyEntry { id: "33".into(), name: "Kannur".into() });
    }

    #[test]
    fn id_prefers_id_over_underscore_id_over_code() {
        let entry: HierarchyEntry =
            serde_json::from_value(json!({"code": "c", "_id": "u", "id": "i", "title": "T"})).unwrap();
        assert_eq!(entry.id, "i");
    }

    #[test]
    fn find_name_skips_unknown_and_blank() {
        let entries = vec![
            HierarchyEntry { id: "a1".into(), name: "Feroke".into() },
            HierarchyEntry { id: "a2".into(), name: String::new() },
        ];
        assert_eq!(find_name(&entries, "a1"), Some("Feroke"));
        assert_eq!(find_name(&entries, "a2"), None);
        assert_eq!(find_name(&entries, "zz"), None);
    }

    #[test]
    fn profile_names_fall_back_to_ids() {
        let profile: UserProfile = serde_json::from_value(json!({
            "districtId": 7,
            "areaId": "a9",
            "areaName": "Feroke",
            "unitId": null
        }))
        .unwrap();
        let names = HierarchyNames::from_profile(&profile);
        assert_eq!(names.district, "7");
        assert_eq!(names.area, "Feroke");
        assert_eq!(names.unit, "");
    }
}
