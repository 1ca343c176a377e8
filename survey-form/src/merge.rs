//! Deep merge of JSON patches into form records.
//!
//! Both wizards apply partial updates through these functions. Objects merge
//! key by key at every depth; anything else in the patch (scalars, arrays,
//! null) replaces the target value outright. No field is special-cased.

use crate::error::FormError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Merge `patch` into `target` in place.
pub fn deep_merge(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}

fn child<'a>(node: &'a mut Value, key: &str) -> &'a mut Value {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map.entry(key.to_string()).or_insert(Value::Null),
        _ => unreachable!("node was just replaced with an object"),
    }
}

/// Merge `patch` at a dotted `path` inside `target`, creating objects on the way.
///
/// An empty path merges at the root.
pub fn merge_at(target: &mut Value, path: &str, patch: Value) {
    let mut node = target;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        node = child(node, segment);
    }
    deep_merge(node, patch);
}

/// Wrap `value` in nested objects following a dotted `path`.
///
/// `nest("wingAttendance.jih.present", json!(5))` gives
/// `{"wingAttendance": {"jih": {"present": 5}}}`.
pub fn nest(path: &str, value: Value) -> Value {
    path.rsplit('.')
        .filter(|s| !s.is_empty())
        .fold(value, |inner, segment| {
            let mut map = Map::new();
            map.insert(segment.to_string(), inner);
            Value::Object(map)
        })
}

/// Merge `patch` into a typed value and read the result back into its type.
///
/// The round trip through the record's own serde shape means a patch can
/// never add keys the type does not have.
pub fn merged<T>(current: &T, patch: Value) -> Result<T, FormError>
where
    T: Serialize + DeserializeOwned,
{
    let mut value = serde_json::to_value(current)?;
    deep_merge(&mut value, patch);
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_level_keys_are_unioned() {
        let mut target = json!({"district": "X", "area": ""});
        deep_merge(&mut target, json!({"area": "Y", "month": "June"}));
        assert_eq!(target, json!({"district": "X", "area": "Y", "month": "June"}));
    }

    #[test]
    fn part_level_siblings_survive() {
        let mut target = json!({"partB": {"monthlyMeeting": "", "mainDecisions": ["a"]}});
        deep_merge(&mut target, json!({"partB": {"monthlyMeeting": "Yes"}}));
        assert_eq!(
            target,
            json!({"partB": {"monthlyMeeting": "Yes", "mainDecisions": ["a"]}})
        );
    }

    #[test]
    fn map_level_siblings_survive() {
        let mut target = json!({
            "wingAttendance": {
                "jih": {"present": null, "leave": null, "absent": null},
                "sio": {"present": 3, "leave": null, "absent": null}
            }
        });
        deep_merge(&mut target, json!({"wingAttendance": {"jih": {"present": 5}}}));
        assert_eq!(target["wingAttendance"]["jih"], json!({"present": 5, "leave": null, "absent": null}));
        assert_eq!(target["wingAttendance"]["sio"]["present"], json!(3));
    }

    #[test]
    fn leaf_values_and_arrays_replace() {
        let mut target = json!({"activities": ["a", "b"], "male": 4});
        deep_merge(&mut target, json!({"activities": ["c"], "male": null}));
        assert_eq!(target, json!({"activities": ["c"], "male": null}));
    }

    #[test]
    fn object_patch_replaces_scalar_target() {
        let mut target = json!({"workers": ""});
        deep_merge(&mut target, json!({"workers": {"rukkun": 1}}));
        assert_eq!(target, json!({"workers": {"rukkun": 1}}));
    }

    #[test]
    fn merge_at_creates_intermediate_objects() {
        let mut target = json!({"partF": {}});
        merge_at(&mut target, "partF.wingGrowth.gio", json!({"newMembers": 2}));
        assert_eq!(target, json!({"partF": {"wingGrowth": {"gio": {"newMembers": 2}}}}));
    }

    #[test]
    fn merge_at_empty_path_is_root() {
        let mut target = json!({"a": 1});
        merge_at(&mut target, "", json!({"b": 2}));
        assert_eq!(target, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn nest_builds_the_patch_for_a_path() {
        assert_eq!(
            nest("wingAttendance.jih.present", json!(5)),
            json!({"wingAttendance": {"jih": {"present": 5}}})
        );
        assert_eq!(nest("", json!(1)), json!(1));
    }
}
