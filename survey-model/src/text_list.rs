use crate::error::{ModelError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered free-text entries such as meeting decisions or activities.
///
/// Entries may repeat and may be empty; there is no reordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TextList(Vec<String>);

impl TextList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank entry for the user to fill in.
    pub fn push_blank(&mut self) {
        self.0.push(String::new());
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.0.push(text.into());
    }

    pub fn set(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.0.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for TextList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

/// A `null` list is empty and a `null` entry is blank.
impl<'de> Deserialize<'de> for TextList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
        Ok(Self(
            raw.unwrap_or_default()
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::TextList;
    use serde_json::json;

    #[test]
    fn append_edit_delete() {
        let mut list = TextList::new();
        list.push_blank();
        list.push_blank();
        list.set(1, "Hold a family meet").unwrap();
        assert_eq!(list.as_slice(), &["".to_string(), "Hold a family meet".to_string()]);

        let removed = list.remove(0).unwrap();
        assert_eq!(removed, "");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn out_of_range_is_an_error_and_changes_nothing() {
        let mut list = TextList::from(vec!["a".to_string()]);
        assert!(list.set(3, "b").is_err());
        assert!(list.remove(1).is_err());
        assert_eq!(list.as_slice(), &["a".to_string()]);
    }

    #[test]
    fn duplicates_and_blanks_are_legal() {
        let mut list = TextList::new();
        list.push("same");
        list.push("same");
        list.push_blank();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn null_list_and_null_entries_decode_as_blank() {
        let empty: TextList = serde_json::from_value(json!(null)).unwrap();
        assert!(empty.is_empty());

        let list: TextList = serde_json::from_value(json!(["Visit", null, ""])).unwrap();
        assert_eq!(list.as_slice(), &["Visit".to_string(), String::new(), String::new()]);
        assert_eq!(serde_json::to_value(&list).unwrap(), json!(["Visit", "", ""]));
    }
}
