//! Flat remote rows: a column-name to scalar-cell mapping.
//!
//! The bridge emits cells as strings or numbers depending on how the sheet
//! was typed by its human editors; everything is coerced to its string
//! rendering on the way in. Encoding only ever writes strings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One remote row. Wraps the raw JSON object so cell access is uniform
/// regardless of how the sheet typed the column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Cell text for `column`, with numbers and booleans coerced to their
    /// string rendering. `None` for missing columns and non-scalar cells.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<String> {
        match self.0.get(column)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Cell text for `column`, treating empty strings as absent. The codec
    /// fallback rules key off this.
    #[must_use]
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).filter(|s| !s.is_empty())
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.0
            .insert(column.to_string(), Value::String(value.into()));
    }

    /// Column names present in this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Row;
    use serde_json::json;

    fn row_from(value: serde_json::Value) -> Row {
        serde_json::from_value(value).expect("row JSON")
    }

    #[test]
    fn numbers_coerce_to_strings() {
        let row = row_from(json!({"ID": 42, "Title": "Design"}));
        assert_eq!(row.get("ID").as_deref(), Some("42"));
        assert_eq!(row.get("Title").as_deref(), Some("Design"));
    }

    #[test]
    fn missing_and_null_cells_are_absent() {
        let row = row_from(json!({"Title": null}));
        assert_eq!(row.get("Title"), None);
        assert_eq!(row.get("Description"), None);
    }

    #[test]
    fn text_treats_empty_string_as_absent() {
        let row = row_from(json!({"Assignee": "", "Project": "Launch"}));
        assert_eq!(row.text("Assignee"), None);
        assert_eq!(row.text("Project").as_deref(), Some("Launch"));
    }

    #[test]
    fn set_then_serialize_round_trips() {
        let mut row = Row::new();
        row.set("Name", "Q4 Marketing");
        let json = serde_json::to_value(&row).expect("serialize");
        assert_eq!(json, json!({"Name": "Q4 Marketing"}));
    }

    #[test]
    fn columns_lists_present_names() {
        let row = row_from(json!({"ID": "t1", "Title": "Design"}));
        let cols: Vec<&str> = row.columns().collect();
        assert!(cols.contains(&"ID"));
        assert!(cols.contains(&"Title"));
    }
}
