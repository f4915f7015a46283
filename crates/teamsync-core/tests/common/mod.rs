//! Shared test double: an in-memory bridge that implements the remote
//! schema evolution contract the engine assumes of the real one.
//!
//! - An upsert row with a column name not yet present in the collection
//!   appends the column, initializing existing rows' value to empty.
//! - Upsert updates the FIRST row whose identifying-column value equals
//!   the payload's value, appending a new row only if no match is found.
//! - Delete removes the first row whose identifying value matches.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde_json::{json, Value};
use teamsync_core::bridge::{Action, Bridge, PushRequest, Snapshot};
use teamsync_core::error::BridgeError;

/// One sheet tab: an evolving column set plus rows keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl Sheet {
    fn ensure_column(&mut self, column: &str) {
        if self.columns.iter().any(|c| c == column) {
            return;
        }
        self.columns.push(column.to_string());
        for row in &mut self.rows {
            row.insert(column.to_string(), String::new());
        }
    }

    fn apply_upsert(&mut self, id_column: &str, data: &[(String, String)]) {
        for (column, _) in data {
            self.ensure_column(column);
        }

        let id_value = data
            .iter()
            .find(|(column, _)| column == id_column)
            .map(|(_, value)| value.clone())
            .unwrap_or_default();

        let position = self
            .rows
            .iter()
            .position(|row| row.get(id_column).is_some_and(|v| *v == id_value));

        match position {
            Some(index) => {
                for (column, value) in data {
                    self.rows[index].insert(column.clone(), value.clone());
                }
            }
            None => {
                let mut row: BTreeMap<String, String> = self
                    .columns
                    .iter()
                    .map(|c| (c.clone(), String::new()))
                    .collect();
                for (column, value) in data {
                    row.insert(column.clone(), value.clone());
                }
                self.rows.push(row);
            }
        }
    }

    fn apply_delete(&mut self, id_column: &str, id_value: &str) {
        if let Some(index) = self
            .rows
            .iter()
            .position(|row| row.get(id_column).is_some_and(|v| v == id_value))
        {
            self.rows.remove(index);
        }
    }
}

/// In-memory bridge double. Records every wire payload it accepts so
/// tests can assert on the exact request shape.
#[derive(Debug, Default)]
pub struct FakeBridge {
    sheets: RefCell<BTreeMap<String, Sheet>>,
    pub wire_log: RefCell<Vec<Value>>,
}

impl FakeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(&self, name: &str) -> Sheet {
        self.sheets.borrow().get(name).cloned().unwrap_or_default()
    }

    pub fn row_count(&self, name: &str) -> usize {
        self.sheet(name).rows.len()
    }

    /// Seed a sheet directly, bypassing the push path.
    pub fn seed(&self, name: &str, columns: &[&str], rows: &[&[&str]]) {
        let mut sheet = Sheet {
            columns: columns.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        };
        for cells in rows {
            let row = columns
                .iter()
                .map(ToString::to_string)
                .zip(cells.iter().map(ToString::to_string))
                .collect();
            sheet.rows.push(row);
        }
        self.sheets.borrow_mut().insert(name.to_string(), sheet);
    }

    fn collection_json(&self, name: &str) -> Value {
        let rows: Vec<Value> = self
            .sheet(name)
            .rows
            .iter()
            .map(|row| {
                Value::Object(
                    row.iter()
                        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                        .collect(),
                )
            })
            .collect();
        Value::Array(rows)
    }
}

impl Bridge for FakeBridge {
    fn pull(&self) -> Result<Snapshot, BridgeError> {
        let body = json!({
            "tasks": self.collection_json("Tasks"),
            "members": self.collection_json("Team Members"),
            "projects": self.collection_json("Projects"),
            "status": self.collection_json("Status"),
            "priority": self.collection_json("Priority"),
        });
        serde_json::from_value(body).map_err(|err| BridgeError::MalformedSnapshot(err.to_string()))
    }

    fn push(&self, request: &PushRequest) -> Result<(), BridgeError> {
        let wire = serde_json::to_value(request)
            .map_err(|err| BridgeError::Transport(err.to_string()))?;
        self.wire_log.borrow_mut().push(wire.clone());

        let data: Vec<(String, String)> = request
            .data
            .columns()
            .filter_map(|column| request.data.get(column).map(|v| (column.to_string(), v)))
            .collect();

        let mut sheets = self.sheets.borrow_mut();
        let sheet = sheets.entry(request.target_sheet.to_string()).or_default();
        match request.action {
            Action::Upsert => sheet.apply_upsert(request.id_column, &data),
            Action::Delete => {
                let id_value = data
                    .iter()
                    .find(|(column, _)| column == request.id_column)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default();
                sheet.apply_delete(request.id_column, &id_value);
            }
        }
        Ok(())
    }
}
