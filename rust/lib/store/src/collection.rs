use serde_json::Value;

/// Document key holding the id.
pub const ID_KEY: &str = "_id";

/// A filterable document field and the column that mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Top-level key in the JSON document (e.g. `likedBy`).
    pub key: &'static str,
    /// SQL column holding a copy of the value (e.g. `liked_by`).
    pub column: &'static str,
}

impl Field {
    pub const fn new(key: &'static str, column: &'static str) -> Self {
        Self { key, column }
    }
}

/// A named collection of documents.
///
/// Only the declared fields can appear in a filter. Their values are
/// extracted from the document on every insert and replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Collection {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    /// Column backing a document key, if the key is filterable.
    /// `_id` always maps to the primary key.
    pub fn column(&self, key: &str) -> Option<&'static str> {
        if key == ID_KEY {
            return Some("id");
        }
        self.fields.iter().find(|f| f.key == key).map(|f| f.column)
    }

    /// DDL statements creating the table and one index per field.
    pub fn ddl(&self) -> Vec<String> {
        let mut columns = vec![
            "id TEXT PRIMARY KEY".to_string(),
            "data TEXT NOT NULL".to_string(),
        ];
        columns.extend(self.fields.iter().map(|f| format!("{} TEXT", f.column)));

        let mut statements = vec![format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.name,
            columns.join(", "),
        )];
        for field in self.fields {
            statements.push(format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_{col} ON {table}({col})",
                table = self.name,
                col = field.column,
            ));
        }
        statements
    }

    /// Values of the declared fields in `doc`, in declaration order.
    ///
    /// Missing or non-string values map to `None` (stored as NULL).
    pub fn field_values(&self, doc: &Value) -> Vec<Option<String>> {
        self.fields
            .iter()
            .map(|f| doc.get(f.key).and_then(Value::as_str).map(str::to_string))
            .collect()
    }
}
