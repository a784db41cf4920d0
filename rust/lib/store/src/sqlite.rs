use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection};
use serde_json::Value;
use tracing::debug;

use crate::collection::Collection;
use crate::error::StoreError;
use tuiter_core::merge_patch;

use crate::traits::{DocumentStore, Filter, UpdateCount};

/// SqliteStore is a DocumentStore backed by rusqlite (bundled SQLite).
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a SQLite database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Connection(e.to_string()))?;

        // Enable WAL mode for better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite database (useful for tests).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

fn select(conn: &Connection, sql: &str, params: Vec<SqlValue>) -> Result<Vec<Value>, StoreError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| StoreError::Query(e.to_string()))?;

    let rows = stmt
        .query_map(params_from_iter(params), |row| row.get::<_, String>(0))
        .map_err(|e| StoreError::Query(e.to_string()))?;

    let mut docs = Vec::new();
    for row in rows {
        let data = row.map_err(|e| StoreError::Query(e.to_string()))?;
        docs.push(parse_document(&data)?);
    }
    Ok(docs)
}

fn execute(conn: &Connection, sql: &str, params: Vec<SqlValue>) -> Result<u64, StoreError> {
    let affected = conn
        .execute(sql, params_from_iter(params))
        .map_err(|e| StoreError::Execution(e.to_string()))?;
    Ok(affected as u64)
}

fn parse_document(data: &str) -> Result<Value, StoreError> {
    serde_json::from_str(data).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn to_sql(value: Option<String>) -> SqlValue {
    match value {
        Some(s) => SqlValue::Text(s),
        None => SqlValue::Null,
    }
}

/// Build a ` WHERE ...` clause (or an empty string) from an equality filter.
/// Placeholders are numbered from 1.
fn where_clause(
    collection: &Collection,
    filter: Filter<'_>,
) -> Result<(String, Vec<SqlValue>), StoreError> {
    let mut clauses = Vec::with_capacity(filter.len());
    let mut params = Vec::with_capacity(filter.len());

    for (i, (key, value)) in filter.iter().enumerate() {
        let column = collection.column(key).ok_or_else(|| {
            StoreError::Query(format!(
                "{}: field '{}' is not filterable",
                collection.name, key
            ))
        })?;
        clauses.push(format!("{} = ?{}", column, i + 1));
        params.push(SqlValue::Text(value.to_string()));
    }

    let sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };
    Ok((sql, params))
}

impl DocumentStore for SqliteStore {
    fn ensure_collection(&self, collection: &Collection) -> Result<(), StoreError> {
        let conn = self.lock()?;
        for stmt in collection.ddl() {
            conn.execute(&stmt, [])
                .map_err(|e| StoreError::Execution(e.to_string()))?;
        }
        debug!(collection = collection.name, "collection ready");
        Ok(())
    }

    fn insert(&self, collection: &Collection, id: &str, doc: &Value) -> Result<(), StoreError> {
        let data =
            serde_json::to_string(doc).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut cols = vec!["id", "data"];
        let mut params = vec![SqlValue::Text(id.to_string()), SqlValue::Text(data)];
        for (field, value) in collection.fields.iter().zip(collection.field_values(doc)) {
            cols.push(field.column);
            params.push(to_sql(value));
        }

        let placeholders: Vec<String> = (1..=params.len()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            collection.name,
            cols.join(", "),
            placeholders.join(", "),
        );

        execute(&*self.lock()?, &sql, params)?;
        Ok(())
    }

    fn find(&self, collection: &Collection, filter: Filter<'_>) -> Result<Vec<Value>, StoreError> {
        let (where_sql, params) = where_clause(collection, filter)?;
        let sql = format!(
            "SELECT data FROM {}{} ORDER BY rowid",
            collection.name, where_sql
        );
        select(&*self.lock()?, &sql, params)
    }

    fn find_one(
        &self,
        collection: &Collection,
        filter: Filter<'_>,
    ) -> Result<Option<Value>, StoreError> {
        let (where_sql, params) = where_clause(collection, filter)?;
        let sql = format!(
            "SELECT data FROM {}{} ORDER BY rowid LIMIT 1",
            collection.name, where_sql
        );
        Ok(select(&*self.lock()?, &sql, params)?.into_iter().next())
    }

    fn find_by_id(&self, collection: &Collection, id: &str) -> Result<Option<Value>, StoreError> {
        let sql = format!("SELECT data FROM {} WHERE id = ?1", collection.name);
        Ok(select(&*self.lock()?, &sql, vec![SqlValue::Text(id.to_string())])?
            .into_iter()
            .next())
    }

    fn update(&self, collection: &Collection, id: &str, patch: &Value) -> Result<UpdateCount, StoreError> {
        // Read, merge and write under one lock so concurrent patches compose.
        let conn = self.lock()?;
        let sql = format!("SELECT data FROM {} WHERE id = ?1", collection.name);
        let Some(current) = select(&conn, &sql, vec![SqlValue::Text(id.to_string())])?
            .into_iter()
            .next()
        else {
            return Ok(UpdateCount::default());
        };

        let mut next = current.clone();
        merge_patch(&mut next, patch);
        if next == current {
            return Ok(UpdateCount { matched: 1, modified: 0 });
        }

        let data =
            serde_json::to_string(&next).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let mut sets = vec!["data = ?1".to_string()];
        let mut params = vec![SqlValue::Text(data)];
        for (field, value) in collection.fields.iter().zip(collection.field_values(&next)) {
            params.push(to_sql(value));
            sets.push(format!("{} = ?{}", field.column, params.len()));
        }
        params.push(SqlValue::Text(id.to_string()));

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            collection.name,
            sets.join(", "),
            params.len(),
        );
        let modified = execute(&conn, &sql, params)?;
        Ok(UpdateCount { matched: 1, modified })
    }

    fn delete_one(&self, collection: &Collection, filter: Filter<'_>) -> Result<u64, StoreError> {
        let (where_sql, params) = where_clause(collection, filter)?;
        let sql = format!(
            "DELETE FROM {table} WHERE rowid = (SELECT rowid FROM {table}{where_sql} ORDER BY rowid LIMIT 1)",
            table = collection.name,
        );
        execute(&*self.lock()?, &sql, params)
    }

    fn delete_many(&self, collection: &Collection, filter: Filter<'_>) -> Result<u64, StoreError> {
        let (where_sql, params) = where_clause(collection, filter)?;
        let sql = format!("DELETE FROM {}{}", collection.name, where_sql);
        execute(&*self.lock()?, &sql, params)
    }

    fn count(&self, collection: &Collection, filter: Filter<'_>) -> Result<u64, StoreError> {
        let (where_sql, params) = where_clause(collection, filter)?;
        let sql = format!("SELECT COUNT(*) FROM {}{}", collection.name, where_sql);

        let conn = self.lock()?;
        let count: i64 = conn
            .query_row(&sql, params_from_iter(params), |row| row.get(0))
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(count as u64)
    }
}
