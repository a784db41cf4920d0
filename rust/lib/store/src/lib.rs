//! Embedded document store.
//!
//! Each collection is one SQLite table holding the JSON document plus one
//! indexed column per reference field, so documents can be filtered by the
//! ids they point at without a query language.

pub mod collection;
pub mod error;
pub mod sqlite;
pub mod traits;

pub use collection::{Collection, Field, ID_KEY};
pub use error::StoreError;
pub use sqlite::SqliteStore;
pub use traits::{DocumentStore, Filter, UpdateCount};
