//! Tuiter module: users, tuits and the relations between them.
//!
//! # Resources
//!
//! - **User**: account and profile
//! - **Tuit**: post owned by one user
//! - **Like / Dislike**: user to tuit reactions
//! - **Follow**: directed user to user link
//! - **Bookmark**: user saving a tuit
//! - **Message**: direct message between two users
//!
//! Relations store bare ids. Reads that list relations expand the ids into
//! full documents; a deleted target expands to `null`. Nothing cascades.
//!
//! # Usage
//!
//! ```ignore
//! let store = Arc::new(SqliteStore::open(path)?);
//! let module = TuiterModule::new(store)?;
//! let router = module.routes(); // Merge at the root
//! ```

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use tuiter_core::{Module, ServiceError};
use tuiter_store::DocumentStore;

use crate::service::TuiterService;

/// Tuiter module implementing the Module trait.
pub struct TuiterModule {
    service: Arc<TuiterService>,
}

impl TuiterModule {
    /// Create the module, initializing every collection in `store`.
    pub fn new(store: Arc<dyn DocumentStore>) -> Result<Self, ServiceError> {
        let service = TuiterService::new(store).map_err(ServiceError::from)?;
        Ok(Self { service })
    }

    pub fn service(&self) -> &Arc<TuiterService> {
        &self.service
    }
}

impl Module for TuiterModule {
    fn name(&self) -> &str {
        "tuiter"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
