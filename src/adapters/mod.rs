//! Storage adapter implementations.
//!
//! Three interchangeable [`TaskStore`] implementations sit behind the same
//! port: an in-memory store for tests and embedding fallback, a local
//! single-file JSON snapshot store, and a `PostgreSQL` row store.

pub mod local;
pub mod memory;
pub mod postgres;

use crate::config::StorageConfig;
use crate::ports::{TaskStore, TaskStoreResult};
use std::sync::Arc;

/// Builds the storage adapter selected by configuration.
///
/// # Errors
///
/// Returns [`crate::ports::TaskStoreError`] when the local data directory
/// cannot be opened or the database pool cannot be created.
pub fn store_from_config(storage: &StorageConfig) -> TaskStoreResult<Arc<dyn TaskStore>> {
    match storage {
        StorageConfig::Local { data_dir } => {
            let store = local::LocalSnapshotStore::open(data_dir)?;
            Ok(Arc::new(store))
        }
        StorageConfig::Remote { database_url } => {
            let store = postgres::PostgresTaskStore::connect(database_url)?;
            Ok(Arc::new(store))
        }
    }
}
