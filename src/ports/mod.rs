//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the session
//! service.

pub mod store;

pub use store::{
    TaskChange, TaskFieldUpdate, TaskStore, TaskStoreError, TaskStoreResult, WriteFailurePolicy,
};
