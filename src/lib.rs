//! Tandem: the shared task list core for a two-person household.
//!
//! Each of the two fixed owners keeps an independent list of tasks with
//! text, completion state, an importance flag, and an optional deadline.
//! Tasks persist across sessions through an interchangeable storage
//! backend, and the session surfaces reminder prompts for outstanding
//! important tasks and toasts for newly overdue ones.
//!
//! # Architecture
//!
//! Tandem follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model and snapshot operations with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete storage implementations (in-memory, local
//!   snapshot file, `PostgreSQL`)
//! - **Services**: The task session and the reminder machinery
//!
//! # Modules
//!
//! - [`domain`]: Task shape, per-owner state container, display views
//! - [`ports`]: The unified storage contract
//! - [`adapters`]: Storage backends behind the contract
//! - [`services`]: Session orchestration, reminder scan and scheduler
//! - [`config`]: Backend selection and reminder cadence

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
