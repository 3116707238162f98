//! # trainboard-store
//!
//! In-memory store for the training dashboard.
//!
//! The crate exposes a synchronous [`Store`] handle that owns one
//! [`Snapshot`] of the five collections (departments, employees, trainings,
//! training/department links, participants) and provides typed CRUD helpers
//! for every domain model.  Department membership changes on a training go
//! through the [`reconcile`] engine; read-only shapes for the UI live in
//! [`views`].

pub mod departments;
pub mod employees;
pub mod models;
pub mod participants;
pub mod reconcile;
pub mod requests;
pub mod sample;
pub mod snapshot;
pub mod store;
pub mod trainings;
pub mod views;

mod error;

pub use error::{Result, StoreError};
pub use models::*;
pub use reconcile::MembershipChange;
pub use requests::*;
pub use snapshot::Snapshot;
pub use store::Store;
pub use views::{CatalogSummary, EmployeeTraining, RosterEntry, TrainingCard, TrainingQuery, TrainingStats};
