//! Sample store: the durable keyed collection of comparable transactions.
//!
//! The engine and the admin CRUD surface both receive a single injected
//! [`SampleStore`] handle rather than reaching for a process-wide
//! singleton, which keeps the valuation engine testable against
//! [`MemoryStore`]. The production implementation, [`JsonFileStore`],
//! keeps the whole collection in one JSON file and rewrites it on every
//! mutation (last-write-wins; the deployment is single-writer in
//! practice).

mod json_file;
mod memory;
pub mod seed;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use uuid::Uuid;

use laudo_core::error::CoreError;
use laudo_core::sample::{ComparableSample, SampleInput};

/// Read/write contract of the comparable-sample collection.
///
/// `list` returns samples in insertion order, most recently created first;
/// the ordering matters for display, not for aggregation. `delete` is
/// idempotent because the confirm-delete UI flow can double-submit.
#[async_trait]
pub trait SampleStore: Send + Sync {
    async fn list(&self) -> Result<Vec<ComparableSample>, CoreError>;

    /// Validate, compute `unit_price`, assign a fresh id, and persist.
    /// No partial record is persisted on validation failure.
    async fn create(&self, input: SampleInput) -> Result<ComparableSample, CoreError>;

    /// Full replace by id, recomputing `unit_price`. `NotFound` when the
    /// id is absent; store state is unchanged in that case.
    async fn update(&self, id: Uuid, input: SampleInput) -> Result<ComparableSample, CoreError>;

    /// Remove by id. Absent ids are not an error.
    async fn delete(&self, id: Uuid) -> Result<(), CoreError>;
}
