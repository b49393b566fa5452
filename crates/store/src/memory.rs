//! In-memory sample store for tests and embedders.
//!
//! Implements the same contract as [`crate::JsonFileStore`] minus the
//! disk persistence, so the valuation engine and the HTTP surface can be
//! exercised without touching the filesystem.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use laudo_core::error::CoreError;
use laudo_core::sample::{ComparableSample, SampleInput};

use crate::SampleStore;

#[derive(Default)]
pub struct MemoryStore {
    samples: RwLock<Vec<ComparableSample>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with `samples` (listed most-recent-first as given).
    pub fn with_samples(samples: Vec<ComparableSample>) -> Self {
        Self {
            samples: RwLock::new(samples),
        }
    }
}

#[async_trait]
impl SampleStore for MemoryStore {
    async fn list(&self) -> Result<Vec<ComparableSample>, CoreError> {
        Ok(self.samples.read().await.clone())
    }

    async fn create(&self, input: SampleInput) -> Result<ComparableSample, CoreError> {
        let sample = input.into_sample(Uuid::new_v4())?;
        self.samples.write().await.insert(0, sample.clone());
        Ok(sample)
    }

    async fn update(&self, id: Uuid, input: SampleInput) -> Result<ComparableSample, CoreError> {
        let mut samples = self.samples.write().await;
        let index = samples
            .iter()
            .position(|s| s.id == id)
            .ok_or(CoreError::NotFound {
                entity: "sample",
                id,
            })?;

        let sample = input.into_sample(id)?;
        samples[index] = sample.clone();
        Ok(sample)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.samples.write().await.retain(|s| s.id != id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
