//! JSON-file-backed sample store.
//!
//! The whole collection lives in one JSON array on disk and in an
//! in-memory copy behind an `RwLock`. Reads serve from memory; every
//! mutation rewrites the full file while holding the write lock. A
//! missing, blank, or unparseable file is replaced with the built-in seed
//! set — logged, never surfaced to the caller.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use laudo_core::error::CoreError;
use laudo_core::sample::{ComparableSample, SampleInput};

use crate::seed::seed_samples;
use crate::SampleStore;

pub struct JsonFileStore {
    path: PathBuf,
    samples: RwLock<Vec<ComparableSample>>,
}

impl JsonFileStore {
    /// Open (or initialize) the store at `path`.
    ///
    /// Corrupt or missing data resets to the seed set and the seed is
    /// persisted immediately, so a subsequent clean read sees it.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();

        let samples = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<ComparableSample>>(&bytes) {
                Ok(samples) => samples,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "Sample store corrupt, resetting to seed data",
                    );
                    let seeded = seed_samples();
                    write_file(&path, &seeded).await?;
                    seeded
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Sample store missing, seeding");
                let seeded = seed_samples();
                write_file(&path, &seeded).await?;
                seeded
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Sample store unreadable, resetting to seed data",
                );
                let seeded = seed_samples();
                write_file(&path, &seeded).await?;
                seeded
            }
        };

        tracing::debug!(path = %path.display(), count = samples.len(), "Sample store opened");

        Ok(Self {
            path,
            samples: RwLock::new(samples),
        })
    }
}

/// Serialize and rewrite the backing file, creating parent directories
/// on first use.
async fn write_file(path: &Path, samples: &[ComparableSample]) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| CoreError::Internal(format!("Failed to create store directory: {err}")))?;
        }
    }

    let json = serde_json::to_vec_pretty(samples)
        .map_err(|err| CoreError::Internal(format!("Failed to serialize sample store: {err}")))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|err| CoreError::Internal(format!("Failed to write sample store: {err}")))
}

#[async_trait]
impl SampleStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<ComparableSample>, CoreError> {
        Ok(self.samples.read().await.clone())
    }

    async fn create(&self, input: SampleInput) -> Result<ComparableSample, CoreError> {
        let sample = input.into_sample(Uuid::new_v4())?;

        let mut samples = self.samples.write().await;
        // Persist the candidate state first; the in-memory copy only
        // changes once the rewrite succeeded, so a failed write never
        // leaves a record that would vanish on restart.
        let mut next = samples.clone();
        // Most recently created first.
        next.insert(0, sample.clone());
        write_file(&self.path, &next).await?;
        *samples = next;

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
        let mut next = samples.clone();
        next[index] = sample.clone();
        write_file(&self.path, &next).await?;
        *samples = next;

        Ok(sample)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let mut samples = self.samples.write().await;

        if !samples.iter().any(|s| s.id == id) {
            return Ok(());
        }

        let next: Vec<ComparableSample> =
            samples.iter().filter(|s| s.id != id).cloned().collect();
        write_file(&self.path, &next).await?;
        *samples = next;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
