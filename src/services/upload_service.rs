use crate::models::{BatchResult, FilePayload, UploadBatch, UploadFailure, UploadOutcome};
use crate::services::storage::StorageService;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Fans a batch out to the object store and folds the results into one verdict.
pub struct UploadService {
    storage: Arc<dyn StorageService>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    /// Writes every payload concurrently and waits for all of them.
    ///
    /// Each write runs on its own task, so a failing sibling never cancels
    /// the others and dropping the returned future does not abort writes
    /// already in flight. Outcomes are collected in batch order regardless
    /// of completion order.
    pub async fn upload_batch(&self, batch: UploadBatch) -> BatchResult {
        let started = Instant::now();
        let total = batch.len();
        info!(
            "📦 Uploading {} file(s), {} bytes to bucket '{}'",
            total,
            batch.total_bytes(),
            self.storage.bucket()
        );

        let handles: Vec<_> = batch
            .into_payloads()
            .into_iter()
            .map(|payload| {
                let name = payload.name.clone();
                let storage = self.storage.clone();
                (name, tokio::spawn(write_one(storage, payload)))
            })
            .collect();

        let (names, tasks): (Vec<String>, Vec<_>) = handles.into_iter().unzip();

        let outcomes: Vec<UploadOutcome> = join_all(tasks)
            .await
            .into_iter()
            .zip(names)
            .map(|(joined, name)| match joined {
                Ok(outcome) => outcome,
                Err(e) => {
                    let cause = if e.is_panic() {
                        "upload task panicked".to_string()
                    } else {
                        e.to_string()
                    };
                    UploadOutcome::Failure(UploadFailure { name, cause })
                }
            })
            .collect();

        for outcome in &outcomes {
            if let UploadOutcome::Failure(failure) = outcome {
                warn!("❌ {}", failure);
            }
        }

        let result = BatchResult::from_outcomes(outcomes);
        match &result {
            BatchResult::AllSucceeded { count } => info!(
                "✅ Uploaded {} file(s) in {:?}",
                count,
                started.elapsed()
            ),
            BatchResult::SomeFailed { failures } => warn!(
                "⚠️  {} of {} file(s) failed in {:?}",
                failures.len(),
                total,
                started.elapsed()
            ),
        }
        result
    }
}

async fn write_one(storage: Arc<dyn StorageService>, payload: FilePayload) -> UploadOutcome {
    let FilePayload {
        name,
        content,
        content_type,
    } = payload;

    match storage.put_object(&name, content, &content_type).await {
        Ok(()) => UploadOutcome::Success { name },
        Err(e) => UploadOutcome::Failure(UploadFailure {
            name,
            cause: e.to_string(),
        }),
    }
}
