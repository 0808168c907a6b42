use bytes::Bytes;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// One file held in memory, keyed in the store by its client-supplied name.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub name: String,
    pub content: Bytes,
    pub content_type: String,
}

impl FilePayload {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<Bytes>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            content_type: content_type.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Non-empty, ordered set of payloads from one request.
#[derive(Debug, Clone)]
pub struct UploadBatch {
    payloads: Vec<FilePayload>,
}

impl UploadBatch {
    /// Returns `None` for an empty set; an empty batch never reaches the orchestrator.
    pub fn new(payloads: Vec<FilePayload>) -> Option<Self> {
        if payloads.is_empty() {
            None
        } else {
            Some(Self { payloads })
        }
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.payloads.iter().map(FilePayload::size).sum()
    }

    pub fn payloads(&self) -> &[FilePayload] {
        &self.payloads
    }

    pub fn into_payloads(self) -> Vec<FilePayload> {
        self.payloads
    }
}

/// A single failed store write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error uploading file {name}: {cause}")]
pub struct UploadFailure {
    pub name: String,
    pub cause: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success { name: String },
    Failure(UploadFailure),
}

impl UploadOutcome {
    pub fn name(&self) -> &str {
        match self {
            UploadOutcome::Success { name } => name,
            UploadOutcome::Failure(failure) => &failure.name,
        }
    }
}

/// Verdict for a whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchResult {
    AllSucceeded { count: usize },
    SomeFailed { failures: Vec<UploadFailure> },
}

impl BatchResult {
    /// Folds per-file outcomes into a verdict, keeping failures in the order given.
    pub fn from_outcomes(outcomes: Vec<UploadOutcome>) -> Self {
        let count = outcomes.len();
        let failures: Vec<UploadFailure> = outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                UploadOutcome::Success { .. } => None,
                UploadOutcome::Failure(failure) => Some(failure),
            })
            .collect();

        if failures.is_empty() {
            BatchResult::AllSucceeded { count }
        } else {
            BatchResult::SomeFailed { failures }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchResult::AllSucceeded { .. })
    }
}

/// Every failure of a batch, rendered as one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureList(pub Vec<UploadFailure>);

impl fmt::Display for FailureList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}
