//! Serialization and deserialization of the persisted task list.
//!
//! The snapshot is a JSON array of [`Task`] records. JSON (rather than a
//! binary format) is part of the storage contract: the blob stays readable
//! and hand-editable, and the field layout is pinned by the serde tests in
//! [`crate::task`].

use crate::task::Task;

/// Error type for snapshot encode/decode operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Serialization of the task list failed.
    #[error("snapshot encode error: {0}")]
    Encode(String),
    /// The blob is not a valid task list.
    #[error("snapshot decode error: {0}")]
    Decode(String),
}

/// Encodes a task list into a JSON byte vector.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if the list cannot be serialized.
pub fn encode(tasks: &[Task]) -> Result<Vec<u8>, SnapshotError> {
    serde_json::to_vec(tasks).map_err(|e| SnapshotError::Encode(e.to_string()))
}

/// Decodes a task list from JSON bytes.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`] if the bytes are not a well-formed
/// task array.
pub fn decode(bytes: &[u8]) -> Result<Vec<Task>, SnapshotError> {
    serde_json::from_slice(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
}
