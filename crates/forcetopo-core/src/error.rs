// ── Core error types ──
//
// Errors surfaced to view code. Toggle parsing and node-store mutations
// are the only fallible paths; stepping a typed toggle never fails.

use thiserror::Error;

use crate::model::NodeType;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Toggle errors ────────────────────────────────────────────────
    #[error("Invalid {toggle} value: {value}")]
    InvalidToggle { toggle: &'static str, value: String },

    // ── Store errors ─────────────────────────────────────────────────
    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    #[error("Node {id} is a {found}, expected a {expected}")]
    NodeTypeMismatch {
        id: String,
        expected: NodeType,
        found: NodeType,
    },

    // ── Payload errors ───────────────────────────────────────────────
    #[error("Deserialization error: {message}")]
    Deserialization { message: String },
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization {
            message: err.to_string(),
        }
    }
}
