use thiserror::Error;

use crate::{session::Mode, vertex::VertexId};

/// Coarse classification of an [`EditErr`], for hosts that only branch on
/// the kind of failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidState,
    NotFound,
    InvalidArgument,
}

/// Errors reported by the editing engine.
///
/// A failing call leaves the session exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EditErr {
    #[error("`{op}` is not valid while the session is {mode:?}")]
    InvalidState { op: &'static str, mode: Mode },

    #[error("no live vertex with handle {}", .0.index())]
    NotFound(VertexId),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl EditErr {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditErr::InvalidState { .. } => ErrorKind::InvalidState,
            EditErr::NotFound(_) => ErrorKind::NotFound,
            EditErr::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}
