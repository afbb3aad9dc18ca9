//! Error types for item construction and scene mutation.

use thiserror::Error;

use crate::item::ItemKind;

/// Errors raised by item construction and scene mutation
#[derive(Error, Debug)]
pub enum ItemError {
    /// Curve arrays disagree in length
    #[error("curve arrays disagree in length: x has {x} samples, y has {y}")]
    CurveLengthMismatch { x: usize, y: usize },

    /// Scatter arrays disagree in length
    #[error("scatter arrays disagree in length: x has {x}, y has {y}, values has {values}")]
    ScatterLengthMismatch { x: usize, y: usize, values: usize },

    /// Replacement data would change an item's kind (and thus its identity)
    #[error("cannot replace {expected} data with {actual} data")]
    KindMismatch { expected: ItemKind, actual: ItemKind },

    /// No item with the given identity in the scene
    #[error("no {kind} item named '{legend}'")]
    UnknownItem { legend: String, kind: ItemKind },
}

/// Result type alias for item operations
pub type ItemResult<T> = Result<T, ItemError>;
