use thiserror::Error;

use crate::topology::{CellId, CellKind};

/// Top-level error type for the OpenVac cell kernel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VacError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by the complex when looking up or editing cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("unknown cell id: {0}")]
    UnknownCellId(CellId),

    #[error("cell {cell} is still referenced by {used_by:?}")]
    CellInUse { cell: CellId, used_by: Vec<CellId> },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors raised when a cell is handled as the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("expected a {expected} cell, found a {found} cell")]
    KindMismatch { expected: CellKind, found: CellKind },

    #[error("no handler for {0} cells")]
    UnhandledKind(CellKind),
}

/// Errors related to the convenience operations built on the complex.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl VacError {
    /// Returns `true` if this is an [`TopologyError::UnknownCellId`].
    #[must_use]
    pub fn is_unknown_cell(&self) -> bool {
        matches!(self, Self::Topology(TopologyError::UnknownCellId(_)))
    }

    /// Returns `true` if this is a [`TopologyError::CellInUse`].
    #[must_use]
    pub fn is_cell_in_use(&self) -> bool {
        matches!(self, Self::Topology(TopologyError::CellInUse { .. }))
    }

    /// Returns `true` if this is a [`TopologyError::InvalidTopology`].
    #[must_use]
    pub fn is_invalid_topology(&self) -> bool {
        matches!(self, Self::Topology(TopologyError::InvalidTopology(_)))
    }

    /// Returns `true` if this is a [`CastError::KindMismatch`].
    #[must_use]
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, Self::Cast(CastError::KindMismatch { .. }))
    }

    /// Returns `true` if this is a [`CastError::UnhandledKind`].
    #[must_use]
    pub fn is_unhandled_kind(&self) -> bool {
        matches!(self, Self::Cast(CastError::UnhandledKind(_)))
    }
}

/// Convenience type alias for results using [`VacError`].
pub type Result<T> = std::result::Result<T, VacError>;

/// Shorthand for an [`TopologyError::InvalidTopology`] wrapped in [`VacError`].
pub(crate) fn invalid(msg: impl Into<String>) -> VacError {
    TopologyError::InvalidTopology(msg.into()).into()
}
