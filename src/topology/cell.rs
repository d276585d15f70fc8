use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a cell in a [`Complex`](super::Complex).
///
/// Ids are issued in increasing order and a complex never hands out the
/// same id twice, not even after a snapshot taken earlier is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(u64);

impl CellId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of the id.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The closed set of cell kinds of a vector animation complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellKind {
    KeyVertex,
    KeyEdge,
    KeyFace,
    InbetweenVertex,
    InbetweenEdge,
    InbetweenFace,
}

impl CellKind {
    /// All kinds, in declaration order.
    pub const ALL: [CellKind; 6] = [
        CellKind::KeyVertex,
        CellKind::KeyEdge,
        CellKind::KeyFace,
        CellKind::InbetweenVertex,
        CellKind::InbetweenEdge,
        CellKind::InbetweenFace,
    ];

    /// Returns `true` for cells that live at a single frame.
    #[must_use]
    pub fn is_key(self) -> bool {
        matches!(self, Self::KeyVertex | Self::KeyEdge | Self::KeyFace)
    }

    /// Returns `true` for cells that span the frames between two key cells.
    #[must_use]
    pub fn is_inbetween(self) -> bool {
        !self.is_key()
    }

    /// Topological dimension: 0 for vertices, 1 for edges, 2 for faces.
    #[must_use]
    pub fn dimension(self) -> u8 {
        match self {
            Self::KeyVertex | Self::InbetweenVertex => 0,
            Self::KeyEdge | Self::InbetweenEdge => 1,
            Self::KeyFace | Self::InbetweenFace => 2,
        }
    }

    /// Returns the key kind of the same dimension.
    #[must_use]
    pub fn key_counterpart(self) -> CellKind {
        match self.dimension() {
            0 => Self::KeyVertex,
            1 => Self::KeyEdge,
            _ => Self::KeyFace,
        }
    }

    /// Returns the inbetween kind of the same dimension.
    #[must_use]
    pub fn inbetween_counterpart(self) -> CellKind {
        match self.dimension() {
            0 => Self::InbetweenVertex,
            1 => Self::InbetweenEdge,
            _ => Self::InbetweenFace,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeyVertex => "key vertex",
            Self::KeyEdge => "key edge",
            Self::KeyFace => "key face",
            Self::InbetweenVertex => "inbetween vertex",
            Self::InbetweenEdge => "inbetween edge",
            Self::InbetweenFace => "inbetween face",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_inbetween_partition_kinds() {
        let keys = CellKind::ALL.iter().filter(|k| k.is_key()).count();
        let inbetweens = CellKind::ALL.iter().filter(|k| k.is_inbetween()).count();
        assert_eq!(keys, 3);
        assert_eq!(inbetweens, 3);
    }

    #[test]
    fn counterparts_share_dimension() {
        for kind in CellKind::ALL {
            assert_eq!(kind.key_counterpart().dimension(), kind.dimension());
            assert_eq!(kind.inbetween_counterpart().dimension(), kind.dimension());
            assert!(kind.key_counterpart().is_key());
            assert!(kind.inbetween_counterpart().is_inbetween());
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(CellKind::KeyEdge.to_string(), "key edge");
        assert_eq!(CellKind::InbetweenFace.to_string(), "inbetween face");
        assert_eq!(CellId::from_raw(12).to_string(), "#12");
    }

    #[test]
    fn ids_order_by_issue() {
        assert!(CellId::from_raw(3) < CellId::from_raw(10));
        assert_eq!(CellId::from_raw(7).raw(), 7);
    }
}
