//! Node identifiers.
//!
//! A [`NodeId`] is the position of a node in its graph's node vector, handed
//! out in insertion order.  Nodes are never removed, so an id stays valid for
//! the life of the graph that issued it.

use std::fmt;
use std::num::TryFromIntError;

/// Index of a node in a `MapGraph`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Position in the node vector.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<NodeId> for usize {
    #[inline(always)]
    fn from(id: NodeId) -> usize {
        id.index()
    }
}

/// Fails once a graph holds more nodes than a `u32` can number.
impl TryFrom<usize> for NodeId {
    type Error = TryFromIntError;

    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
