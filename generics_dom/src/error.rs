use thiserror::Error;

use crate::tree::NodeId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum DomError {
    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),
    /// Inserting `child` would make a node its own ancestor.
    #[error("cannot append {child:?} to {parent:?}: child is an inclusive ancestor of parent")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
