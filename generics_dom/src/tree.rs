use crate::element::{Body, Element};
use crate::error::DomError;

slotmap::new_key_type! {
    /// Identity of a node within a [`RenderTree`].
    pub struct NodeId;
}

/// The host render tree.
///
/// Nodes are created detached and become part of the rendered tree once they
/// are appended below [`RenderTree::body`].
pub trait RenderTree {
    /// Creates a new, detached element with the given `tag`.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Appends `child` as the last child of `parent`.
    ///
    /// If `child` already has a parent it is moved: it is first removed from
    /// its previous parent. Appending a node below itself or below one of its
    /// descendants fails with [`DomError::HierarchyRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] if either node does not belong to
    /// this tree.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError>;

    /// Sets the text label of `node`, replacing any previous label.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] if `node` does not belong to this tree.
    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DomError>;

    /// Returns the root element that is rendered by the host.
    fn body(&self) -> Element<Body>;
}
