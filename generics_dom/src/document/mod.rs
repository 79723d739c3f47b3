mod debug_dump;

use generics_tracing::trace_span;
use slotmap::SlotMap;

use crate::element::{Body, Element};
use crate::error::DomError;
use crate::tree::{NodeId, RenderTree};

/// An in-memory [`RenderTree`].
///
/// Nodes are never freed while the document is alive; a node that is not
/// reachable from [`body`](RenderTree::body) is simply not rendered.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    nodes: SlotMap<NodeId, Node>,
    body: NodeId,
}

#[derive(Clone, Debug)]
struct Node {
    tag: String,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

impl MemoryDocument {
    /// Creates a new document containing only an empty `<body>`.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(Node::new("body"));

        Self { nodes, body }
    }

    /// Returns the number of nodes in the document, including detached nodes
    /// and the body.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|n| n.tag.as_str())
    }

    pub fn text_content(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).and_then(|n| n.text.as_deref())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(node).map(|n| n.children.as_slice())
    }

    /// Returns `true` if `node` is `ancestor` or one of its descendants.
    pub fn is_inclusive_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut next = Some(node);
        while let Some(key) = next {
            if key == ancestor {
                return true;
            }

            next = self.parent(key);
        }

        false
    }

    /// Returns `true` if `node` is rendered, i.e. reachable from the body.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.is_inclusive_descendant(node, self.body)
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get_mut(node).and_then(|n| n.parent.take()) else {
            return;
        };

        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.children.retain(|key| *key != node);
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTree for MemoryDocument {
    fn create_element(&mut self, tag: &str) -> NodeId {
        let key = self.nodes.insert(Node::new(tag));
        tracing::trace!("created <{}> {:?}", tag, key);
        key
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let _span = trace_span!("MemoryDocument::append_child").entered();

        if !self.nodes.contains_key(parent) {
            return Err(DomError::UnknownNode(parent));
        }
        if !self.nodes.contains_key(child) {
            return Err(DomError::UnknownNode(child));
        }

        if self.is_inclusive_descendant(parent, child) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);

        // Both keys were checked above.
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);

        tracing::trace!("appended {:?} to {:?}", child, parent);
        Ok(())
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        let node = self
            .nodes
            .get_mut(node)
            .ok_or(DomError::UnknownNode(node))?;
        node.text = Some(text.to_owned());
        Ok(())
    }

    fn body(&self) -> Element<Body> {
        Element::new_unchecked(self.body)
    }
}
