//! Dump a debug-representation of a [`MemoryDocument`].

use std::fmt::Write;

use super::MemoryDocument;
use crate::tree::NodeId;

const WHITESPACE_WIDTH: usize = 4;

impl MemoryDocument {
    /// Dumps the rendered tree, starting at the body.
    pub fn dump_debug(&self) -> String {
        self.dump_node(self.body)
    }

    /// Dumps the subtree rooted at `node`, one element per line.
    ///
    /// Returns an empty string if `node` does not exist.
    pub fn dump_node(&self, node: NodeId) -> String {
        let mut buf = String::new();
        self.debug_elem(node, &mut buf, 0);
        buf
    }

    fn debug_elem(&self, key: NodeId, buf: &mut String, depth: usize) {
        let Some(node) = self.nodes.get(key) else {
            return;
        };

        for _ in 0..depth * WHITESPACE_WIDTH {
            buf.push(' ');
        }

        buf.push('<');
        buf.push_str(&node.tag);
        buf.push('>');

        if let Some(text) = &node.text {
            // Writing into a `String` never fails.
            let _ = write!(buf, " {:?}", text);
        }

        buf.push('\n');

        for child in &node.children {
            self.debug_elem(*child, buf, depth + 1);
        }
    }
}
