//! A minimal render tree and a typed component builder on top of it.
//!
//! The tree itself is an injected collaborator: everything here is written
//! against [`RenderTree`], with [`MemoryDocument`] as the in-memory
//! implementation.

pub mod builder;
pub mod document;
pub mod element;
pub mod error;
pub mod tree;

pub use builder::{build, Container};
pub use document::MemoryDocument;
pub use element::{AnyElement, CreateElement, Element, ElementKind, ElementList, HtmlElement};
pub use error::DomError;
pub use tree::{NodeId, RenderTree};
