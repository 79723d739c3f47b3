//! Typed element handles.
//!
//! An [`Element<K>`] is a copyable handle to a node whose tag is known at
//! compile time through the marker `K`. [`AnyElement`] is the untyped form
//! used when a list mixes different tags.

use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::DomError;
use crate::tree::{NodeId, RenderTree};

/// Marker for an element tag.
pub trait ElementKind: 'static {
    const TAG: &'static str;
}

macro_rules! element_kinds {
    ($($(#[$meta:meta])* $name:ident => $tag:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
            pub enum $name {}

            impl ElementKind for $name {
                const TAG: &'static str = $tag;
            }
        )*
    };
}

element_kinds! {
    /// `<body>`
    Body => "body",
    /// `<div>`
    Div => "div",
    /// `<span>`
    Span => "span",
    /// `<p>`
    Paragraph => "p",
    /// `<ol>`
    OrderedList => "ol",
    /// `<ul>`
    UnorderedList => "ul",
    /// `<li>`
    ListItem => "li",
}

/// A handle to an element node.
pub trait HtmlElement {
    fn node(&self) -> NodeId;

    #[inline]
    fn as_any(&self) -> AnyElement {
        AnyElement::new(self.node())
    }
}

/// An element handle that can be created fresh in a [`RenderTree`].
pub trait CreateElement: HtmlElement + Sized {
    fn create<D>(doc: &mut D) -> Self
    where
        D: RenderTree + ?Sized;
}

/// An ordered sequence of element handles.
pub trait ElementList {
    type Item: HtmlElement;

    fn elements(&self) -> &[Self::Item];
}

/// A typed handle to an element with tag `K::TAG`.
pub struct Element<K> {
    node: NodeId,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Element<K>
where
    K: ElementKind,
{
    /// Wraps `node` without checking its tag.
    ///
    /// The caller must make sure that `node` was created with `K::TAG`.
    #[inline]
    pub const fn new_unchecked(node: NodeId) -> Self {
        Self {
            node,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub fn tag(&self) -> &'static str {
        K::TAG
    }

    pub fn append_child<D, E>(&self, doc: &mut D, child: &E) -> Result<(), DomError>
    where
        D: RenderTree + ?Sized,
        E: HtmlElement,
    {
        doc.append_child(self.node, child.node())
    }

    pub fn set_text_content<D>(&self, doc: &mut D, text: &str) -> Result<(), DomError>
    where
        D: RenderTree + ?Sized,
    {
        doc.set_text_content(self.node, text)
    }
}

impl<K> HtmlElement for Element<K>
where
    K: ElementKind,
{
    #[inline]
    fn node(&self) -> NodeId {
        self.node
    }
}

impl<K> CreateElement for Element<K>
where
    K: ElementKind,
{
    fn create<D>(doc: &mut D) -> Self
    where
        D: RenderTree + ?Sized,
    {
        Self::new_unchecked(doc.create_element(K::TAG))
    }
}

impl<K> Copy for Element<K> {}

impl<K> Clone for Element<K> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> PartialEq for Element<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<K> Eq for Element<K> {}

impl<K> Hash for Element<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl<K> Debug for Element<K>
where
    K: ElementKind,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &K::TAG)
            .field("node", &self.node)
            .finish()
    }
}

/// An element handle with an unknown tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnyElement {
    node: NodeId,
}

impl AnyElement {
    #[inline]
    pub const fn new(node: NodeId) -> Self {
        Self { node }
    }
}

impl HtmlElement for AnyElement {
    #[inline]
    fn node(&self) -> NodeId {
        self.node
    }
}

impl<K> From<Element<K>> for AnyElement
where
    K: ElementKind,
{
    #[inline]
    fn from(value: Element<K>) -> Self {
        value.as_any()
    }
}

impl<E> ElementList for Vec<E>
where
    E: HtmlElement,
{
    type Item = E;

    #[inline]
    fn elements(&self) -> &[E] {
        self
    }
}

impl<E, const N: usize> ElementList for [E; N]
where
    E: HtmlElement,
{
    type Item = E;

    #[inline]
    fn elements(&self) -> &[E] {
        self
    }
}

impl<E> ElementList for &[E]
where
    E: HtmlElement,
{
    type Item = E;

    #[inline]
    fn elements(&self) -> &[E] {
        self
    }
}

impl<E> ElementList for Box<[E]>
where
    E: HtmlElement,
{
    type Item = E;

    #[inline]
    fn elements(&self) -> &[E] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{AnyElement, CreateElement, Div, Element, HtmlElement, ListItem};
    use crate::document::MemoryDocument;

    #[test]
    fn create_uses_kind_tag() {
        let mut doc = MemoryDocument::new();
        let div = Element::<Div>::create(&mut doc);
        let li = Element::<ListItem>::create(&mut doc);

        assert_eq!(div.tag(), "div");
        assert_eq!(doc.tag(div.node()), Some("div"));
        assert_eq!(doc.tag(li.node()), Some("li"));
        assert_ne!(div.node(), li.node());
    }

    #[test]
    fn erase_keeps_identity() {
        let mut doc = MemoryDocument::new();
        let div = Element::<Div>::create(&mut doc);
        let any: AnyElement = div.into();

        assert_eq!(any.node(), div.node());
        assert_eq!(div.as_any(), any);
    }

    #[test]
    fn element_helpers() {
        let mut doc = MemoryDocument::new();
        let div = Element::<Div>::create(&mut doc);
        let li = Element::<ListItem>::create(&mut doc);

        div.append_child(&mut doc, &li).unwrap();
        li.set_text_content(&mut doc, "Hello").unwrap();

        assert_eq!(doc.children(div.node()), Some(&[li.node()][..]));
        assert_eq!(doc.text_content(li.node()), Some("Hello"));
    }
}
