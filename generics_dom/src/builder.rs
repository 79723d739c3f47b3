//! The component builder.
//!
//! [`build`] combines an optional root element with an optional list of
//! children into a [`Container`]:
//!
//! ```
//! use generics_dom::element::{ListItem, OrderedList};
//! use generics_dom::{build, Container, CreateElement, Element, HtmlElement, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let list = Element::<OrderedList>::create(&mut doc);
//! let items = [
//!     Element::<ListItem>::create(&mut doc),
//!     Element::<ListItem>::create(&mut doc),
//! ];
//!
//! let inner = build(&mut doc, Some(list), Some(items)).unwrap();
//! let root = Container::new(&mut doc).element;
//! let outer = build(&mut doc, Some(root), Some([inner.element])).unwrap();
//!
//! assert_eq!(doc.children(list.node()).unwrap().len(), 2);
//! assert_eq!(doc.children(outer.element.node()), Some(&[list.node()][..]));
//! ```

use generics_tracing::trace_span;

use crate::element::{CreateElement, Div, Element, ElementList, HtmlElement};
use crate::error::DomError;
use crate::tree::RenderTree;

/// A root element together with the children it was built with.
///
/// `children` is `None` if the container was built without children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container<T = Element<Div>, U = Vec<T>> {
    pub element: T,
    pub children: Option<U>,
}

impl Container {
    /// Creates a container around a fresh `<div>` without children.
    pub fn new<D>(doc: &mut D) -> Self
    where
        D: RenderTree + ?Sized,
    {
        Self::create(doc)
    }
}

impl<T, U> Container<T, U>
where
    T: CreateElement,
    U: ElementList,
{
    /// Creates a container around a fresh element of type `T` without
    /// children.
    pub fn create<D>(doc: &mut D) -> Self
    where
        D: RenderTree + ?Sized,
    {
        Self {
            element: T::create(doc),
            children: None,
        }
    }

    /// Creates a container around `element`, appending all `children` to it.
    ///
    /// # Errors
    ///
    /// Returns any error of [`RenderTree::append_child`].
    pub fn with_children<D>(doc: &mut D, element: T, children: U) -> Result<Self, DomError>
    where
        D: RenderTree + ?Sized,
    {
        build(doc, Some(element), Some(children))
    }
}

/// Builds a [`Container`] from an optional root `element` and optional
/// `children`.
///
/// - Without `element` a fresh element of type `T` is created through `doc`,
///   distinct from every other node.
/// - With both `element` and `children`, every child is appended to `element`
///   in order using [`RenderTree::append_child`].
/// - With `children` but no `element`, the children are stored in the
///   container but not attached to the fresh element.
///
/// # Errors
///
/// Returns the first error of [`RenderTree::append_child`]. Children appended
/// before the failing one stay attached.
pub fn build<D, T, U>(
    doc: &mut D,
    element: Option<T>,
    children: Option<U>,
) -> Result<Container<T, U>, DomError>
where
    D: RenderTree + ?Sized,
    T: CreateElement,
    U: ElementList,
{
    let _span = trace_span!("builder::build").entered();

    let element = match element {
        Some(element) => {
            if let Some(children) = &children {
                for child in children.elements() {
                    doc.append_child(element.node(), child.node())?;
                }
            }

            element
        }
        None => {
            if children.is_some() {
                tracing::debug!("building fresh element, children are not attached");
            }

            T::create(doc)
        }
    };

    Ok(Container { element, children })
}
