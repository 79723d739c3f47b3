use generics_core::config::Demos;
use generics_dom::element::{Div, ListItem, OrderedList};
use generics_dom::{
    AnyElement, Container, CreateElement, Element, HtmlElement, MemoryDocument, RenderTree,
};
use generics_tracing::trace_span;

use super::DemoError;

pub fn run(config: &Demos) -> Result<(), DemoError> {
    let mut doc = MemoryDocument::new();

    let list = build_list(&mut doc, &config.list_items)?;
    println!("{:?}", list);

    let body = doc.body();
    body.append_child(&mut doc, &list.element)?;

    print!("{}", doc.dump_debug());
    Ok(())
}

/// Builds a `<div>` containing an `<ol>` with one `<li>` per item.
pub fn build_list<D>(
    doc: &mut D,
    items: &[String],
) -> Result<Container<Element<Div>, Vec<AnyElement>>, DemoError>
where
    D: RenderTree + ?Sized,
{
    let _span = trace_span!("demos::component::build_list").entered();

    let list = Element::<OrderedList>::create(doc);

    let mut children = Vec::with_capacity(items.len());
    for text in items {
        let item = Element::<ListItem>::create(doc);
        item.set_text_content(doc, text)?;
        children.push(item);
    }

    let list = Container::with_children(doc, list, children)?;

    let root = Container::new(doc).element;
    let container = Container::with_children(doc, root, vec![list.element.as_any()])?;
    Ok(container)
}

#[cfg(test)]
mod tests {
    use generics_dom::{HtmlElement, MemoryDocument};

    use super::build_list;

    #[test]
    fn list_structure() {
        let mut doc = MemoryDocument::new();
        let items = ["Hello Worlds".to_owned(), "Habari Gani".to_owned()];

        let container = build_list(&mut doc, &items).unwrap();
        assert_eq!(container.children.as_ref().map(Vec::len), Some(1));

        assert_eq!(
            doc.dump_node(container.element.node()),
            concat!(
                "<div>\n",
                "    <ol>\n",
                "        <li> \"Hello Worlds\"\n",
                "        <li> \"Habari Gani\"\n",
            )
        );
        assert!(!doc.is_connected(container.element.node()));
    }

    #[test]
    fn empty_list() {
        let mut doc = MemoryDocument::new();
        let container = build_list(&mut doc, &[]).unwrap();

        assert_eq!(
            doc.dump_node(container.element.node()),
            "<div>\n    <ol>\n"
        );
    }
}
