//! Typed access to a parsed document tree.
//!
//! The extractor never walks a concrete XML library directly: it only sees
//! [TreeNode], so that alternative parsers (or hand-built trees in tests) can be plugged in.
use std::borrow::Cow;

/// Namespace bound to the `xml:` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A read-only element of a document tree.
///
/// Tag names are local names: namespaces of element names are ignored.
pub trait TreeNode: Sized {
    /// Local name of the element.
    fn tag(&self) -> &str;

    /// Attribute without namespace (`type`, `n`…).
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Attribute in the `xml:` namespace (`xml:id`, `xml:lang`).
    fn xml_attribute(&self, name: &str) -> Option<&str>;

    /// Text located directly inside the element, before its first child element.
    /// Comments and processing instructions are skipped.
    fn text(&self) -> Option<Cow<'_, str>>;

    /// Element children, in document order.
    fn children(&self) -> Vec<Self>;

    /// Element children with the provided tag, in document order.
    fn children_by_tag(&self, tag: &str) -> Vec<Self> {
        self.children()
            .into_iter()
            .filter(|child| child.tag() == tag)
            .collect()
    }

    /// First element child with the provided tag.
    fn child(&self, tag: &str) -> Option<Self> {
        self.children().into_iter().find(|child| child.tag() == tag)
    }

    /// Non-empty direct text.
    fn non_empty_text(&self) -> Option<Cow<'_, str>> {
        self.text().filter(|text| !text.is_empty())
    }
}

impl<'a, 'input: 'a> TreeNode for roxmltree::Node<'a, 'input> {
    fn tag(&self) -> &str {
        self.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, name)
    }

    fn xml_attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, (XML_NAMESPACE, name))
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        let mut texts = roxmltree::Node::children(self)
            .take_while(|child| !child.is_element())
            .filter(|child| child.is_text())
            .filter_map(|child| child.text());

        let first = texts.next()?;
        match texts.next() {
            None => Some(Cow::Borrowed(first)),
            Some(second) => {
                let mut text = String::from(first);
                text.push_str(second);
                texts.for_each(|t| text.push_str(t));
                Some(Cow::Owned(text))
            }
        }
    }

    fn children(&self) -> Vec<Self> {
        roxmltree::Node::children(self)
            .filter(|child| child.is_element())
            .collect()
    }
}
