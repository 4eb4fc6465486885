//! Paragraph extraction from `text/body`.
//!
//! Paragraphs are the element children of the body sections (`body/div/p`, `body/div/u`…).
use std::borrow::Cow;

use itertools::Itertools;

use crate::tei::node::TreeNode;

/// How a paragraph node is turned into paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyVariant {
    /// The direct text of the paragraph node.
    Flat,
    /// The texts of the `seg` children, joined by a space.
    /// Transcribed speech: one paragraph is one speaker turn.
    Segmented,
}

impl BodyVariant {
    /// Extract paragraph texts from a body node, in document order.
    ///
    /// Empty paragraphs are dropped, so that every returned string is non-empty.
    pub fn paragraphs<N: TreeNode>(&self, body: &N) -> Vec<String> {
        body.children()
            .into_iter()
            .flat_map(|section| section.children())
            .filter_map(|paragraph| self.paragraph(&paragraph))
            .collect()
    }

    fn paragraph<N: TreeNode>(&self, paragraph: &N) -> Option<String> {
        match self {
            BodyVariant::Flat => paragraph.non_empty_text().map(Cow::into_owned),
            BodyVariant::Segmented => {
                let text = paragraph
                    .children_by_tag("seg")
                    .iter()
                    .filter_map(|seg| seg.non_empty_text())
                    .join(" ");
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        }
    }
}
