/*! Offset annotation.

Rebuilds the document text from its paragraphs and computes the [Span] of the title,
of each paragraph and of each sentence.

The title (when present) is the first paragraph of the document, and paragraphs are separated by a blank line:

```text
Title One\n\nFirst paragraph.\n\nSecond paragraph. Another sentence.
^0           ^11                   ^29
```

Offsets and lengths are counted in `char`s, not in bytes.
!*/
mod splitter;

pub use splitter::{SentenceSplitter, Sentences, UnicodeSplitter};

use serde::{Deserialize, Serialize};

/// Paragraph separator.
pub const SEPARATOR: &str = "\n\n";
const SEPARATOR_LEN: usize = 2;

/// Half-open `[offset, offset+length)` range of `char`s in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
}

impl Span {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Offset right after the span.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Get the spanned text.
    pub fn extract(&self, text: &str) -> String {
        text.chars().skip(self.offset).take(self.length).collect()
    }
}

/// Annotated document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub document: String,
    pub paragraphs: Vec<Span>,
    pub sentences: Vec<Span>,
    pub title: Option<Span>,
}

#[inline]
fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Build the document text and compute title, paragraph and sentence spans.
///
/// An absent (or empty) title is not inserted in the document at all.
/// The title, when present, is paragraph 0 and gets sentence spans too.
pub fn annotate<S>(title: Option<&str>, paragraphs: &[String], splitter: &S) -> Annotation
where
    S: SentenceSplitter + ?Sized,
{
    let title = title.filter(|title| !title.is_empty());
    let texts: Vec<&str> = title
        .into_iter()
        .chain(paragraphs.iter().map(String::as_str))
        .collect();

    let document = texts.join(SEPARATOR);

    let mut paragraph_spans = Vec::with_capacity(texts.len());
    let mut sentence_spans = Vec::new();

    // offset of the current paragraph
    let mut cursor = 0;
    for text in &texts {
        let length = char_len(text);
        paragraph_spans.push(Span::new(cursor, length));
        sentence_spans.extend(sentence_spans_at(text, cursor, splitter));
        cursor += length + SEPARATOR_LEN;
    }

    Annotation {
        document,
        paragraphs: paragraph_spans,
        sentences: sentence_spans,
        title: title.map(|title| Span::new(0, char_len(title))),
    }
}

/// Sentence spans of a paragraph starting at `cursor`.
///
/// Non-initial sentences carry their leading separator: their span starts one char later,
/// and is two chars shorter than the raw sentence.
fn sentence_spans_at<S>(paragraph: &str, cursor: usize, splitter: &S) -> Vec<Span>
where
    S: SentenceSplitter + ?Sized,
{
    let mut spans = Vec::new();
    let mut consumed = 0;

    for (idx, sentence) in splitter.split(paragraph).enumerate() {
        let length = char_len(sentence);
        let span = if idx == 0 {
            Span::new(cursor, length)
        } else {
            Span::new(cursor + consumed + 1, length.saturating_sub(2))
        };
        spans.push(span);
        consumed += length;
    }

    spans
}
