//! Sentence splitting.
//!
//! Splitters work in *preserve-spacing* mode: sentences are slices of the input, and concatenating
//! them gives the input back. The whitespace separating two sentences is attached to the front of
//! the sentence that follows it, trailing whitespace of the text stays on the last sentence.
//!
//! ```text
//! "First one. Second one.  Third."
//!  ^^^^^^^^^^
//!            ^^^^^^^^^^^^
//!                        ^^^^^^^^
//! ```
use unicode_segmentation::{USentenceBoundIndices, UnicodeSegmentation};

/// Lazy sequence of sentences.
pub type Sentences<'t> = Box<dyn Iterator<Item = &'t str> + 't>;

/// A sentence boundary detector.
///
/// Each call to [SentenceSplitter::split] restarts from the beginning of the text.
pub trait SentenceSplitter {
    fn split<'t>(&self, text: &'t str) -> Sentences<'t>;
}

/// Splits on Unicode sentence boundaries (UAX #29).
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSplitter;

impl SentenceSplitter for UnicodeSplitter {
    fn split<'t>(&self, text: &'t str) -> Sentences<'t> {
        Box::new(OriginalSentences::new(text))
    }
}

/// Iterator over preserve-spacing sentences, built from UAX #29 sentence bounds.
///
/// UAX #29 bounds keep the separating whitespace at the *end* of a sentence,
/// so it is moved over to the following one.
struct OriginalSentences<'t> {
    text: &'t str,
    bounds: USentenceBoundIndices<'t>,
    start: usize,
}

impl<'t> OriginalSentences<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            bounds: text.split_sentence_bound_indices(),
            start: 0,
        }
    }
}

impl<'t> Iterator for OriginalSentences<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, bound) = self.bounds.next()?;
            let content = bound.trim_end();

            // whitespace-only bounds are glued to the next sentence
            if content.is_empty() {
                continue;
            }

            let mut end = idx + content.len();
            if self.text[end..].trim_end().is_empty() {
                end = self.text.len();
            }

            let sentence = &self.text[self.start..end];
            self.start = end;
            return Some(sentence);
        }
    }
}
