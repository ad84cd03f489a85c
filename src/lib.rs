//! A parser for wiki-style transclusion markup.
//!
//! The parser splits a page's source text into an ordered sequence of
//! [`Chunk`]s: literal [`Markup`](Chunk::Markup) runs, and
//! [`Transclude`](Chunk::Transclude) references of the form
//! `{{Page name|value|name=value}}`. It is a total function — malformed
//! markup degrades to literal text instead of failing, because pages are
//! authored by careless editors and one bad page must not abort a site
//! build.
//!
//! Resolving a reference to another page's source and substituting
//! arguments into it is the caller's job; this crate only decides where
//! the references are and what their arguments say.
//!
//! ```
//! use transclude::parse;
//!
//! let page = parse("Hello {{Greeting|name=World}}!");
//! let transclusion = page.chunks()[1].transclusion().unwrap();
//! assert_eq!("Greeting", transclusion.target);
//! assert_eq!(Some("World"), transclusion.named("name"));
//! ```

use serde::{Deserialize, Serialize};

mod builder;
mod lint;
mod parser;
mod source;
#[cfg(test)]
mod tests;

pub use lint::Warning;
pub use source::{LineCol, LineIndex, Span};

/// Parses a page of markup into an ordered sequence of chunks.
///
/// Degraded constructs (unterminated `{{`, empty targets, duplicate
/// argument names) are reported through `log::warn!`; use
/// [`parse_with_warnings`] to receive them as values instead.
pub fn parse(source: &str) -> Page {
    let (page, warnings) = parser::scan_page(source);
    for warning in &warnings {
        log::warn!("{warning} at offset {}", warning.span().start);
    }
    page
}

/// Parses a page of markup, collecting lint warnings alongside the chunks.
///
/// The page is identical to the one [`parse`] returns for the same input;
/// warnings never change the parse. Warning spans are byte ranges into
/// `source` — see [`LineIndex`] for converting them to line and column.
pub fn parse_with_warnings(source: &str) -> (Page, Vec<Warning>) {
    parser::scan_page(source)
}

/// A parsed page: chunks in rendering order.
///
/// Pages are immutable once produced. The chunk sequence is maximally
/// coalesced — no empty markup chunks, and no two adjacent markup chunks.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Page {
    /// The parsed chunks.
    chunks: Vec<Chunk>,
}

impl Page {
    /// Creates a page from already-normalized chunks.
    pub(crate) fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// The parsed chunks, in source order.
    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Extracts the page's literal text, skipping transclusion references.
    ///
    /// This is for collaborators that only want the page's own words (e.g.
    /// a search indexer), not a rendering of the page.
    pub fn text_content(&self) -> String {
        self.chunks.iter().filter_map(Chunk::markup).collect()
    }
}

impl core::ops::Deref for Page {
    type Target = [Chunk];

    fn deref(&self) -> &Self::Target {
        &self.chunks
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a Chunk;
    type IntoIter = core::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

/// One unit of parsed output.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Chunk {
    /// A literal run of source text, to be emitted verbatim.
    Markup(String),
    /// A reference to another page to substitute at render time.
    Transclude(Transclusion),
}

impl Chunk {
    /// The literal text, for markup chunks.
    pub fn markup(&self) -> Option<&str> {
        match self {
            Self::Markup(text) => Some(text),
            Self::Transclude(..) => None,
        }
    }

    /// The reference, for transclusion chunks.
    pub fn transclusion(&self) -> Option<&Transclusion> {
        match self {
            Self::Markup(..) => None,
            Self::Transclude(transclusion) => Some(transclusion),
        }
    }
}

/// A reference to another page, with its argument list.
///
/// ```wikitext
/// {{Infobox person|1867|name=Marie Curie}}
///   ^^^^^^^^^^^^^^ target
///                  ^^^^^^^^^^^^^^^^^^^^^ arguments
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Transclusion {
    /// The referenced page name, with surrounding ASCII whitespace trimmed.
    ///
    /// May be empty (`{{}}` and `{{|x}}` parse, and lint flags them);
    /// whether an empty or unknown name resolves is the caller's concern.
    pub target: String,
    /// The arguments, in source order. Named and positional arguments
    /// interleave freely; order is preserved even though lookup is
    /// typically by name or index.
    pub arguments: Vec<Argument>,
}

impl Transclusion {
    /// Looks up a named argument. When a name is given more than once, the
    /// last occurrence wins.
    pub fn named(&self, name: &str) -> Option<&str> {
        self.arguments
            .iter()
            .rev()
            .find(|argument| argument.name() == Some(name))
            .map(Argument::value)
    }

    /// Looks up a positional argument by its 1-based index, counting only
    /// positional entries.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.arguments
            .iter()
            .filter(|argument| argument.name().is_none())
            .nth(index.checked_sub(1)?)
            .map(Argument::value)
    }
}

/// A single transclusion argument.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Argument {
    /// An argument identified by its order rather than a name.
    Positional(String),
    /// A `name=value` argument.
    Named {
        /// The name, with surrounding ASCII whitespace trimmed.
        name: String,
        /// The value, preserved verbatim — including whitespace.
        value: String,
    },
}

impl Argument {
    /// The argument name, if one exists.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Positional(..) => None,
            Self::Named { name, .. } => Some(name),
        }
    }

    /// The argument value.
    #[inline]
    pub fn value(&self) -> &str {
        match self {
            Self::Positional(value) | Self::Named { value, .. } => value,
        }
    }
}
