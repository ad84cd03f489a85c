//! Rebuilding source text from parsed chunks.

use crate::{Argument, Chunk, Page, Transclusion};
use core::fmt;

impl Page {
    /// Rebuilds the canonical source form of the page.
    ///
    /// Markup chunks are emitted verbatim; transclusions re-emit as
    /// `{{target|value|name=value}}`. Re-parsing the result yields an equal
    /// page. Whitespace that was trimmed from targets and argument names
    /// does not reappear, so the text is byte-identical to the original
    /// only when the original was already in this form.
    pub fn to_source(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.chunks() {
            write!(f, "{chunk}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup(text) => f.write_str(text),
            Self::Transclude(transclusion) => write!(f, "{transclusion}"),
        }
    }
}

impl fmt::Display for Transclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}", self.target)?;
        for argument in &self.arguments {
            write!(f, "|{argument}")?;
        }
        write!(f, "}}}}")
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positional(value) => f.write_str(value),
            Self::Named { name, value } => write!(f, "{name}={value}"),
        }
    }
}
