//! Lint warnings for degraded parses.
//!
//! The parser is total: every malformed construct still produces chunks.
//! Warnings record what was degraded so the surrounding build can surface
//! the problem to an editor without failing.

use crate::source::Span;
use serde::{Deserialize, Serialize};

/// A recoverable defect found while parsing.
///
/// Warnings never change the produced page; they only describe where the
/// parser fell back to a degraded reading of the input.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, thiserror::Error)]
pub enum Warning {
    /// A `{{` was never closed and was kept as literal markup. The span
    /// runs from the opener to the end of the input.
    #[error("unclosed transclusion")]
    UnterminatedTransclusion {
        /// The source range the warning refers to.
        span: Span,
    },
    /// A transclusion had nothing but whitespace before its first `|` or
    /// `}}`. The span covers the whole `{{...}}`.
    #[error("transclusion target is empty")]
    EmptyTarget {
        /// The source range the warning refers to.
        span: Span,
    },
    /// A named argument repeats an earlier name; the later value wins at
    /// lookup. The span covers the repeated `name=value` segment.
    #[error("duplicate argument {name:?}")]
    DuplicateArgument {
        /// The repeated argument name.
        name: String,
        /// The source range the warning refers to.
        span: Span,
    },
}

impl Warning {
    /// The source range the warning refers to.
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedTransclusion { span }
            | Self::EmptyTarget { span }
            | Self::DuplicateArgument { span, .. } => *span,
        }
    }
}
