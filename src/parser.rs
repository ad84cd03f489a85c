//! The single-pass markup scanner.
//!
//! Source text is split into literal runs and `{{...}}` transclusion
//! references in one pass. Nested braces inside a reference are tracked
//! with an explicit depth counter, so a `|` or `=` inside a nested
//! `{{...}}` never terminates the outer segment. A `{{` that the input
//! never closes is folded back into the surrounding literal run instead of
//! failing the parse.

use crate::{Argument, Chunk, Page, Transclusion, lint::Warning, source::Span};
use memchr::{memchr3, memmem};

/// Splits `source` into chunks, collecting lint warnings for degraded
/// constructs. The scanner behind [`parse`](crate::parse) and
/// [`parse_with_warnings`](crate::parse_with_warnings).
pub(crate) fn scan_page(source: &str) -> (Page, Vec<Warning>) {
    let mut chunks = Vec::new();
    let mut warnings = Vec::new();

    // Start of the pending literal run. A rejected `{{` opener does not
    // flush the run, so the text around it stays a single chunk.
    let mut run_start = 0;
    let mut pos = 0;

    while let Some(found) = memmem::find(source[pos..].as_bytes(), b"{{") {
        let mut open = pos + found;

        // A run of three or more braces opens at its last two; the extra
        // braces are literal text. `{{{Foo}}` is `{` + `{{Foo}}`.
        let run_len = source.as_bytes()[open..]
            .iter()
            .take_while(|&&byte| byte == b'{')
            .count();
        if run_len > 2 {
            open += run_len - 2;
        }

        match scan_transclusion(source, open, &mut warnings) {
            Some((transclusion, end)) => {
                if open > run_start {
                    chunks.push(Chunk::Markup(source[run_start..open].to_owned()));
                }
                chunks.push(Chunk::Transclude(transclusion));
                pos = end;
                run_start = end;
            }
            None => {
                warnings.push(Warning::UnterminatedTransclusion {
                    span: Span::new(open, source.len()),
                });
                // The opener becomes ordinary text. Scanning resumes just
                // past it, so an inner `{{...}}` that does close still
                // parses.
                pos = open + 2;
            }
        }
    }

    if run_start < source.len() {
        chunks.push(Chunk::Markup(source[run_start..].to_owned()));
    }

    (Page::from_chunks(chunks), warnings)
}

/// Scans one transclusion whose `{{` opener is at `open`.
///
/// Returns the parsed reference and the offset one past its closing `}}`,
/// or `None` when the input ends before the braces balance. Warnings are
/// recorded only for an accepted transclusion.
fn scan_transclusion(
    source: &str,
    open: usize,
    warnings: &mut Vec<Warning>,
) -> Option<(Transclusion, usize)> {
    let bytes = source.as_bytes();
    debug_assert_eq!(Some(b"{{".as_slice()), bytes.get(open..open + 2));

    // Depth-0 segment boundaries: the target, then one segment per `|`.
    let mut segments = Vec::new();
    let mut segment_start = open + 2;
    let mut depth = 0_usize;
    let mut i = open + 2;

    let close = loop {
        i += memchr3(b'{', b'}', b'|', &bytes[i..])?;
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                depth += 1;
                i += 2;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                if depth == 0 {
                    segments.push(Span::new(segment_start, i));
                    break i + 2;
                }
                depth -= 1;
                i += 2;
            }
            b'|' if depth == 0 => {
                segments.push(Span::new(segment_start, i));
                segment_start = i + 1;
                i += 1;
            }
            _ => i += 1,
        }
    };

    let transclusion = build_transclusion(source, Span::new(open, close), &segments, warnings);
    Some((transclusion, close))
}

/// Assembles a transclusion from its depth-0 segments.
fn build_transclusion(
    source: &str,
    span: Span,
    segments: &[Span],
    warnings: &mut Vec<Warning>,
) -> Transclusion {
    let (target, rest) = segments
        .split_first()
        .expect("a transclusion has a target segment");

    let target = source[target.into_range()].trim_ascii();
    if target.is_empty() {
        warnings.push(Warning::EmptyTarget { span });
    }

    let mut arguments: Vec<Argument> = Vec::with_capacity(rest.len());
    for &segment in rest {
        let argument = parse_argument(source, segment);
        if let Some(name) = argument.name()
            && arguments.iter().any(|prior| prior.name() == Some(name))
        {
            warnings.push(Warning::DuplicateArgument {
                name: name.to_owned(),
                span: segment,
            });
        }
        arguments.push(argument);
    }

    Transclusion {
        target: target.to_owned(),
        arguments,
    }
}

/// Splits one pipe-delimited segment into a positional value or a
/// `name=value` pair.
///
/// Only a `=` outside any nested `{{...}}` makes the segment named, and
/// only the first such `=` splits the name from the value; later `=` belong
/// to the value. Names are trimmed, values kept verbatim.
fn parse_argument(source: &str, span: Span) -> Argument {
    let text = &source[span.into_range()];
    let bytes = text.as_bytes();

    let mut depth = 0_usize;
    let mut i = 0;
    while let Some(step) = memchr3(b'{', b'}', b'=', &bytes[i..]) {
        i += step;
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                depth += 1;
                i += 2;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                depth = depth.saturating_sub(1);
                i += 2;
            }
            b'=' if depth == 0 => {
                return Argument::Named {
                    name: text[..i].trim_ascii().to_owned(),
                    value: text[i + 1..].to_owned(),
                };
            }
            _ => i += 1,
        }
    }

    Argument::Positional(text.to_owned())
}
