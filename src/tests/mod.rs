use super::*;

mod scan;

/// Initialises logging for the test binary so degraded parses show up
/// under `RUST_LOG`.
fn init() {
    let _ = env_logger::try_init();
}

fn markup(text: &str) -> Chunk {
    Chunk::Markup(text.to_owned())
}

fn transclude(target: &str, arguments: Vec<Argument>) -> Chunk {
    Chunk::Transclude(Transclusion {
        target: target.to_owned(),
        arguments,
    })
}

fn positional(value: &str) -> Argument {
    Argument::Positional(value.to_owned())
}

fn named(name: &str, value: &str) -> Argument {
    Argument::Named {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

#[track_caller]
fn assert_chunks(source: &str, expected: &[Chunk]) {
    init();
    assert_eq!(expected, parse(source).chunks(), "for source {source:?}");
}
