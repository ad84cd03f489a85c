use super::*;

#[test]
fn empty_input() {
    init();
    assert_eq!(0, parse("").chunks().len());
}

#[test]
fn plain_text() {
    assert_chunks("just some text", &[markup("just some text")]);
}

#[test]
fn stray_delimiters_are_text() {
    assert_chunks("a { b } c", &[markup("a { b } c")]);
    assert_chunks("}}", &[markup("}}")]);
    assert_chunks("a }} b {", &[markup("a }} b {")]);
    assert_chunks("a|b", &[markup("a|b")]);
}

#[test]
fn simple_transclusion() {
    assert_chunks("{{Bar}}", &[transclude("Bar", vec![])]);
}

#[test]
fn mixed_markup_and_transclusion() {
    assert_chunks(
        "Hello {{World}}!",
        &[markup("Hello "), transclude("World", vec![]), markup("!")],
    );
}

#[test]
fn transclusion_at_the_edges() {
    assert_chunks("{{A}} tail", &[transclude("A", vec![]), markup(" tail")]);
    assert_chunks("head {{A}}", &[markup("head "), transclude("A", vec![])]);
}

#[test]
fn adjacent_transclusions() {
    assert_chunks(
        "{{A}}{{B}}",
        &[transclude("A", vec![]), transclude("B", vec![])],
    );
}

#[test]
fn unterminated_degrades_to_text() {
    assert_chunks("a {{b", &[markup("a {{b")]);
}

#[test]
fn unterminated_outer_keeps_a_closed_inner() {
    assert_chunks(
        "x {{ {{Inner}}",
        &[markup("x {{ "), transclude("Inner", vec![])],
    );
}

#[test]
fn empty_target() {
    assert_chunks("{{}}", &[transclude("", vec![])]);
    assert_chunks("{{|x}}", &[transclude("", vec![positional("x")])]);
}

#[test]
fn target_whitespace_is_trimmed() {
    assert_chunks("{{ Foo }}", &[transclude("Foo", vec![])]);
    assert_chunks("{{\tFoo\n}}", &[transclude("Foo", vec![])]);
}

#[test]
fn nested_transclusion_in_the_target() {
    assert_chunks("{{ {{Inner}} }}", &[transclude("{{Inner}}", vec![])]);
}

#[test]
fn brace_runs_open_at_the_last_pair() {
    assert_chunks("{{{Foo}}", &[markup("{"), transclude("Foo", vec![])]);
    assert_chunks(
        "{{{Foo}}}",
        &[markup("{"), transclude("Foo", vec![]), markup("}")],
    );
    assert_chunks("a{{{Foo}}", &[markup("a{"), transclude("Foo", vec![])]);
}

#[test]
fn pathological_braces() {
    let braces = "{".repeat(30);
    assert_chunks(&braces, &[markup(&braces)]);
}

#[test]
fn multibyte_text() {
    assert_chunks(
        "héllo {{Wörld}} こんにちは",
        &[
            markup("héllo "),
            transclude("Wörld", vec![]),
            markup(" こんにちは"),
        ],
    );
}
