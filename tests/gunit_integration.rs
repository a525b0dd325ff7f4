//! End-to-end tests for the public template API
//!
//! These exercise the facade, processors, validation and extraction
//! together, the way a caller would use them.

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::json;

use gunit::template::{substitute, Variables};
use gunit::{extract_variables, validate_template, Gunit, TemplateError, TemplateProcessor};

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_extract_single_variable() {
    assert_eq!(extract_variables("Hello, {name}!"), names(&["name"]));
}

#[test]
fn test_extract_many_variables() {
    assert_eq!(
        Gunit::extract_variables("The {animal} {action} {direction} the {object} at {time}."),
        names(&["animal", "action", "direction", "object", "time"])
    );
}

#[test]
fn test_validate_examples() {
    assert!(validate_template("The {animal} is {color} and {mood}."));
    assert!(!validate_template("The {animal is {color} and {mood}."));
}

#[test]
fn test_validation_and_extraction_may_disagree() {
    let template = "{a {b}}";
    assert!(!validate_template(template));
    assert!(!extract_variables(template).is_empty());
}

#[test]
fn test_process_greeting() {
    let mut gunit = Gunit::new();

    let result = gunit
        .process(
            "Hello, {name}! Welcome to {product} version {version}.",
            [
                ("name", "Developer"),
                ("product", "G-UNIT"),
                ("version", "1.0.0"),
            ],
        )
        .unwrap();
    assert_eq!(result, "Hello, Developer! Welcome to G-UNIT version 1.0.0.");
}

#[test]
fn test_processor_requires_context() {
    let gunit = Gunit::new();
    let processor = gunit.create_template(Some("story_template".into()));

    assert!(matches!(
        processor.process("Once upon a time"),
        Err(TemplateError::ContextNotSet { .. })
    ));
}

#[test]
fn test_missing_variable_is_named() {
    let mut gunit = Gunit::new();

    let err = gunit
        .process_json("{name} works on {project}", json!({ "name": "Ada" }))
        .unwrap_err();
    assert_eq!(err, TemplateError::MissingVariable("project".to_string()));
    assert!(err.to_string().contains("project"));
}

#[test]
fn test_story_template_with_chained_context() {
    let gunit = Gunit::new();
    let mut processor = gunit.create_template(Some("story_template".into()));
    let story_template = "
    Once upon a time, there was a {character} who loved to {action}.
    One day, they {event} and discovered {discovery}.
    ";

    assert!(validate_template(story_template));

    let story = processor
        .set_context([
            ("character", "wizard"),
            ("action", "code"),
            ("event", "stumbled upon G-UNIT"),
            ("discovery", "the power of template processing"),
        ])
        .process(story_template)
        .unwrap();

    assert!(story.contains("there was a wizard who loved to code."));
    assert!(story.contains("they stumbled upon G-UNIT and discovered the power"));
    assert_eq!(processor.template_id().as_str(), "story_template");
}

#[test]
fn test_processors_are_independent() {
    let gunit = Gunit::new();
    let mut first = gunit.create_template(None);
    let mut second = TemplateProcessor::default();

    first.set_context([("who", "first")]);
    second.set_context([("who", "second")]);

    assert_eq!(first.process("{who}").unwrap(), "first");
    assert_eq!(second.process("{who}").unwrap(), "second");
}

#[test]
fn test_processors_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut processor = TemplateProcessor::default();
                processor
                    .set_context([("n", i)])
                    .process("worker {n}")
                    .unwrap()
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["worker 0", "worker 1", "worker 2", "worker 3"]);
}

#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    Var(String),
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        "[a-zA-Z0-9 ,.!?]{0,12}".prop_map(Piece::Text),
        "[a-z_]{1,8}".prop_map(Piece::Var),
    ]
}

proptest! {
    #[test]
    fn test_substitution_removes_all_placeholders(
        pieces in prop::collection::vec(piece(), 0..12),
        value in "[a-zA-Z0-9 ]{0,10}",
    ) {
        let template: String = pieces
            .iter()
            .map(|p| match p {
                Piece::Text(t) => t.clone(),
                Piece::Var(v) => format!("{{{}}}", v),
            })
            .collect();
        let expected: String = pieces
            .iter()
            .map(|p| match p {
                Piece::Text(t) => t.clone(),
                Piece::Var(_) => value.clone(),
            })
            .collect();

        let variables: Variables = extract_variables(&template)
            .into_iter()
            .map(|name| (name, json!(value)))
            .collect();

        prop_assert!(validate_template(&template));

        let result = substitute(&template, &variables).unwrap();
        prop_assert!(
            !result.contains('{') && !result.contains('}'),
            "substituted output still contains braces: {}",
            result
        );
        prop_assert_eq!(&result, &expected);

        // Nothing left to substitute, so a second pass is a no-op
        let again = substitute(&result, &variables).unwrap();
        prop_assert_eq!(again, result);
    }
}
