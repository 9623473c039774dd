//! Test harness for running fixture cases with stochastic variations.

use crate::common::{ExpectedAttr, Gen, TestCase};
use shortcode_core::{scan, shortcode, AttrValue, Delimiters, Inline, Shortcode, Tokenizer};

/// Result of running a test.
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub errors: Vec<String>,
}

impl TestResult {
    pub fn print_failure(&self, label: &str) {
        eprintln!("FAIL {label}");
        eprintln!("  input: {:?}", self.input);
        for error in &self.errors {
            eprintln!("  {error}");
        }
    }
}

fn format_value(value: Option<&AttrValue<'_>>) -> String {
    match value {
        None => "flag".to_owned(),
        Some(AttrValue::Bare(s)) => format!("bare {s:?}"),
        Some(AttrValue::Quoted(s)) => format!("quoted {s:?}"),
    }
}

fn format_expected(attr: &ExpectedAttr) -> String {
    match attr {
        ExpectedAttr::Flag(_) => "flag".to_owned(),
        ExpectedAttr::Value(_, kind, value) => format!("{kind} {value:?}"),
    }
}

/// Compare a resolved node against a case's expectations.
fn check_node(case: &TestCase, node: &Shortcode<'_>, errors: &mut Vec<String>) {
    if let Some(expected_name) = &case.name {
        if node.name != expected_name {
            errors.push(format!("name: expected {expected_name:?}, got {:?}", node.name));
        }
    }
    if node.attributes.len() != case.attrs.len() {
        errors.push(format!(
            "attribute count: expected {}, got {}",
            case.attrs.len(),
            node.attributes.len()
        ));
        return;
    }
    for (i, (expected, actual)) in case.attrs.iter().zip(&node.attributes).enumerate() {
        if expected.name() != actual.name {
            errors.push(format!(
                "attr {i} name: expected {:?}, got {:?}",
                expected.name(),
                actual.name
            ));
        }
        let expected_value = format_expected(expected);
        let actual_value = format_value(actual.value.as_ref());
        if expected_value != actual_value {
            errors.push(format!(
                "attr {i} value: expected {expected_value}, got {actual_value}"
            ));
        }
    }
}

/// Run a single case canonically: one attempt at the start of the input.
pub fn run_test(case: &TestCase) -> TestResult {
    let mut errors = Vec::new();
    let mut tok = Tokenizer::new(&case.input);
    let matched = shortcode(&mut tok, &Delimiters::default());

    if case.nomatch {
        if matched {
            errors.push("expected no match, but the directive matched".to_owned());
        }
        if !matched && !tok.events().is_empty() {
            errors.push(format!("rollback leaked {} events", tok.events().len()));
        }
        if !matched && tok.offset() != 0 {
            errors.push(format!("rollback left cursor at {}", tok.offset()));
        }
    } else if !matched {
        errors.push("expected a match, got none".to_owned());
    } else {
        match Shortcode::from_events(&case.input, tok.events()) {
            Ok(node) => check_node(case, &node, &mut errors),
            Err(e) => errors.push(format!("resolve failed: {e}")),
        }
    }

    TestResult {
        passed: errors.is_empty(),
        input: case.input.clone(),
        errors,
    }
}

/// Run a case embedded in random surrounding prose, through the scanner.
///
/// Variations applied independently:
/// - prose lines and blank lines above and below
/// - 40% chance of same-line prose before the directive
///
/// Nothing after the directive on its own line - trailing content is a
/// rejection rule, exercised by the `nomatch` fixtures instead.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let mut doc = String::new();
    doc.push_str(&gen.prose_lines());
    doc.push_str(&gen.blank_lines());
    if gen.chance(0.4) {
        doc.push_str(&gen.inline_prose());
        doc.push(' ');
    }
    doc.push_str(&case.input);
    doc.push('\n');
    doc.push_str(&gen.blank_lines());
    doc.push_str(&gen.prose_lines());

    let mut errors = Vec::new();
    let shortcodes: Vec<_> = scan(&doc)
        .into_iter()
        .filter_map(|item| match item {
            Inline::Shortcode(node) => Some(node),
            Inline::Text(_) => None,
        })
        .collect();

    if case.nomatch {
        if !shortcodes.is_empty() {
            errors.push(format!(
                "expected no match in context, found {}",
                shortcodes.len()
            ));
        }
    } else if shortcodes.len() != 1 {
        errors.push(format!("expected one match in context, found {}", shortcodes.len()));
    } else {
        check_node(case, &shortcodes[0], &mut errors);
    }

    TestResult {
        passed: errors.is_empty(),
        input: doc,
        errors,
    }
}
