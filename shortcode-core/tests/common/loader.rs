//! Fixture loading from YAML files.

use serde::Deserialize;
use std::path::Path;

/// A single test case from a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    #[serde(default)]
    pub desc: String,
    pub input: String,
    /// True for inputs that must not form a directive.
    #[serde(default)]
    pub nomatch: bool,
    /// Expected directive name for matching inputs.
    #[serde(default)]
    pub name: Option<String>,
    /// Expected attributes in source order.
    #[serde(default)]
    pub attrs: Vec<ExpectedAttr>,
}

/// Expected attribute - either a bare flag name or `[name, kind, value]`
/// with kind `quoted` or `bare`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpectedAttr {
    Flag(String),
    Value(String, String, String),
}

impl ExpectedAttr {
    pub fn name(&self) -> &str {
        match self {
            ExpectedAttr::Flag(name) => name,
            ExpectedAttr::Value(name, _, _) => name,
        }
    }
}

/// Load all test cases from a YAML fixture file.
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {path:?}: {e}"));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {path:?}: {e}"))
}

/// Load fixtures from the standard fixtures directory.
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{name}.yaml"));
    load_fixtures(&path)
}
