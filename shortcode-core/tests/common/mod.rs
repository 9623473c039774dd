//! Test infrastructure for the shortcode tokenizer.
//!
//! Provides fixture loading, stochastic context generation, and assertion
//! helpers shared by the canonical tests.

mod generators;
mod harness;
mod loader;

pub use generators::Gen;
pub use harness::{run_test, run_with_variations};
pub use loader::{load_fixtures_by_name, ExpectedAttr, TestCase};
