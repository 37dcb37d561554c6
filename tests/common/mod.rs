//! Common test utilities for schema validation testing.
//!
//! This module provides macros, builders, and helpers shared by every
//! validation test category.

use admin_schema::{
    AttributeValue, Diagnostics, Operation, SchemaRegistry, ValidationConfig, ValidationContext,
};
use serde_json::Value;
use std::sync::Once;

pub mod fixtures;

static LOGGER: Once = Once::new();

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init();
    });
}

/// Registry with every built-in resource and the default configuration.
pub fn registry() -> SchemaRegistry {
    init_logging();
    SchemaRegistry::new().expect("Failed to create registry")
}

/// Registry with every built-in resource and `config`.
pub fn registry_with(config: ValidationConfig) -> SchemaRegistry {
    init_logging();
    SchemaRegistry::builder()
        .with_builtin_resources()
        .with_config(config)
        .build()
        .expect("Failed to create registry")
}

/// Validate a JSON configuration against a built-in resource type.
pub fn validate(type_name: &str, value: Value, operation: Operation) -> Diagnostics {
    registry()
        .validate_resource(
            &AttributeValue::from(value),
            &ValidationContext::new(type_name, operation),
        )
        .expect("resource type should be registered")
}

/// Context for invoking a rule directly.
pub fn context() -> ValidationContext {
    ValidationContext::create("test_resource")
}

/// `(path, summary)` of every diagnostic, in order.
pub fn summaries(diagnostics: &Diagnostics) -> Vec<(String, String)> {
    diagnostics
        .iter()
        .map(|d| (d.path().to_string(), d.summary().to_string()))
        .collect()
}

/// Paths of every diagnostic, in order.
pub fn paths(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics.iter().map(|d| d.path().to_string()).collect()
}

/// Assert that validation reported no error diagnostics.
#[macro_export]
macro_rules! assert_no_errors {
    ($diagnostics:expr) => {
        let diagnostics = &$diagnostics;
        assert!(
            !diagnostics.has_errors(),
            "Expected no errors, got: {:#?}",
            diagnostics
        );
    };
}

/// Assert that validation reported a diagnostic at `path` with `summary`.
#[macro_export]
macro_rules! assert_diagnostic {
    ($diagnostics:expr, $path:expr, $summary:expr) => {
        let diagnostics = &$diagnostics;
        assert!(
            diagnostics
                .iter()
                .any(|d| d.path().to_string() == $path && d.summary() == $summary),
            "Expected diagnostic '{}' at '{}', got: {:#?}",
            $summary,
            $path,
            diagnostics
        );
    };
}

/// Assert that a detail message contains a substring.
#[macro_export]
macro_rules! assert_detail_contains {
    ($diagnostic:expr, $substring:expr) => {
        let diagnostic = &$diagnostic;
        assert!(
            diagnostic.detail().contains($substring),
            "Detail '{}' does not contain '{}'",
            diagnostic.detail(),
            $substring
        );
    };
}
