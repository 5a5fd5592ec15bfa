//! Test helper functions and utilities

use landsite_core::FieldPath;
use serde_json::Value;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Parse a field path that is known to be valid.
pub fn path(text: &str) -> FieldPath {
    FieldPath::parse(text).expect("valid field path")
}

/// The `position` values of a top-level list field, in list order.
pub fn positions(fields: &Value, list: &str) -> Vec<u64> {
    list_field(fields, list, "position")
        .iter()
        .filter_map(Value::as_u64)
        .collect()
}

/// One string key of every entry of a top-level list field, in list order.
pub fn titles(fields: &Value, list: &str, key: &str) -> Vec<String> {
    list_field(fields, list, key)
        .iter()
        .filter_map(|v| v.as_str().map(ToString::to_string))
        .collect()
}

fn list_field(fields: &Value, list: &str, key: &str) -> Vec<Value> {
    fields[list]
        .as_array()
        .map(|entries| entries.iter().map(|e| e[key].clone()).collect())
        .unwrap_or_default()
}
