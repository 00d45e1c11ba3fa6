//! Sample command results used across CLI tests.

use serde_json::{Value, json};

/// A server listing as a cloud client would return it.
pub fn servers() -> Value {
    json!([
        {
            "id": 11,
            "name": "web-1",
            "status": "ACTIVE",
            "flavor": {"ram": 2048, "cpus": 2}
        },
        {
            "id": 12,
            "name": "db-1",
            "status": "BUILD",
            "flavor": {"ram": 4096, "cpus": 4}
        },
        {
            "id": 13,
            "name": "web-2",
            "status": "active",
            "flavor": {"ram": 2048, "cpus": 2}
        }
    ])
}

/// A single nested record.
pub fn server_details() -> Value {
    json!({
        "id": 11,
        "name": "web-1",
        "metadata": {"os": "debian", "users": "root"},
        "addresses": ["10.0.0.2", "2001:db8::2"]
    })
}

pub fn to_text(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
