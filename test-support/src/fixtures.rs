use serde_json::{json, Value};

pub const USERNAME: &str = "johndoe";
pub const NAME: &str = "John Doe";
pub const AGE: i32 = 30;
pub const EMAIL: &str = "john@example.com";

/// Replacement values for the setter tests.
pub const NEW_NAME: &str = "Jane Smith";
pub const NEW_AGE: i32 = 25;
pub const NEW_EMAIL: &str = "jane@example.com";

pub const JOHN_DOE_JSON: &str = r#"{
  "username": "johndoe",
  "name": "John Doe",
  "age": 30,
  "email": "john@example.com"
}"#;

/// The reference user record as a JSON value.
pub fn john_doe() -> Value {
    json!({
        "username": USERNAME,
        "name": NAME,
        "age": AGE,
        "email": EMAIL
    })
}
