use serde_json::Value;

pub const DEFAULT_SCRUBBED_FIELDS: [&str; 10] = [
    "password",
    "secret",
    "passwd",
    "api_key",
    "apikey",
    "token",
    "auth",
    "credentials",
    "cookie",
    "bearer",
];

const MASK: &str = "******";

/// Copy of `value` with every object entry whose key contains a sensitive
/// substring masked. Nested objects are scrubbed too; arrays pass through.
pub fn scrub(value: &Value, custom_fields: &[String]) -> Value {
    match value {
        Value::Object(map) => {
            let mut result = serde_json::Map::with_capacity(map.len());
            for (key, entry) in map {
                if key_is_sensitive(key, custom_fields) {
                    result.insert(key.clone(), Value::String(MASK.to_string()));
                } else if entry.is_object() {
                    result.insert(key.clone(), scrub(entry, custom_fields));
                } else {
                    result.insert(key.clone(), entry.clone());
                }
            }
            Value::Object(result)
        }
        other => other.clone(),
    }
}

fn key_is_sensitive(key: &str, custom_fields: &[String]) -> bool {
    let key = key.to_lowercase();
    DEFAULT_SCRUBBED_FIELDS
        .iter()
        .any(|field| key.contains(field))
        || custom_fields
            .iter()
            .filter(|field| !field.is_empty())
            .any(|field| key.contains(&field.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn masks_sensitive_keys_case_insensitively() {
        let data = json!({
            "username": "zhangsan",
            "old_password": "hunter2",
            "Api_Key": "abc",
        });

        let scrubbed = scrub(&data, &[]);
        assert_eq!(scrubbed["username"], "zhangsan");
        assert_eq!(scrubbed["old_password"], "******");
        assert_eq!(scrubbed["Api_Key"], "******");
    }

    #[test]
    fn masks_nested_objects() {
        let data = json!({
            "profile": { "auth": { "nested": true }, "name": "ok" },
        });

        let scrubbed = scrub(&data, &[]);
        assert_eq!(scrubbed["profile"]["auth"], "******");
        assert_eq!(scrubbed["profile"]["name"], "ok");
    }

    #[test]
    fn custom_fields_extend_the_default_list() {
        let data = json!({ "employee_no": "E-1", "name": "ok" });

        let scrubbed = scrub(&data, &["employee_no".to_string()]);
        assert_eq!(scrubbed["employee_no"], "******");
        assert_eq!(scrubbed["name"], "ok");
    }

    #[test]
    fn non_objects_pass_through() {
        let data = json!(["password", 1]);
        assert_eq!(scrub(&data, &[]), data);
    }
}
