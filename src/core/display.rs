use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::fields::VisibleFields;
use super::user::UserProfile;

static FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

/// Placeholder rendered for a referenced field with no usable value.
pub const MISSING_FIELD_PLACEHOLDER: &str = "-";

/// Built-in profile fields an expression may reference.
pub const BUILTIN_DISPLAY_FIELDS: [&str; 5] = [
    "username",
    "full_name",
    "email",
    "phone",
    "phone_country_code",
];

/// A display-name template like `"{full_name} ({dept_code})"` together with the
/// field names it is allowed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNameConfig {
    pub expression: String,
    #[serde(default)]
    pub builtin_fields: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<String>,
}

impl DisplayNameConfig {
    pub fn new(
        expression: impl Into<String>,
        builtin_fields: Vec<String>,
        custom_fields: Vec<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            builtin_fields,
            custom_fields,
        }
    }
}

/// Render the display name for one user. Every `{field}` occurrence is replaced
/// with the built-in or extras value; unknown or empty fields render as `-`.
pub fn render_display_name(user: &UserProfile, config: &DisplayNameConfig) -> String {
    let mut values: HashMap<&str, String> = HashMap::new();

    for field in &config.builtin_fields {
        if let Some(value) = builtin_field_value(user, field) {
            values.insert(field.as_str(), value);
        }
    }
    for field in &config.custom_fields {
        if let Some(value) = user.extras.get(field) {
            values.insert(field.as_str(), value.to_display());
        }
    }

    FIELD_PATTERN
        .replace_all(&config.expression, |caps: &regex::Captures<'_>| {
            match values.get(&caps[1]) {
                Some(value) if !value.is_empty() => value.clone(),
                _ => MISSING_FIELD_PLACEHOLDER.to_string(),
            }
        })
        .into_owned()
}

fn builtin_field_value(user: &UserProfile, field: &str) -> Option<String> {
    match field {
        "username" => Some(user.username.clone()),
        "full_name" => Some(user.full_name.clone()),
        "email" => Some(user.effective_email().to_string()),
        "phone" => Some(user.effective_phone().0.to_string()),
        "phone_country_code" => Some(user.effective_phone().1.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionFields {
    pub builtin: Vec<String>,
    pub custom: Vec<String>,
    pub unknown: Vec<String>,
}

/// Split the field names an expression references against the visible field
/// sets. Duplicates collapse to their first occurrence.
pub fn classify_expression_fields(expression: &str, visible: &VisibleFields) -> ExpressionFields {
    let builtin: HashSet<&str> = visible
        .builtin_fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    let custom: HashSet<&str> = visible
        .custom_fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();

    let mut seen = HashSet::new();
    let mut result = ExpressionFields::default();
    for caps in FIELD_PATTERN.captures_iter(expression) {
        let name = &caps[1];
        if !seen.insert(name.to_string()) {
            continue;
        }
        if builtin.contains(name) {
            result.builtin.push(name.to_string());
        } else if custom.contains(name) {
            result.custom.push(name.to_string());
        } else {
            result.unknown.push(name.to_string());
        }
    }
    result
}
