use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A stored custom-field value: either a single string or a list of strings.
/// Untagged so `"ENG"` and `["a", "b"]` both round-trip the backend JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multi(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Single(String::new())
    }
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(value) => value.is_empty(),
            FieldValue::Multi(items) => items.is_empty(),
        }
    }

    /// Flattened form for display contexts; multi values join with ",".
    pub fn to_display(&self) -> String {
        match self {
            FieldValue::Single(value) => value.clone(),
            FieldValue::Multi(items) => items.join(","),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::Multi(items)
    }
}

/// Per-user free-form attribute storage, keyed by custom-field name.
pub type Extras = HashMap<String, FieldValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Enum,
    MultiEnum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub data_type: FieldKind,
    pub required: bool,
    pub editable: bool,
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinField {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub data_type: FieldKind,
    pub required: bool,
    pub unique: bool,
    #[serde(default)]
    pub default: FieldValue,
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleFields {
    #[serde(default)]
    pub builtin_fields: Vec<BuiltinField>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

/// A custom-field definition paired with the value a specific user holds for it.
/// Serializes flat: the definition's fields plus `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedField {
    #[serde(flatten)]
    pub field: CustomField,
    pub value: FieldValue,
}

/// Annotate each custom-field definition, in order, with the value stored in the
/// extras bag under the definition's name. Missing names get an empty string.
pub fn annotate_custom_fields(
    extras: &Extras,
    custom_fields: Option<&[CustomField]>,
) -> Vec<AnnotatedField> {
    custom_fields
        .unwrap_or_default()
        .iter()
        .map(|field| AnnotatedField {
            value: extras.get(&field.name).cloned().unwrap_or_default(),
            field: field.clone(),
        })
        .collect()
}
