use serde::{Deserialize, Serialize};

/// How far a user may go when editing a contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditRestriction {
    #[default]
    EditableDirectly,
    NeedVerify,
    NotEditable,
}

impl EditRestriction {
    pub fn editable(self) -> bool {
        !matches!(self, EditRestriction::NotEditable)
    }

    pub fn needs_verification(self) -> bool {
        matches!(self, EditRestriction::NeedVerify)
    }
}

impl std::fmt::Display for EditRestriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditRestriction::EditableDirectly => write!(f, "editable_directly"),
            EditRestriction::NeedVerify => write!(f, "need_verify"),
            EditRestriction::NotEditable => write!(f, "not_editable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub can_change_password: bool,
    pub phone_update_restriction: EditRestriction,
    pub email_update_restriction: EditRestriction,
}
