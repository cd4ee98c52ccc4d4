use serde::{Deserialize, Serialize};

/// Which contact the edit dialog is operating on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    Email,
    Phone,
}

impl DialogKind {
    pub const ALL: [DialogKind; 2] = [DialogKind::Email, DialogKind::Phone];
}

impl std::fmt::Display for DialogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogKind::Email => write!(f, "email"),
            DialogKind::Phone => write!(f, "phone"),
        }
    }
}

/// Whether the dialog edits the inherited contact or a custom override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMode {
    #[default]
    Inherit,
    Custom,
}

impl ContactMode {
    pub fn is_inherited(self) -> bool {
        matches!(self, ContactMode::Inherit)
    }
}

impl std::fmt::Display for ContactMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactMode::Inherit => write!(f, "inherit"),
            ContactMode::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogOutcome {
    #[serde(rename = "success")]
    Success,
    // the result banner consumes a theme token, hence the wire value
    #[serde(rename = "danger")]
    Fail,
}
