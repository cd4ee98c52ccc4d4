pub mod dialog;

use crate::core::feature::{EditRestriction, FeatureFlags};

pub use dialog::{ContactMode, DialogKind, DialogOutcome};

/// State of an open email/phone edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDialog {
    pub kind: DialogKind,
    pub mode: ContactMode,
    pub outcome: Option<DialogOutcome>,
}

impl ContactDialog {
    pub fn open(kind: DialogKind, mode: ContactMode) -> Self {
        Self {
            kind,
            mode,
            outcome: None,
        }
    }

    pub fn restriction(&self, flags: &FeatureFlags) -> EditRestriction {
        match self.kind {
            DialogKind::Email => flags.email_update_restriction,
            DialogKind::Phone => flags.phone_update_restriction,
        }
    }

    pub fn can_submit(&self, flags: &FeatureFlags) -> bool {
        self.restriction(flags).editable()
    }

    pub fn needs_verification(&self, flags: &FeatureFlags) -> bool {
        self.restriction(flags).needs_verification()
    }

    pub fn resolve(&mut self, success: bool) {
        self.outcome = Some(if success {
            DialogOutcome::Success
        } else {
            DialogOutcome::Fail
        });
    }
}
