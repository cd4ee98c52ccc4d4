pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod scrub;

pub use crate::config::SelfserveConfig;
pub use crate::core::fields::{
    AnnotatedField, CustomField, FieldValue, VisibleFields, annotate_custom_fields,
};
pub use crate::core::service::{AccountService, Result, ServiceError};
pub use crate::core::user::UserProfile;
