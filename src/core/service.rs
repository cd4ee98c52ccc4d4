use super::feature::FeatureFlags;
use super::fields::VisibleFields;
use super::params::{
    EmailCodeRequest, PhoneCodeRequest, UpdateEmail, UpdateLogo, UpdatePassword, UpdatePhone,
};
use super::password::PasswordError;
use super::user::{NaturalUser, UserProfile};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Contact is not editable")]
    NotEditable,
    #[error("Verification code required")]
    VerificationRequired,
    #[error("Invalid verification code")]
    InvalidCode,
    #[error("Password change is disabled")]
    PasswordChangeDisabled,
    #[error("Old password does not match")]
    WrongPassword,
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("Operation not supported")]
    NotSupported,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// The operations the personal center performs against a backend. Implementors
/// own transport and storage; the shapes here are the crate's boundary.
#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    async fn profile(&self, user_id: &str) -> Result<UserProfile>;

    async fn visible_fields(&self, user_id: &str) -> Result<VisibleFields>;

    async fn features(&self, user_id: &str) -> Result<FeatureFlags>;

    async fn linked_accounts(&self, _user_id: &str) -> Result<NaturalUser> {
        Err(ServiceError::NotSupported)
    }

    async fn update_email(&self, req: &UpdateEmail) -> Result<()>;

    async fn update_phone(&self, req: &UpdatePhone) -> Result<()>;

    async fn update_logo(&self, req: &UpdateLogo) -> Result<()>;

    async fn update_password(&self, req: &UpdatePassword) -> Result<()>;

    async fn send_email_code(&self, _req: &EmailCodeRequest) -> Result<()> {
        Err(ServiceError::NotSupported)
    }

    async fn send_phone_code(&self, _req: &PhoneCodeRequest) -> Result<()> {
        Err(ServiceError::NotSupported)
    }
}
