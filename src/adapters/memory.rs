use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::config::{DEFAULT_COUNTRY_CODE, SelfserveConfig};
use crate::core::{
    display::{BUILTIN_DISPLAY_FIELDS, DisplayNameConfig, render_display_name},
    feature::{EditRestriction, FeatureFlags},
    fields::VisibleFields,
    params::{EmailCodeRequest, PhoneCodeRequest, UpdateEmail, UpdateLogo, UpdatePassword, UpdatePhone},
    password::PasswordRule,
    service::{AccountService, Result, ServiceError},
    user::{NaturalUser, UserProfile},
};
use crate::scrub::scrub;

struct StoredAccount {
    profile: UserProfile,
    password_digest: String,
}

#[derive(Default)]
struct State {
    accounts: HashMap<String, StoredAccount>,
    naturals: HashMap<String, NaturalUser>,
    // pending verification codes keyed by the contact they were sent to
    codes: HashMap<String, String>,
    code_seq: u32,
}

/// `AccountService` backed by in-process maps. Carries the backend's update
/// semantics (inherit flags, verification gating, password rules) without any
/// transport; useful as a reference implementation and in tests.
pub struct MemoryAccounts {
    state: RwLock<State>,
    fields: VisibleFields,
    features: FeatureFlags,
    password_rule: PasswordRule,
    display_name: Option<DisplayNameConfig>,
    scrub_fields: Vec<String>,
    default_country_code: String,
}

impl MemoryAccounts {
    pub fn new(features: FeatureFlags, fields: VisibleFields) -> Self {
        Self {
            state: RwLock::new(State::default()),
            fields,
            features,
            password_rule: PasswordRule::default(),
            display_name: None,
            scrub_fields: Vec::new(),
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }

    pub fn with_password_rule(mut self, rule: PasswordRule) -> Self {
        self.password_rule = rule;
        self
    }

    pub fn with_display_name(mut self, config: DisplayNameConfig) -> Self {
        self.display_name = Some(config);
        self
    }

    pub fn with_config(mut self, config: &SelfserveConfig) -> Self {
        self.scrub_fields = config.scrub_fields.clone();
        self.default_country_code = config.country_code().to_string();
        if let Some(expression) = &config.display_name_expression {
            self.display_name = Some(DisplayNameConfig::new(
                expression.clone(),
                BUILTIN_DISPLAY_FIELDS.iter().map(|f| f.to_string()).collect(),
                self.fields.custom_fields.iter().map(|f| f.name.clone()).collect(),
            ));
        }
        self
    }

    pub async fn insert(&self, profile: UserProfile, password: &str) {
        let mut state = self.state.write().await;
        state.accounts.insert(
            profile.id.clone(),
            StoredAccount {
                profile,
                password_digest: digest(password),
            },
        );
    }

    pub async fn link_natural_user(&self, user_id: &str, natural: NaturalUser) {
        let mut state = self.state.write().await;
        state.naturals.insert(user_id.to_string(), natural);
    }

    /// The code last issued for a contact, if any. Stands in for the inbox a
    /// real deployment would deliver to.
    pub async fn pending_code(&self, contact: &str) -> Option<String> {
        let state = self.state.read().await;
        state.codes.get(contact).cloned()
    }

    async fn issue_code(&self, contact: &str) -> String {
        let mut state = self.state.write().await;
        state.code_seq += 1;
        let code = format!("{:06}", state.code_seq);
        state.codes.insert(contact.to_string(), code.clone());
        code
    }

    async fn verify_code(&self, contact: &str, submitted: Option<&str>) -> Result<()> {
        let submitted = submitted.ok_or(ServiceError::VerificationRequired)?;
        let mut state = self.state.write().await;
        match state.codes.get(contact) {
            Some(expected) if expected == submitted => {
                state.codes.remove(contact);
                Ok(())
            }
            _ => Err(ServiceError::InvalidCode),
        }
    }

    fn log_request<T: Serialize>(&self, op: &str, req: &T) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        if let Ok(value) = serde_json::to_value(req) {
            log::debug!("{op}: {}", scrub(&value, &self.scrub_fields));
        }
    }
}

fn digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let result = hasher.finalize();
    let mut hex = String::with_capacity(64);
    for byte in result {
        write!(&mut hex, "{byte:02x}").unwrap();
    }
    hex
}

#[async_trait::async_trait]
impl AccountService for MemoryAccounts {
    async fn profile(&self, user_id: &str) -> Result<UserProfile> {
        let state = self.state.read().await;
        let account = state
            .accounts
            .get(user_id)
            .ok_or_else(|| ServiceError::UserNotFound(user_id.to_string()))?;

        let mut profile = account.profile.clone();
        if let Some(config) = &self.display_name {
            profile.full_name = render_display_name(&account.profile, config);
        }
        Ok(profile)
    }

    async fn visible_fields(&self, _user_id: &str) -> Result<VisibleFields> {
        Ok(self.fields.clone())
    }

    async fn features(&self, _user_id: &str) -> Result<FeatureFlags> {
        Ok(self.features)
    }

    async fn linked_accounts(&self, user_id: &str) -> Result<NaturalUser> {
        let state = self.state.read().await;
        if let Some(natural) = state.naturals.get(user_id) {
            return Ok(natural.clone());
        }

        let account = state
            .accounts
            .get(user_id)
            .ok_or_else(|| ServiceError::UserNotFound(user_id.to_string()))?;
        Ok(NaturalUser {
            id: account.profile.id.clone(),
            full_name: account.profile.full_name.clone(),
            tenant_users: vec![],
        })
    }

    async fn update_email(&self, req: &UpdateEmail) -> Result<()> {
        self.log_request("update_email", req);

        match self.features.email_update_restriction {
            EditRestriction::NotEditable => return Err(ServiceError::NotEditable),
            // the code is tied to the submitted contact; switching back to the
            // inherited address needs none
            EditRestriction::NeedVerify if !req.is_inherited_email => {
                self.verify_code(&req.custom_email, req.verification_code.as_deref())
                    .await?;
            }
            _ => {}
        }

        let mut state = self.state.write().await;
        let account = state
            .accounts
            .get_mut(&req.id)
            .ok_or_else(|| ServiceError::UserNotFound(req.id.clone()))?;

        account.profile.is_inherited_email = req.is_inherited_email;
        if !req.is_inherited_email {
            account.profile.custom_email = req.custom_email.clone();
        }
        Ok(())
    }

    async fn update_phone(&self, req: &UpdatePhone) -> Result<()> {
        self.log_request("update_phone", req);

        match self.features.phone_update_restriction {
            EditRestriction::NotEditable => return Err(ServiceError::NotEditable),
            EditRestriction::NeedVerify if !req.is_inherited_phone => {
                self.verify_code(&req.custom_phone, req.verification_code.as_deref())
                    .await?;
            }
            _ => {}
        }

        let mut state = self.state.write().await;
        let account = state
            .accounts
            .get_mut(&req.id)
            .ok_or_else(|| ServiceError::UserNotFound(req.id.clone()))?;

        account.profile.is_inherited_phone = req.is_inherited_phone;
        if !req.is_inherited_phone {
            account.profile.custom_phone = req.custom_phone.clone();
            account.profile.custom_phone_country_code = if req.custom_phone_country_code.is_empty()
            {
                self.default_country_code.clone()
            } else {
                req.custom_phone_country_code.clone()
            };
        }
        Ok(())
    }

    async fn update_logo(&self, req: &UpdateLogo) -> Result<()> {
        let mut state = self.state.write().await;
        let account = state
            .accounts
            .get_mut(&req.id)
            .ok_or_else(|| ServiceError::UserNotFound(req.id.clone()))?;

        account.profile.logo = req.logo.clone();
        Ok(())
    }

    async fn update_password(&self, req: &UpdatePassword) -> Result<()> {
        self.log_request("update_password", req);

        if !self.features.can_change_password {
            return Err(ServiceError::PasswordChangeDisabled);
        }

        let mut state = self.state.write().await;
        let account = state
            .accounts
            .get_mut(&req.id)
            .ok_or_else(|| ServiceError::UserNotFound(req.id.clone()))?;

        if account.password_digest != digest(&req.old_password) {
            return Err(ServiceError::WrongPassword);
        }
        self.password_rule.validate(&req.new_password)?;

        account.password_digest = digest(&req.new_password);
        Ok(())
    }

    async fn send_email_code(&self, req: &EmailCodeRequest) -> Result<()> {
        self.issue_code(&req.email).await;
        log::info!("issued email verification code for {}", req.email);
        Ok(())
    }

    async fn send_phone_code(&self, req: &PhoneCodeRequest) -> Result<()> {
        self.issue_code(&req.phone).await;
        log::info!("issued phone verification code for {}", req.phone);
        Ok(())
    }
}
