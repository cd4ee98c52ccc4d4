use serde::{Deserialize, Serialize};

use super::fields::{AnnotatedField, CustomField, Extras, annotate_custom_fields};

pub type UserId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
}

/// The profile record served to the personal center. `email`/`phone` carry the
/// data-source contact, `custom_*` the user's override; the `is_inherited_*`
/// flags pick which one applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub logo: String,
    pub is_inherited_email: bool,
    pub email: String,
    pub custom_email: String,
    pub is_inherited_phone: bool,
    pub phone: String,
    pub phone_country_code: String,
    pub custom_phone: String,
    pub custom_phone_country_code: String,
    pub account_expired_at: String,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub leaders: Vec<Leader>,
    #[serde(default)]
    pub extras: Extras,
    pub language: String,
    pub time_zone: String,
}

impl UserProfile {
    pub fn effective_email(&self) -> &str {
        if self.is_inherited_email {
            &self.email
        } else {
            &self.custom_email
        }
    }

    pub fn effective_phone(&self) -> (&str, &str) {
        if self.is_inherited_phone {
            (&self.phone, &self.phone_country_code)
        } else {
            (&self.custom_phone, &self.custom_phone_country_code)
        }
    }

    pub fn annotated_fields(&self, custom_fields: Option<&[CustomField]>) -> Vec<AnnotatedField> {
        annotate_custom_fields(&self.extras, custom_fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRef {
    pub id: String,
    pub name: String,
}

/// One tenant account belonging to the same natural person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAccount {
    pub id: UserId,
    pub username: String,
    pub full_name: String,
    pub logo: String,
    pub tenant: TenantRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalUser {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub tenant_users: Vec<LinkedAccount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            username: "zhangsan".to_string(),
            full_name: "Zhang San".to_string(),
            logo: String::new(),
            is_inherited_email: true,
            email: "zhangsan@example.com".to_string(),
            custom_email: String::new(),
            is_inherited_phone: false,
            phone: "13512345671".to_string(),
            phone_country_code: "86".to_string(),
            custom_phone: "13598765432".to_string(),
            custom_phone_country_code: "852".to_string(),
            account_expired_at: "2099-12-31 23:59:59".to_string(),
            departments: vec![],
            leaders: vec![],
            extras: Extras::new(),
            language: "zh-cn".to_string(),
            time_zone: "Asia/Shanghai".to_string(),
        }
    }

    #[test]
    fn inherit_flags_pick_the_effective_contact() {
        let user = profile();
        assert_eq!(user.effective_email(), "zhangsan@example.com");
        assert_eq!(user.effective_phone(), ("13598765432", "852"));

        let mut switched = profile();
        switched.is_inherited_email = false;
        switched.custom_email = "me@example.com".to_string();
        switched.is_inherited_phone = true;
        assert_eq!(switched.effective_email(), "me@example.com");
        assert_eq!(switched.effective_phone(), ("13512345671", "86"));
    }

    #[test]
    fn extras_default_when_absent_from_the_wire() {
        let json = serde_json::json!({
            "id": "u1",
            "username": "zhangsan",
            "full_name": "Zhang San",
            "logo": "",
            "is_inherited_email": true,
            "email": "zhangsan@example.com",
            "custom_email": "",
            "is_inherited_phone": true,
            "phone": "13512345671",
            "phone_country_code": "86",
            "custom_phone": "",
            "custom_phone_country_code": "",
            "account_expired_at": "2099-12-31 23:59:59",
            "language": "zh-cn",
            "time_zone": "Asia/Shanghai",
        });

        let user: UserProfile = serde_json::from_value(json).unwrap();
        assert!(user.extras.is_empty());
        assert!(user.departments.is_empty());
        assert!(user.leaders.is_empty());
    }
}
