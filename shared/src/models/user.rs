//! User Model

use serde::{Deserialize, Serialize};

/// User as exposed over the API (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Create user payload (users viewset)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Full replace payload (PUT); omitted optional fields keep stored values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReplace {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserReplace {
    pub fn apply_to(self, current: &User) -> UserCreate {
        UserUpdate {
            username: Some(self.username),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
        .apply_to(current)
    }
}

/// Partial update payload (PATCH)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserUpdate {
    /// Overlay the present fields onto `current`, producing a full payload
    pub fn apply_to(self, current: &User) -> UserCreate {
        UserCreate {
            username: self.username.unwrap_or_else(|| current.username.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            first_name: self
                .first_name
                .unwrap_or_else(|| current.first_name.clone()),
            last_name: self.last_name.unwrap_or_else(|| current.last_name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> User {
        User {
            id: 1,
            username: "tilly".into(),
            email: "t@example.com".into(),
            first_name: "Tilly".into(),
            last_name: "Lee".into(),
        }
    }

    #[test]
    fn test_replace_keeps_omitted_fields() {
        let put: UserReplace =
            serde_json::from_str(r#"{"username":"matilda","last_name":""}"#).unwrap();
        let replaced = put.apply_to(&current());
        assert_eq!(replaced.username, "matilda");
        assert_eq!(replaced.email, "t@example.com");
        assert_eq!(replaced.first_name, "Tilly");
        assert_eq!(replaced.last_name, "");
    }

    #[test]
    fn test_replace_requires_username() {
        assert!(serde_json::from_str::<UserReplace>(r#"{"email":"x@example.com"}"#).is_err());
    }
}
