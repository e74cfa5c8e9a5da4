use serde::{Deserialize, Serialize};

/// Account credentials and profile as sent to the auth endpoints.
///
/// Every field is optional so that partial payloads can be built for
/// negative registration tests and for profile updates. Absent fields are
/// left out of the request body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    /// Applies every field present in `patch`, keeping the others.
    pub fn merge(&mut self, patch: &User) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(email) = &patch.email {
            self.email = Some(email.clone());
        }
        if let Some(password) = &patch.password {
            self.password = Some(password.clone());
        }
    }

    /// Email as the service echoes it back: lower-cased.
    pub fn normalized_email(&self) -> Option<String> {
        self.email.as_deref().map(str::to_lowercase)
    }

    /// Credentials-only copy, as sent to the login endpoint.
    pub fn credentials(&self) -> User {
        User {
            name: None,
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Token pair returned by registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_fields_are_not_serialized() {
        let user = User::default().with_email("a@b.c");
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"email": "a@b.c"}));
        assert_eq!(serde_json::to_value(User::default()).unwrap(), json!({}));
    }

    #[test]
    fn normalized_email_is_lower_case() {
        let user = User::new("Name", "AbC@Yandex.RU", "secret");
        assert_eq!(user.normalized_email().as_deref(), Some("abc@yandex.ru"));
    }

    #[test]
    fn merge_keeps_unspecified_fields() {
        let mut user = User::new("old", "old@x.y", "pw");
        user.merge(&User::default().with_name("new"));
        assert_eq!(user, User::new("new", "old@x.y", "pw"));
    }

    #[test]
    fn credentials_drop_name() {
        let user = User::new("n", "e@x.y", "p");
        assert_eq!(user.credentials(), User::default().with_email("e@x.y").with_password("p"));
    }

    #[test]
    fn session_tokens_decode_camel_case() {
        let tokens: SessionTokens = serde_json::from_value(json!({
            "success": true,
            "accessToken": "Bearer a",
            "refreshToken": "r"
        }))
        .unwrap();
        assert_eq!(tokens.access_token, "Bearer a");
        assert_eq!(tokens.refresh_token, "r");
    }
}
