use serde::{Deserialize, Serialize};

/// Form body for POST /create-user. Fields a browser left out of the
/// submission deserialize to None and are rejected at validation.
#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Form body for POST /update/:user_id. Each field is optional; absent
/// fields leave the stored value untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileForm {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Form body for POST /update-password.
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordForm {
    pub id: Option<String>,
    pub new_password: Option<String>,
}

/// Body returned by every successful form submission.
#[derive(Debug, Serialize)]
pub struct Submitted {
    pub success: bool,
}

impl Submitted {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submitted_serializes_to_success_true() {
        let json = serde_json::to_string(&Submitted::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn create_form_tolerates_missing_fields() {
        let form: CreateUserForm = serde_urlencoded_like("username=alice");
        assert_eq!(form.username.as_deref(), Some("alice"));
        assert!(form.email.is_none());
        assert!(form.password.is_none());
    }

    // axum's Form extractor is urlencoded + serde; going through
    // serde_json with string values exercises the same Deserialize impl.
    fn serde_urlencoded_like(pairs: &str) -> CreateUserForm {
        let mut map = serde_json::Map::new();
        for pair in pairs.split('&').filter(|p| !p.is_empty()) {
            let (k, v) = pair.split_once('=').unwrap();
            map.insert(k.to_string(), serde_json::Value::String(v.to_string()));
        }
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }
}
