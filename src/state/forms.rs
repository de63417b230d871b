use crate::common::ValidationError;
use crate::types::{LoginRequest, SignupRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> Result<LoginRequest, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ValidationError::Required("Username"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }

        Ok(LoginRequest {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn to_request(&self) -> Result<SignupRequest, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ValidationError::Required("Username"));
        }
        if self.password.trim().is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(SignupRequest {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Where to send a user after logging in.
///
/// Admins go to `next` when it is a path on this site, the dashboard
/// otherwise. Readers have no use for admin pages and go home.
pub fn login_destination(next: Option<&str>, is_admin: bool) -> String {
    if !is_admin {
        return "/".to_string();
    }
    match next {
        Some(path) if is_local_path(path) => path.to_string(),
        _ => "/admin".to_string(),
    }
}

/// Browsers read `\` as `/`, so `/\host` is as off-site as `//host`.
fn is_local_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/')
        && !matches!(chars.next(), Some('/') | Some('\\'))
        && !path.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_destination() {
        assert_eq!(login_destination(Some("/admin/blog/new"), true), "/admin/blog/new");
        assert_eq!(login_destination(None, true), "/admin");
        assert_eq!(login_destination(Some("//evil.example"), true), "/admin");
        assert_eq!(login_destination(Some("https://evil.example"), true), "/admin");
        assert_eq!(login_destination(Some("/\\evil.example"), true), "/admin");
        assert_eq!(login_destination(Some("/admin\\..\\x"), true), "/admin");
        assert_eq!(login_destination(Some("/admin"), false), "/");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            username: "  ".into(),
            password: "secret".into(),
        };
        assert_eq!(form.to_request().unwrap_err(), ValidationError::Required("Username"));

        let form = LoginForm {
            username: "kunal".into(),
            password: String::new(),
        };
        assert_eq!(form.to_request().unwrap_err(), ValidationError::Required("Password"));
    }

    #[test]
    fn test_signup_rejects_mismatched_confirmation() {
        let form = SignupForm {
            username: "reader".into(),
            password: "hunter22".into(),
            confirm_password: "hunter23".into(),
        };
        assert_eq!(form.to_request().unwrap_err(), ValidationError::PasswordMismatch);
        assert_eq!(
            form.to_request().unwrap_err().to_string(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_signup_trims_username() {
        let form = SignupForm {
            username: "  reader ".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.username, "reader");
        assert_eq!(request.password, "hunter22");
    }
}
