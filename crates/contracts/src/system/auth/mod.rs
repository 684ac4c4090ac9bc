use serde::{Deserialize, Serialize};

use crate::domain::common::{require_email, require_non_blank};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_blank(&self.email, "Email")?;
        require_email(&self.email)?;
        require_non_blank(&self.password, "Kata sandi")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterRequest {
    pub const MIN_PASSWORD_LEN: usize = 6;

    pub fn validate(&self) -> Result<(), String> {
        require_non_blank(&self.name, "Nama")?;
        require_non_blank(&self.email, "Email")?;
        require_email(&self.email)?;
        if self.password.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(format!(
                "Kata sandi minimal {} karakter",
                Self::MIN_PASSWORD_LEN
            ));
        }
        Ok(())
    }

    /// Registration is followed by a login with the same credentials
    pub fn to_login(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let req = LoginRequest {
            email: "budi@kamusewa.id".into(),
            password: String::new(),
        };
        assert_eq!(req.validate(), Err("Kata sandi wajib diisi".to_string()));
    }

    #[test]
    fn test_register_validation_and_login() {
        let req = RegisterRequest {
            email: "sari@kamusewa.id".into(),
            password: "rahasia1".into(),
            name: "Sari".into(),
        };
        assert!(req.validate().is_ok());
        assert_eq!(req.to_login().email, "sari@kamusewa.id");

        let short = RegisterRequest {
            password: "123".into(),
            ..req
        };
        assert_eq!(short.validate(), Err("Kata sandi minimal 6 karakter".to_string()));
    }

    #[test]
    fn test_auth_response_shape() {
        let json = r#"{"token":"abc","user":{"id":5,"name":"Sari","email":"sari@kamusewa.id"}}"#;
        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.id, 5);
    }
}
