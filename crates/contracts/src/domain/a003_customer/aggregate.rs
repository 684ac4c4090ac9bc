use serde::{Deserialize, Serialize};

use crate::domain::common::{require_email, require_non_blank, AggregateRoot};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Pelanggan penyewaan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub user_id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub identity_number: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl AggregateRoot for Customer {
    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "customers"
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub customer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_number: Option<String>,
}

impl CreateCustomerRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_blank(&self.customer_name, "Nama pelanggan")?;
        require_email(self.email.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_number: Option<String>,
}

impl UpdateCustomerRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.customer_name {
            require_non_blank(name, "Nama pelanggan")?;
        }
        require_email(self.email.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_customer_validation() {
        let mut req = CreateCustomerRequest {
            customer_name: "Budi Santoso".into(),
            email: Some("budi@example.com".into()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        req.email = Some("budi".into());
        assert_eq!(req.validate(), Err("Format email tidak valid".to_string()));

        req.customer_name = " ".into();
        assert_eq!(req.validate(), Err("Nama pelanggan wajib diisi".to_string()));
    }
}
