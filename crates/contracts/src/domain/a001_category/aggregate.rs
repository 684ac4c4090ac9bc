use serde::{Deserialize, Serialize};

use crate::domain::common::{require_non_blank, AggregateRoot};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Kategori barang sewaan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub category_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl AggregateRoot for Category {
    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "categories"
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_blank(&self.category_name, "Nama kategori")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateCategoryRequest {
    pub fn validate(&self) -> Result<(), String> {
        match &self.category_name {
            Some(name) => require_non_blank(name, "Nama kategori"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Category::collection_path(), "/categories");
        assert_eq!(Category::member_path(7), "/categories/7");
    }

    #[test]
    fn test_create_request_skips_missing_description() {
        let req = CreateCategoryRequest {
            category_name: "Kamera".into(),
            description: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "category_name": "Kamera" }));
    }

    #[test]
    fn test_update_request_validation() {
        assert!(UpdateCategoryRequest::default().validate().is_ok());
        let blank = UpdateCategoryRequest {
            category_name: Some("  ".into()),
            description: None,
        };
        assert!(blank.validate().is_err());
    }
}
