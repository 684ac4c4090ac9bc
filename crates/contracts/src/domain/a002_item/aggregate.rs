use serde::{Deserialize, Serialize};

use crate::domain::common::{require_non_blank, AggregateRoot};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Kategori yang melekat pada barang (bentuk ringkas dari backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: i64,
    pub name: String,
}

/// Barang yang dapat disewa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub user_id: i64,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    pub total_stock: i64,
    pub available_stock: i64,
    pub rental_price: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub category_ids: Vec<ItemCategory>,
}

impl Item {
    /// Available units at or below this count are flagged "Stok Menipis"
    pub const LOW_STOCK_THRESHOLD: i64 = 2;

    pub fn is_available(&self) -> bool {
        self.available_stock > 0
    }

    /// Units currently out with customers
    pub fn rented_stock(&self) -> i64 {
        (self.total_stock - self.available_stock).max(0)
    }

    pub fn is_low_stock(&self) -> bool {
        self.available_stock <= Self::LOW_STOCK_THRESHOLD
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.category_ids.iter().map(|c| c.name.as_str()).collect()
    }
}

impl AggregateRoot for Item {
    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "items"
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub total_stock: i64,
    pub available_stock: i64,
    pub rental_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<i64>>,
}

impl CreateItemRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_non_blank(&self.item_name, "Nama barang")?;
        validate_stock(self.total_stock, self.available_stock)?;
        validate_price(self.rental_price)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<i64>>,
}

impl UpdateItemRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.item_name {
            require_non_blank(name, "Nama barang")?;
        }
        if let (Some(total), Some(available)) = (self.total_stock, self.available_stock) {
            validate_stock(total, available)?;
        }
        if let Some(price) = self.rental_price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_stock(total: i64, available: i64) -> Result<(), String> {
    if total < 0 || available < 0 {
        return Err("Stok tidak boleh negatif".into());
    }
    if available > total {
        return Err("Stok tersedia tidak boleh melebihi total stok".into());
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("Harga sewa tidak boleh negatif".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateItemRequest {
        CreateItemRequest {
            item_name: "Kamera Sony A7III".into(),
            description: None,
            total_stock: 5,
            available_stock: 5,
            rental_price: 250_000.0,
            category_ids: Some(vec![1]),
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_available_cannot_exceed_total() {
        let mut req = request();
        req.available_stock = 6;
        assert_eq!(
            req.validate(),
            Err("Stok tersedia tidak boleh melebihi total stok".to_string())
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut req = request();
        req.rental_price = -1.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_item_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 42, "user_id": 1, "item_name": "Camera",
            "total_stock": 3, "available_stock": 1, "rental_price": 150000
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.rented_stock(), 2);
        assert!(item.category_ids.is_empty());
        assert!(item.is_available());
        assert!(item.is_low_stock());
    }
}
