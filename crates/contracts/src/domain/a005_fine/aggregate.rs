use serde::{Deserialize, Serialize};

use crate::domain::common::{require_non_blank, AggregateRoot};

/// Payment state of a fine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    #[default]
    Unpaid,
    Paid,
}

impl FineStatus {
    pub fn label(self) -> &'static str {
        match self {
            FineStatus::Unpaid => "Belum Dibayar",
            FineStatus::Paid => "Sudah Dibayar",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FineStatus::Unpaid => "unpaid",
            FineStatus::Paid => "paid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unpaid" => Some(FineStatus::Unpaid),
            "paid" => Some(FineStatus::Paid),
            _ => None,
        }
    }
}

/// Denda atas keterlambatan atau kerusakan pada satu penyewaan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fine {
    pub id: i64,
    pub rental_id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub item_name: String,
    pub amount: f64,
    pub reason: String,
    pub fine_date: String,
    #[serde(default)]
    pub status: FineStatus,
}

impl AggregateRoot for Fine {
    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "fines"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateFineRequest {
    pub rental_id: i64,
    pub amount: f64,
    pub reason: String,
    pub fine_date: String,
    pub status: FineStatus,
}

impl CreateFineRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.rental_id <= 0 {
            return Err("Penyewaan wajib dipilih".into());
        }
        validate_amount(self.amount)?;
        require_non_blank(&self.reason, "Alasan denda")?;
        require_non_blank(&self.fine_date, "Tanggal denda")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateFineRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FineStatus>,
}

impl UpdateFineRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        if let Some(reason) = &self.reason {
            require_non_blank(reason, "Alasan denda")?;
        }
        Ok(())
    }
}

fn validate_amount(amount: f64) -> Result<(), String> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Jumlah denda harus lebih dari nol".into());
    }
    Ok(())
}

/// Sum of fines not yet paid
pub fn outstanding_amount(fines: &[Fine]) -> f64 {
    fines
        .iter()
        .filter(|f| f.status == FineStatus::Unpaid)
        .map(|f| f.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fine(amount: f64, status: FineStatus) -> Fine {
        Fine {
            id: 1,
            rental_id: 1001,
            customer_name: "Budi Santoso".into(),
            item_name: "Kamera Sony A7III".into(),
            amount,
            reason: "Keterlambatan 5 hari".into(),
            fine_date: "2023-05-15".into(),
            status,
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FineStatus::Paid).unwrap(), r#""paid""#);
        assert_eq!(FineStatus::parse("unpaid"), Some(FineStatus::Unpaid));
        assert_eq!(FineStatus::parse("lunas"), None);
    }

    #[test]
    fn test_outstanding_amount() {
        let fines = vec![
            fine(250_000.0, FineStatus::Unpaid),
            fine(100_000.0, FineStatus::Paid),
            fine(300_000.0, FineStatus::Unpaid),
        ];
        assert_eq!(outstanding_amount(&fines), 550_000.0);
    }

    #[test]
    fn test_create_request_validation() {
        let mut req = CreateFineRequest {
            rental_id: 1001,
            amount: 0.0,
            reason: "Kerusakan layar".into(),
            fine_date: "2023-05-22".into(),
            status: FineStatus::Unpaid,
        };
        assert_eq!(req.validate(), Err("Jumlah denda harus lebih dari nol".to_string()));
        req.amount = 500_000.0;
        assert!(req.validate().is_ok());
    }
}
