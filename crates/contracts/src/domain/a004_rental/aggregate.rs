use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{require_non_blank, AggregateRoot};

// ============================================================================
// Status
// ============================================================================

/// Rental status, numeric on the wire: 1 = active, 2 = completed, 3 = overdue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RentalStatus {
    Active,
    Completed,
    Overdue,
}

impl RentalStatus {
    pub const ALL: [RentalStatus; 3] = [
        RentalStatus::Active,
        RentalStatus::Completed,
        RentalStatus::Overdue,
    ];

    pub fn code(self) -> u8 {
        match self {
            RentalStatus::Active => 1,
            RentalStatus::Completed => 2,
            RentalStatus::Overdue => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RentalStatus::Active),
            2 => Some(RentalStatus::Completed),
            3 => Some(RentalStatus::Overdue),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RentalStatus::Active => "Aktif",
            RentalStatus::Completed => "Selesai",
            RentalStatus::Overdue => "Terlambat",
        }
    }
}

impl TryFrom<u8> for RentalStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        RentalStatus::from_code(code).ok_or_else(|| format!("Unknown rental status: {}", code))
    }
}

impl From<RentalStatus> for u8 {
    fn from(status: RentalStatus) -> Self {
        status.code()
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Baris barang dalam satu transaksi sewa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalItem {
    pub item_id: i64,
    pub quantity: i64,
    pub subtotal: f64,
    pub item_name: String,
    pub rental_price: f64,
}

/// Transaksi penyewaan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: i64,
    pub user_id: i64,
    pub customer_id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub rental_number: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub total_cost: f64,
    pub status: RentalStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub rental_items: Vec<RentalItem>,
}

impl Rental {
    /// Rental length in whole days (at least one)
    pub fn days(&self) -> i64 {
        rental_days(&self.start_date, &self.end_date).unwrap_or(1)
    }

    /// Still open past its end date
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.status == RentalStatus::Active
            && parse_date(&self.end_date).map(|end| end < today).unwrap_or(false)
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.rental_items.iter().map(|i| i.item_name.as_str()).collect()
    }
}

impl AggregateRoot for Rental {
    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "rentals"
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentalLineRequest {
    pub item_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRentalRequest {
    pub customer_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub title: String,
    pub items: Vec<RentalLineRequest>,
}

impl CreateRentalRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_id <= 0 {
            return Err("Pelanggan wajib dipilih".into());
        }
        require_non_blank(&self.title, "Judul penyewaan")?;
        validate_period(&self.start_date, &self.end_date)?;
        validate_lines(&self.items)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRentalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RentalLineRequest>>,
}

impl UpdateRentalRequest {
    /// `start_date` of the rental being edited, the backend keeps it fixed
    pub fn validate(&self, start_date: &str) -> Result<(), String> {
        if let Some(end) = &self.end_date {
            validate_period(start_date, end)?;
        }
        if let Some(items) = &self.items {
            validate_lines(items)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateRentalStatusRequest {
    pub status: RentalStatus,
}

// ============================================================================
// Pure helpers
// ============================================================================

/// Parses `YYYY-MM-DD`, ignoring a trailing time part
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Whole days between two dates, rounded up, minimum one
pub fn rental_days(start: &str, end: &str) -> Option<i64> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    Some((end - start).num_days().abs().max(1))
}

/// Price estimate shown in the rental form before the backend computes the real total
pub fn estimate_total(lines: &[(i64, f64)], days: i64) -> f64 {
    lines
        .iter()
        .map(|(quantity, price)| *quantity as f64 * price * days as f64)
        .sum()
}

fn validate_period(start: &str, end: &str) -> Result<(), String> {
    let start = parse_date(start).ok_or_else(|| "Tanggal mulai tidak valid".to_string())?;
    let end = parse_date(end).ok_or_else(|| "Tanggal selesai tidak valid".to_string())?;
    if end < start {
        return Err("Tanggal selesai tidak boleh sebelum tanggal mulai".into());
    }
    Ok(())
}

fn validate_lines(lines: &[RentalLineRequest]) -> Result<(), String> {
    if lines.is_empty() {
        return Err("Pilih minimal satu barang".into());
    }
    if lines.iter().any(|l| l.quantity <= 0) {
        return Err("Jumlah barang harus lebih dari nol".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rental(status: RentalStatus, end_date: &str) -> Rental {
        Rental {
            id: 1,
            user_id: 1,
            customer_id: 3,
            customer_name: "Budi Santoso".into(),
            rental_number: "RNT-001".into(),
            title: "Sewa kamera".into(),
            start_date: "2024-05-01".into(),
            end_date: end_date.into(),
            total_cost: 750_000.0,
            status,
            created_at: String::new(),
            updated_at: String::new(),
            rental_items: vec![],
        }
    }

    #[test]
    fn test_status_endpoint_builds_on_member_path() {
        let r = rental(RentalStatus::Active, "2024-05-03");
        assert_eq!(r.id(), 1);
        assert_eq!(Rental::collection_path(), "/rentals");
        assert_eq!(Rental::member_path(r.id()), "/rentals/1");
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&UpdateRentalStatusRequest {
            status: RentalStatus::Overdue,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":3}"#);

        let parsed: UpdateRentalStatusRequest = serde_json::from_str(r#"{"status":2}"#).unwrap();
        assert_eq!(parsed.status, RentalStatus::Completed);

        assert!(serde_json::from_str::<UpdateRentalStatusRequest>(r#"{"status":9}"#).is_err());
    }

    #[test]
    fn test_rental_days() {
        assert_eq!(rental_days("2024-05-01", "2024-05-04"), Some(3));
        assert_eq!(rental_days("2024-05-01", "2024-05-01"), Some(1));
        assert_eq!(rental_days("2024-05-01T10:00:00Z", "2024-05-03"), Some(2));
        assert_eq!(rental_days("nope", "2024-05-03"), None);
    }

    #[test]
    fn test_estimate_total() {
        let total = estimate_total(&[(2, 100_000.0), (1, 50_000.0)], 3);
        assert_eq!(total, 750_000.0);
    }

    #[test]
    fn test_past_due_only_for_active() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert!(rental(RentalStatus::Active, "2024-05-09").is_past_due(today));
        assert!(!rental(RentalStatus::Active, "2024-05-10").is_past_due(today));
        assert!(!rental(RentalStatus::Completed, "2024-05-01").is_past_due(today));
    }

    #[test]
    fn test_create_request_validation() {
        let mut req = CreateRentalRequest {
            customer_id: 1,
            start_date: "2024-05-02".into(),
            end_date: "2024-05-01".into(),
            title: "Acara kantor".into(),
            items: vec![RentalLineRequest { item_id: 1, quantity: 1 }],
        };
        assert_eq!(
            req.validate(),
            Err("Tanggal selesai tidak boleh sebelum tanggal mulai".to_string())
        );

        req.end_date = "2024-05-05".into();
        assert!(req.validate().is_ok());

        req.items.clear();
        assert_eq!(req.validate(), Err("Pilih minimal satu barang".to_string()));
    }

    #[test]
    fn test_update_request_keeps_start_date() {
        let req = UpdateRentalRequest {
            end_date: Some("2024-04-30".into()),
            items: None,
        };
        assert!(req.validate("2024-05-01").is_err());
        assert!(req.validate("2024-04-01").is_ok());
    }
}
