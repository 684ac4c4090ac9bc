use chrono::{Duration, NaiveDate};
use contracts::domain::a002_item::Item;
use contracts::domain::a004_rental::{parse_date, Rental, RentalStatus};
use contracts::domain::a005_fine::{outstanding_amount, Fine};

pub const RECENT_LIMIT: usize = 5;
/// Active rentals ending within this many days are listed as due soon
pub const DUE_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverviewSummary {
    pub total_items: usize,
    pub active_rentals: usize,
    pub overdue_rentals: usize,
    pub total_customers: usize,
    pub outstanding_fines: f64,
    pub low_stock: Vec<Item>,
    pub recent_rentals: Vec<Rental>,
    pub due_soon: Vec<Rental>,
}

pub fn summarize(
    items: &[Item],
    rentals: &[Rental],
    customer_count: usize,
    fines: &[Fine],
    today: NaiveDate,
) -> OverviewSummary {
    let active_rentals = rentals
        .iter()
        .filter(|r| r.status == RentalStatus::Active)
        .count();
    // Past-due active rentals count as overdue even before the backend flips them.
    let overdue_rentals = rentals
        .iter()
        .filter(|r| r.status == RentalStatus::Overdue || r.is_past_due(today))
        .count();

    let mut recent_rentals = rentals.to_vec();
    recent_rentals.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.start_date.cmp(&a.start_date))
    });
    recent_rentals.truncate(RECENT_LIMIT);

    let horizon = today + Duration::days(DUE_SOON_DAYS);
    let mut due_soon: Vec<Rental> = rentals
        .iter()
        .filter(|r| r.status == RentalStatus::Active)
        .filter(|r| {
            parse_date(&r.end_date)
                .map(|end| end >= today && end <= horizon)
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    due_soon.sort_by(|a, b| a.end_date.cmp(&b.end_date));

    OverviewSummary {
        total_items: items.len(),
        active_rentals,
        overdue_rentals,
        total_customers: customer_count,
        outstanding_fines: outstanding_amount(fines),
        low_stock: items.iter().filter(|i| i.is_low_stock()).cloned().collect(),
        recent_rentals,
        due_soon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_fine::FineStatus;

    fn item(id: i64, available: i64) -> Item {
        Item {
            id,
            user_id: 1,
            item_name: format!("Barang {}", id),
            description: String::new(),
            total_stock: 10,
            available_stock: available,
            rental_price: 50_000.0,
            created_at: String::new(),
            updated_at: String::new(),
            category_ids: vec![],
        }
    }

    fn rental(id: i64, status: RentalStatus, end: &str, created: &str) -> Rental {
        Rental {
            id,
            user_id: 1,
            customer_id: 1,
            customer_name: "Budi".into(),
            rental_number: format!("RNT-{:03}", id),
            title: format!("Sewa {}", id),
            start_date: "2024-05-01".into(),
            end_date: end.into(),
            total_cost: 100_000.0,
            status,
            created_at: created.into(),
            updated_at: String::new(),
            rental_items: vec![],
        }
    }

    fn fine(amount: f64, status: FineStatus) -> Fine {
        Fine {
            id: 1,
            rental_id: 1,
            customer_name: String::new(),
            item_name: String::new(),
            amount,
            reason: "Terlambat".into(),
            fine_date: "2024-05-10".into(),
            status,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    #[test]
    fn test_headline_counters() {
        let items = vec![item(1, 5), item(2, 2), item(3, 0)];
        let rentals = vec![
            rental(1, RentalStatus::Active, "2024-05-12", "2024-05-01T08:00:00Z"),
            rental(2, RentalStatus::Completed, "2024-05-05", "2024-04-20T08:00:00Z"),
            rental(3, RentalStatus::Active, "2024-05-08", "2024-04-25T08:00:00Z"),
        ];
        let fines = vec![fine(200_000.0, FineStatus::Unpaid), fine(50_000.0, FineStatus::Paid)];

        let s = summarize(&items, &rentals, 4, &fines, today());
        assert_eq!(s.total_items, 3);
        assert_eq!(s.active_rentals, 2);
        assert_eq!(s.overdue_rentals, 1);
        assert_eq!(s.total_customers, 4);
        assert_eq!(s.outstanding_fines, 200_000.0);
        assert_eq!(s.low_stock.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_recent_rentals_newest_first_and_capped() {
        let rentals: Vec<Rental> = (1..=7)
            .map(|i| {
                rental(
                    i,
                    RentalStatus::Completed,
                    "2024-05-02",
                    &format!("2024-05-0{}T00:00:00Z", i),
                )
            })
            .collect();
        let s = summarize(&[], &rentals, 0, &[], today());
        assert_eq!(
            s.recent_rentals.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![7, 6, 5, 4, 3]
        );
    }

    #[test]
    fn test_due_soon_window() {
        let rentals = vec![
            rental(1, RentalStatus::Active, "2024-05-13", ""),
            rental(2, RentalStatus::Active, "2024-05-10", ""),
            rental(3, RentalStatus::Active, "2024-05-14", ""),
            rental(4, RentalStatus::Completed, "2024-05-11", ""),
            rental(5, RentalStatus::Active, "2024-05-09", ""),
        ];
        let s = summarize(&[], &rentals, 0, &[], today());
        assert_eq!(s.due_soon.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }
}
