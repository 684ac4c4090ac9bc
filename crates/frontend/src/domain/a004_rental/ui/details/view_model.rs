use super::model;
use contracts::domain::a002_item::Item;
use contracts::domain::a003_customer::Customer;
use contracts::domain::a004_rental::{
    estimate_total, rental_days, CreateRentalRequest, Rental, RentalLineRequest,
    UpdateRentalRequest,
};
use leptos::prelude::*;

use crate::shared::date_utils::today_iso;
use crate::shared::dialog::{DialogService, FormPayload};
use crate::shared::toast::ToastService;

/// One rented item row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDraft {
    pub item_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalFields {
    /// Select value; empty until a customer is chosen
    pub customer_id: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub lines: Vec<LineDraft>,
}

impl RentalFields {
    pub fn starting(today: String) -> Self {
        Self {
            start_date: today,
            ..Default::default()
        }
    }

    pub fn from_record(rental: &Rental) -> Self {
        Self {
            customer_id: rental.customer_id.to_string(),
            title: rental.title.clone(),
            start_date: date_part(&rental.start_date),
            end_date: date_part(&rental.end_date),
            lines: rental
                .rental_items
                .iter()
                .map(|l| LineDraft {
                    item_id: l.item_id,
                    quantity: l.quantity,
                })
                .collect(),
        }
    }

    fn line_requests(&self) -> Vec<RentalLineRequest> {
        self.lines
            .iter()
            .map(|l| RentalLineRequest {
                item_id: l.item_id,
                quantity: l.quantity,
            })
            .collect()
    }

    pub fn to_create(&self) -> Result<CreateRentalRequest, String> {
        let request = CreateRentalRequest {
            customer_id: self.customer_id.trim().parse().unwrap_or(0),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            title: self.title.trim().to_string(),
            items: self.line_requests(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Only the end date and the lines can change once a rental exists
    pub fn to_update(&self) -> Result<UpdateRentalRequest, String> {
        let request = UpdateRentalRequest {
            end_date: Some(self.end_date.clone()),
            items: Some(self.line_requests()),
        };
        request.validate(&self.start_date)?;
        Ok(request)
    }

    /// Adding an item already on the list bumps its quantity
    pub fn add_line(&mut self, item_id: i64) {
        match self.lines.iter_mut().find(|l| l.item_id == item_id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(LineDraft {
                item_id,
                quantity: 1,
            }),
        }
    }

    pub fn set_quantity(&mut self, item_id: i64, quantity: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove_line(&mut self, item_id: i64) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// None while the period is incomplete
    pub fn estimate(&self, price_of: impl Fn(i64) -> Option<f64>) -> Option<f64> {
        let days = rental_days(&self.start_date, &self.end_date)?;
        let priced: Vec<(i64, f64)> = self
            .lines
            .iter()
            .filter_map(|l| price_of(l.item_id).map(|price| (l.quantity, price)))
            .collect();
        Some(estimate_total(&priced, days))
    }
}

fn date_part(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}

/// ViewModel for the rental form dialog
#[derive(Clone, Copy)]
pub struct RentalFormViewModel {
    pub customer_id: RwSignal<String>,
    pub title: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub lines: RwSignal<Vec<LineDraft>>,
    /// Item chosen in the "add item" select
    pub picker: RwSignal<String>,
    pub customers: RwSignal<Vec<Customer>>,
    pub items: RwSignal<Vec<Item>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    edit_mode: RwSignal<bool>,
    payload: StoredValue<FormPayload<Rental>>,
}

impl RentalFormViewModel {
    pub fn new() -> Self {
        Self {
            customer_id: RwSignal::new(String::new()),
            title: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
            lines: RwSignal::new(Vec::new()),
            picker: RwSignal::new(String::new()),
            customers: RwSignal::new(Vec::new()),
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            edit_mode: RwSignal::new(false),
            payload: StoredValue::new(FormPayload::create()),
        }
    }

    pub fn load(&self, payload: FormPayload<Rental>) {
        let fields = match payload.record.as_ref() {
            Some(rental) => RentalFields::from_record(rental),
            None => RentalFields::starting(today_iso()),
        };
        self.customer_id.set(fields.customer_id);
        self.title.set(fields.title);
        self.start_date.set(fields.start_date);
        self.end_date.set(fields.end_date);
        self.lines.set(fields.lines);
        self.picker.set(String::new());
        self.error.set(None);
        self.saving.set(false);
        self.edit_mode.set(payload.is_edit());
        self.payload.set_value(payload);
        self.load_options();
    }

    fn load_options(&self) {
        let customers = self.customers;
        let items = self.items;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_customers().await {
                Ok(rows) => customers.set(rows),
                Err(e) => log::warn!("customer options unavailable: {}", e),
            }
            match model::fetch_items().await {
                Ok(rows) => items.set(rows),
                Err(e) => log::warn!("item options unavailable: {}", e),
            }
        });
    }

    pub fn fields(&self) -> RentalFields {
        RentalFields {
            customer_id: self.customer_id.get_untracked(),
            title: self.title.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            lines: self.lines.get_untracked(),
        }
    }

    fn edit_lines(&self, f: impl FnOnce(&mut RentalFields)) {
        self.lines.update(|lines| {
            let mut fields = RentalFields {
                lines: std::mem::take(lines),
                ..Default::default()
            };
            f(&mut fields);
            *lines = fields.lines;
        });
    }

    pub fn add_picked(&self) {
        let Ok(item_id) = self.picker.get_untracked().parse::<i64>() else {
            return;
        };
        self.edit_lines(|f| f.add_line(item_id));
        self.picker.set(String::new());
    }

    pub fn set_quantity(&self, item_id: i64, raw: &str) {
        let quantity = raw.trim().parse().unwrap_or(0);
        self.edit_lines(|f| f.set_quantity(item_id, quantity));
    }

    pub fn remove_line(&self, item_id: i64) {
        self.edit_lines(|f| f.remove_line(item_id));
    }

    pub fn item_name(&self, item_id: i64) -> String {
        self.items.with(|items| {
            items
                .iter()
                .find(|i| i.id == item_id)
                .map(|i| i.item_name.clone())
                .or_else(|| {
                    self.payload.with_value(|p| {
                        p.record.as_ref().and_then(|r| {
                            r.rental_items
                                .iter()
                                .find(|l| l.item_id == item_id)
                                .map(|l| l.item_name.clone())
                        })
                    })
                })
                .unwrap_or_else(|| format!("Barang #{}", item_id))
        })
    }

    /// Reactive estimate over the current inputs and item prices
    pub fn estimate(&self) -> Option<f64> {
        let fields = RentalFields {
            start_date: self.start_date.get(),
            end_date: self.end_date.get(),
            lines: self.lines.get(),
            ..Default::default()
        };
        self.items.with(|items| {
            fields.estimate(|id| items.iter().find(|i| i.id == id).map(|i| i.rental_price))
        })
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode.get()
    }

    pub fn save_command(&self, dialog: DialogService, toast: ToastService) {
        let fields = self.fields();
        let payload = self.payload.get_value();
        let id = payload.record.as_ref().map(|r| r.id);

        let request = match id {
            Some(id) => fields.to_update().map(|u| model::Submit::Update(id, u)),
            None => fields.to_create().map(model::Submit::Create),
        };
        let request = match request {
            Ok(request) => request,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match model::submit(request).await {
                Ok(saved) => {
                    toast.success(
                        "Berhasil",
                        format!("Penyewaan \"{}\" berhasil disimpan", saved.title),
                    );
                    payload.notify_saved(saved);
                    dialog.close();
                }
                Err(e) => {
                    toast.error("Gagal menyimpan penyewaan", e.message.clone());
                    error.set(Some(e.message));
                }
            }
            saving.set(false);
        });
    }
}

impl Default for RentalFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_rental::{RentalItem, RentalStatus};

    fn filled() -> RentalFields {
        let mut f = RentalFields::starting("2024-05-01".into());
        f.customer_id = "3".into();
        f.title = "Acara kantor".into();
        f.end_date = "2024-05-04".into();
        f.add_line(7);
        f
    }

    #[test]
    fn test_missing_customer_is_rejected() {
        let mut f = filled();
        f.customer_id.clear();
        assert_eq!(f.to_create().unwrap_err(), "Pelanggan wajib dipilih");
    }

    #[test]
    fn test_create_request_from_fields() {
        let req = filled().to_create().unwrap();
        assert_eq!(req.customer_id, 3);
        assert_eq!(req.items, vec![RentalLineRequest { item_id: 7, quantity: 1 }]);
    }

    #[test]
    fn test_add_line_merges_duplicates() {
        let mut f = filled();
        f.add_line(7);
        f.add_line(9);
        assert_eq!(f.lines.len(), 2);
        assert_eq!(f.lines[0].quantity, 2);
        f.remove_line(7);
        assert_eq!(f.lines, vec![LineDraft { item_id: 9, quantity: 1 }]);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let mut f = filled();
        f.set_quantity(7, 0);
        assert_eq!(f.to_create().unwrap_err(), "Jumlah barang harus lebih dari nol");
    }

    #[test]
    fn test_estimate_uses_known_prices() {
        let mut f = filled();
        f.add_line(7);
        f.add_line(8);
        let price = |id: i64| match id {
            7 => Some(100_000.0),
            _ => None,
        };
        assert_eq!(f.estimate(price), Some(600_000.0));

        f.end_date.clear();
        assert_eq!(f.estimate(price), None);
    }

    #[test]
    fn test_update_keeps_start_date_rule() {
        let rental = Rental {
            id: 11,
            user_id: 1,
            customer_id: 3,
            customer_name: "Budi Santoso".into(),
            rental_number: "RNT-011".into(),
            title: "Sewa kamera".into(),
            start_date: "2024-05-01T00:00:00Z".into(),
            end_date: "2024-05-03T00:00:00Z".into(),
            total_cost: 300_000.0,
            status: RentalStatus::Active,
            created_at: String::new(),
            updated_at: String::new(),
            rental_items: vec![RentalItem {
                item_id: 7,
                quantity: 1,
                subtotal: 300_000.0,
                item_name: "Kamera".into(),
                rental_price: 100_000.0,
            }],
        };
        let mut f = RentalFields::from_record(&rental);
        assert_eq!(f.start_date, "2024-05-01");
        assert!(f.to_update().is_ok());

        f.end_date = "2024-04-30".into();
        assert_eq!(
            f.to_update().unwrap_err(),
            "Tanggal selesai tidak boleh sebelum tanggal mulai"
        );
    }
}
