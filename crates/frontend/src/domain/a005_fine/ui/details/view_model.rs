use super::model;
use contracts::domain::a004_rental::Rental;
use contracts::domain::a005_fine::{CreateFineRequest, Fine, FineStatus, UpdateFineRequest};
use leptos::prelude::*;

use crate::shared::components::table::{format_thousands, parse_rupiah};
use crate::shared::date_utils::today_iso;
use crate::shared::dialog::{DialogService, FormPayload};
use crate::shared::toast::ToastService;

#[derive(Debug, Clone, PartialEq)]
pub struct FineFields {
    pub rental_id: String,
    pub amount: String,
    pub reason: String,
    pub fine_date: String,
    /// `unpaid` / `paid`
    pub status: String,
}

impl FineFields {
    pub fn starting(today: String) -> Self {
        Self {
            rental_id: String::new(),
            amount: String::new(),
            reason: String::new(),
            fine_date: today,
            status: FineStatus::Unpaid.as_str().to_string(),
        }
    }

    pub fn from_record(fine: &Fine) -> Self {
        Self {
            rental_id: fine.rental_id.to_string(),
            amount: format_thousands(fine.amount),
            reason: fine.reason.clone(),
            fine_date: fine.fine_date.split('T').next().unwrap_or_default().to_string(),
            status: fine.status.as_str().to_string(),
        }
    }

    fn parsed_amount(&self) -> Result<f64, String> {
        parse_rupiah(&self.amount).ok_or_else(|| "Jumlah denda harus berupa angka".to_string())
    }

    fn parsed_status(&self) -> FineStatus {
        FineStatus::parse(&self.status).unwrap_or_default()
    }

    pub fn to_create(&self) -> Result<CreateFineRequest, String> {
        let request = CreateFineRequest {
            rental_id: self.rental_id.trim().parse().unwrap_or(0),
            amount: self.parsed_amount()?,
            reason: self.reason.trim().to_string(),
            fine_date: self.fine_date.clone(),
            status: self.parsed_status(),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn to_update(&self) -> Result<UpdateFineRequest, String> {
        let request = UpdateFineRequest {
            amount: Some(self.parsed_amount()?),
            reason: Some(self.reason.trim().to_string()),
            fine_date: Some(self.fine_date.clone()).filter(|d| !d.is_empty()),
            status: Some(self.parsed_status()),
        };
        request.validate()?;
        Ok(request)
    }
}

/// Option label for the rental select
pub fn rental_option_label(rental: &Rental) -> String {
    if rental.rental_number.is_empty() {
        format!("#{} - {}", rental.id, rental.customer_name)
    } else {
        format!("{} - {}", rental.rental_number, rental.customer_name)
    }
}

#[derive(Clone, Copy)]
pub struct FineFormViewModel {
    pub rental_id: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub fine_date: RwSignal<String>,
    pub status: RwSignal<String>,
    pub rentals: RwSignal<Vec<Rental>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    edit_mode: RwSignal<bool>,
    payload: StoredValue<FormPayload<Fine>>,
}

impl FineFormViewModel {
    pub fn new() -> Self {
        Self {
            rental_id: RwSignal::new(String::new()),
            amount: RwSignal::new(String::new()),
            reason: RwSignal::new(String::new()),
            fine_date: RwSignal::new(String::new()),
            status: RwSignal::new(FineStatus::Unpaid.as_str().to_string()),
            rentals: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            edit_mode: RwSignal::new(false),
            payload: StoredValue::new(FormPayload::create()),
        }
    }

    pub fn load(&self, payload: FormPayload<Fine>) {
        let fields = match payload.record.as_ref() {
            Some(fine) => FineFields::from_record(fine),
            None => FineFields::starting(today_iso()),
        };
        self.rental_id.set(fields.rental_id);
        self.amount.set(fields.amount);
        self.reason.set(fields.reason);
        self.fine_date.set(fields.fine_date);
        self.status.set(fields.status);
        self.error.set(None);
        self.saving.set(false);
        self.edit_mode.set(payload.is_edit());
        self.payload.set_value(payload);

        let rentals = self.rentals;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_rentals().await {
                Ok(rows) => rentals.set(rows),
                Err(e) => log::warn!("rental options unavailable: {}", e),
            }
        });
    }

    pub fn fields(&self) -> FineFields {
        FineFields {
            rental_id: self.rental_id.get_untracked(),
            amount: self.amount.get_untracked(),
            reason: self.reason.get_untracked(),
            fine_date: self.fine_date.get_untracked(),
            status: self.status.get_untracked(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode.get()
    }

    pub fn save_command(&self, dialog: DialogService, toast: ToastService) {
        let fields = self.fields();
        let payload = self.payload.get_value();

        let request = match payload.record.as_ref().map(|f| f.id) {
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
                    toast.success("Berhasil", "Denda berhasil disimpan");
                    payload.notify_saved(saved);
                    dialog.close();
                }
                Err(e) => {
                    toast.error("Gagal menyimpan denda", e.message.clone());
                    error.set(Some(e.message));
                }
            }
            saving.set(false);
        });
    }
}

impl Default for FineFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FineFields {
        FineFields {
            rental_id: "1001".into(),
            amount: "Rp 250.000".into(),
            reason: "Keterlambatan 5 hari".into(),
            ..FineFields::starting("2023-05-15".into())
        }
    }

    #[test]
    fn test_create_parses_rupiah_amount() {
        let req = filled().to_create().unwrap();
        assert_eq!(req.rental_id, 1001);
        assert_eq!(req.amount, 250_000.0);
        assert_eq!(req.status, FineStatus::Unpaid);
        assert_eq!(req.fine_date, "2023-05-15");
    }

    #[test]
    fn test_rental_is_required() {
        let mut f = filled();
        f.rental_id.clear();
        assert_eq!(f.to_create().unwrap_err(), "Penyewaan wajib dipilih");
    }

    #[test]
    fn test_bad_amount() {
        let mut f = filled();
        f.amount = "banyak".into();
        assert_eq!(f.to_create().unwrap_err(), "Jumlah denda harus berupa angka");
        f.amount = "0".into();
        assert_eq!(f.to_update().unwrap_err(), "Jumlah denda harus lebih dari nol");
    }

    #[test]
    fn test_from_record_for_edit() {
        let fine = Fine {
            id: 4,
            rental_id: 1002,
            customer_name: "Siti".into(),
            item_name: "Proyektor".into(),
            amount: 500_000.0,
            reason: "Kerusakan lensa".into(),
            fine_date: "2023-05-22T00:00:00Z".into(),
            status: FineStatus::Paid,
        };
        let f = FineFields::from_record(&fine);
        assert_eq!(f.amount, "500.000");
        assert_eq!(f.fine_date, "2023-05-22");
        let update = f.to_update().unwrap();
        assert_eq!(update.status, Some(FineStatus::Paid));
        assert_eq!(update.amount, Some(500_000.0));
    }
}
