use super::model;
use contracts::domain::a003_customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use leptos::prelude::*;

use crate::shared::dialog::{DialogService, FormPayload};
use crate::shared::toast::ToastService;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFields {
    pub customer_name: String,
    pub email: String,
    pub phone_number: String,
    pub identity_number: String,
}

impl CustomerFields {
    pub fn from_record(customer: &Customer) -> Self {
        Self {
            customer_name: customer.customer_name.clone(),
            email: customer.email.clone(),
            phone_number: customer.phone_number.clone(),
            identity_number: customer.identity_number.clone(),
        }
    }

    pub fn to_create(&self) -> CreateCustomerRequest {
        CreateCustomerRequest {
            customer_name: self.customer_name.trim().to_string(),
            email: optional(&self.email),
            phone_number: optional(&self.phone_number),
            identity_number: optional(&self.identity_number),
        }
    }

    /// Blank fields are sent as empty strings so they can be cleared
    pub fn to_update(&self) -> UpdateCustomerRequest {
        UpdateCustomerRequest {
            customer_name: Some(self.customer_name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            phone_number: Some(self.phone_number.trim().to_string()),
            identity_number: Some(self.identity_number.trim().to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_create().validate()
    }
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

#[derive(Clone, Copy)]
pub struct CustomerFormViewModel {
    pub customer_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone_number: RwSignal<String>,
    pub identity_number: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    edit_mode: RwSignal<bool>,
    payload: StoredValue<FormPayload<Customer>>,
}

impl CustomerFormViewModel {
    pub fn new() -> Self {
        Self {
            customer_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone_number: RwSignal::new(String::new()),
            identity_number: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            edit_mode: RwSignal::new(false),
            payload: StoredValue::new(FormPayload::create()),
        }
    }

    pub fn load(&self, payload: FormPayload<Customer>) {
        let fields = payload
            .record
            .as_ref()
            .map(CustomerFields::from_record)
            .unwrap_or_default();
        self.customer_name.set(fields.customer_name);
        self.email.set(fields.email);
        self.phone_number.set(fields.phone_number);
        self.identity_number.set(fields.identity_number);
        self.error.set(None);
        self.saving.set(false);
        self.edit_mode.set(payload.is_edit());
        self.payload.set_value(payload);
    }

    pub fn fields(&self) -> CustomerFields {
        CustomerFields {
            customer_name: self.customer_name.get_untracked(),
            email: self.email.get_untracked(),
            phone_number: self.phone_number.get_untracked(),
            identity_number: self.identity_number.get_untracked(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode.get()
    }

    pub fn save_command(&self, dialog: DialogService, toast: ToastService) {
        let fields = self.fields();
        if let Err(msg) = fields.validate() {
            self.error.set(Some(msg));
            return;
        }

        let payload = self.payload.get_value();
        let id = payload.record.as_ref().map(|c| c.id);
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match model::save(id, &fields).await {
                Ok(saved) => {
                    toast.success(
                        "Berhasil",
                        format!("Pelanggan \"{}\" berhasil disimpan", saved.customer_name),
                    );
                    payload.notify_saved(saved);
                    dialog.close();
                }
                Err(e) => {
                    toast.error("Gagal menyimpan pelanggan", e.message.clone());
                    error.set(Some(e.message));
                }
            }
            saving.set(false);
        });
    }
}

impl Default for CustomerFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted_on_create() {
        let fields = CustomerFields {
            customer_name: "Budi Santoso".into(),
            email: " ".into(),
            phone_number: "081234567890".into(),
            identity_number: String::new(),
        };
        let req = fields.to_create();
        assert_eq!(req.email, None);
        assert_eq!(req.phone_number.as_deref(), Some("081234567890"));
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn test_update_can_clear_fields() {
        let fields = CustomerFields {
            customer_name: "Budi".into(),
            ..Default::default()
        };
        assert_eq!(fields.to_update().email.as_deref(), Some(""));
    }

    #[test]
    fn test_invalid_email() {
        let fields = CustomerFields {
            customer_name: "Budi".into(),
            email: "budi.kamusewa.id".into(),
            ..Default::default()
        };
        assert_eq!(fields.validate(), Err("Format email tidak valid".to_string()));
    }
}
