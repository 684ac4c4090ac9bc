use super::model;
use contracts::domain::a001_category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use leptos::prelude::*;

use crate::shared::dialog::{DialogService, FormPayload};
use crate::shared::toast::ToastService;

/// Plain snapshot of the form inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFields {
    pub category_name: String,
    pub description: String,
}

impl CategoryFields {
    pub fn from_record(category: &Category) -> Self {
        Self {
            category_name: category.category_name.clone(),
            description: category.description.clone(),
        }
    }

    pub fn to_create(&self) -> CreateCategoryRequest {
        CreateCategoryRequest {
            category_name: self.category_name.trim().to_string(),
            description: non_empty(&self.description),
        }
    }

    pub fn to_update(&self) -> UpdateCategoryRequest {
        UpdateCategoryRequest {
            category_name: Some(self.category_name.trim().to_string()),
            description: Some(self.description.trim().to_string()),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// ViewModel for the category form dialog
#[derive(Clone, Copy)]
pub struct CategoryFormViewModel {
    pub category_name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    edit_mode: RwSignal<bool>,
    payload: StoredValue<FormPayload<Category>>,
}

impl CategoryFormViewModel {
    pub fn new() -> Self {
        Self {
            category_name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            edit_mode: RwSignal::new(false),
            payload: StoredValue::new(FormPayload::create()),
        }
    }

    /// Seeds the inputs from the payload the trigger stored before opening
    pub fn load(&self, payload: FormPayload<Category>) {
        let fields = payload
            .record
            .as_ref()
            .map(CategoryFields::from_record)
            .unwrap_or_default();
        self.category_name.set(fields.category_name);
        self.description.set(fields.description);
        self.error.set(None);
        self.saving.set(false);
        self.edit_mode.set(payload.is_edit());
        self.payload.set_value(payload);
    }

    pub fn fields(&self) -> CategoryFields {
        CategoryFields {
            category_name: self.category_name.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode.get()
    }

    pub fn save_command(&self, dialog: DialogService, toast: ToastService) {
        let fields = self.fields();
        if let Err(msg) = fields.to_create().validate() {
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
                        format!("Kategori \"{}\" berhasil disimpan", saved.category_name),
                    );
                    payload.notify_saved(saved);
                    dialog.close();
                }
                Err(e) => {
                    toast.error("Gagal menyimpan kategori", e.message.clone());
                    error.set(Some(e.message));
                }
            }
            saving.set(false);
        });
    }
}

impl Default for CategoryFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category() -> Category {
        Category {
            id: 3,
            user_id: 1,
            category_name: "Kamera".into(),
            description: "Kamera dan lensa".into(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_fields_from_record() {
        let fields = CategoryFields::from_record(&category());
        assert_eq!(fields.category_name, "Kamera");
        assert_eq!(fields.description, "Kamera dan lensa");
    }

    #[test]
    fn test_create_request_trims_and_drops_empty_description() {
        let fields = CategoryFields {
            category_name: "  Tenda ".into(),
            description: "   ".into(),
        };
        let req = fields.to_create();
        assert_eq!(req.category_name, "Tenda");
        assert_eq!(req.description, None);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let fields = CategoryFields::default();
        assert!(fields.to_create().validate().is_err());
    }
}
