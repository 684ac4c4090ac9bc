use super::model;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_item::{CreateItemRequest, Item, UpdateItemRequest};
use leptos::prelude::*;

use crate::shared::components::table::{format_thousands, parse_rupiah};
use crate::shared::dialog::{DialogService, FormPayload};
use crate::shared::toast::ToastService;

/// Plain snapshot of the form inputs; numbers stay text until submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFields {
    pub item_name: String,
    pub description: String,
    pub total_stock: String,
    pub available_stock: String,
    pub rental_price: String,
    pub category_ids: Vec<i64>,
}

impl ItemFields {
    pub fn from_record(item: &Item) -> Self {
        Self {
            item_name: item.item_name.clone(),
            description: item.description.clone(),
            total_stock: item.total_stock.to_string(),
            available_stock: item.available_stock.to_string(),
            rental_price: format_thousands(item.rental_price),
            category_ids: item.category_ids.iter().map(|c| c.id).collect(),
        }
    }

    /// Parsed request; a blank available stock means "all units available"
    pub fn to_create(&self) -> Result<CreateItemRequest, String> {
        let total_stock = parse_count(&self.total_stock, "Total stok")?;
        let available_stock = if self.available_stock.trim().is_empty() {
            total_stock
        } else {
            parse_count(&self.available_stock, "Stok tersedia")?
        };
        let rental_price = parse_rupiah(&self.rental_price)
            .ok_or_else(|| "Harga sewa harus berupa angka".to_string())?;

        let request = CreateItemRequest {
            item_name: self.item_name.trim().to_string(),
            description: Some(self.description.trim().to_string()).filter(|d| !d.is_empty()),
            total_stock,
            available_stock,
            rental_price,
            category_ids: Some(self.category_ids.clone()),
        };
        request.validate()?;
        Ok(request)
    }

    pub fn to_update(&self) -> Result<UpdateItemRequest, String> {
        let create = self.to_create()?;
        Ok(UpdateItemRequest {
            item_name: Some(create.item_name),
            description: Some(create.description.unwrap_or_default()),
            total_stock: Some(create.total_stock),
            available_stock: Some(create.available_stock),
            rental_price: Some(create.rental_price),
            category_ids: create.category_ids,
        })
    }

    pub fn toggle_category(&mut self, id: i64, checked: bool) {
        self.category_ids.retain(|c| *c != id);
        if checked {
            self.category_ids.push(id);
        }
    }
}

fn parse_count(value: &str, label: &str) -> Result<i64, String> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("{} harus berupa angka bulat", label))
}

/// ViewModel for the item form dialog
#[derive(Clone, Copy)]
pub struct ItemFormViewModel {
    pub item_name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub total_stock: RwSignal<String>,
    pub available_stock: RwSignal<String>,
    pub rental_price: RwSignal<String>,
    pub category_ids: RwSignal<Vec<i64>>,
    pub categories: RwSignal<Vec<Category>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    edit_mode: RwSignal<bool>,
    payload: StoredValue<FormPayload<Item>>,
}

impl ItemFormViewModel {
    pub fn new() -> Self {
        Self {
            item_name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            total_stock: RwSignal::new(String::new()),
            available_stock: RwSignal::new(String::new()),
            rental_price: RwSignal::new(String::new()),
            category_ids: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            edit_mode: RwSignal::new(false),
            payload: StoredValue::new(FormPayload::create()),
        }
    }

    pub fn load(&self, payload: FormPayload<Item>) {
        let fields = payload
            .record
            .as_ref()
            .map(ItemFields::from_record)
            .unwrap_or_default();
        self.item_name.set(fields.item_name);
        self.description.set(fields.description);
        self.total_stock.set(fields.total_stock);
        self.available_stock.set(fields.available_stock);
        self.rental_price.set(fields.rental_price);
        self.category_ids.set(fields.category_ids);
        self.error.set(None);
        self.saving.set(false);
        self.edit_mode.set(payload.is_edit());
        self.payload.set_value(payload);
        self.load_categories();
    }

    fn load_categories(&self) {
        let categories = self.categories;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_categories().await {
                Ok(rows) => categories.set(rows),
                Err(e) => log::warn!("category options unavailable: {}", e),
            }
        });
    }

    pub fn toggle_category(&self, id: i64, checked: bool) {
        self.category_ids.update(|ids| {
            let mut fields = ItemFields {
                category_ids: std::mem::take(ids),
                ..Default::default()
            };
            fields.toggle_category(id, checked);
            *ids = fields.category_ids;
        });
    }

    pub fn fields(&self) -> ItemFields {
        ItemFields {
            item_name: self.item_name.get_untracked(),
            description: self.description.get_untracked(),
            total_stock: self.total_stock.get_untracked(),
            available_stock: self.available_stock.get_untracked(),
            rental_price: self.rental_price.get_untracked(),
            category_ids: self.category_ids.get_untracked(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode.get()
    }

    pub fn save_command(&self, dialog: DialogService, toast: ToastService) {
        let fields = self.fields();
        let payload = self.payload.get_value();
        let id = payload.record.as_ref().map(|i| i.id);

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
                        format!("Barang \"{}\" berhasil disimpan", saved.item_name),
                    );
                    payload.notify_saved(saved);
                    dialog.close();
                }
                Err(e) => {
                    toast.error("Gagal menyimpan barang", e.message.clone());
                    error.set(Some(e.message));
                }
            }
            saving.set(false);
        });
    }
}

impl Default for ItemFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_item::ItemCategory;

    fn fields() -> ItemFields {
        ItemFields {
            item_name: "Kamera Sony A7III".into(),
            description: String::new(),
            total_stock: "5".into(),
            available_stock: String::new(),
            rental_price: "250.000".into(),
            category_ids: vec![1],
        }
    }

    #[test]
    fn test_blank_available_defaults_to_total() {
        let req = fields().to_create().unwrap();
        assert_eq!(req.total_stock, 5);
        assert_eq!(req.available_stock, 5);
        assert_eq!(req.rental_price, 250000.0);
        assert_eq!(req.description, None);
    }

    #[test]
    fn test_non_numeric_stock_is_rejected() {
        let mut f = fields();
        f.total_stock = "lima".into();
        assert_eq!(
            f.to_create().unwrap_err(),
            "Total stok harus berupa angka bulat"
        );
    }

    #[test]
    fn test_contract_rules_apply() {
        let mut f = fields();
        f.available_stock = "9".into();
        assert_eq!(
            f.to_update().unwrap_err(),
            "Stok tersedia tidak boleh melebihi total stok"
        );
    }

    #[test]
    fn test_round_trip_from_record() {
        let item = Item {
            id: 42,
            user_id: 1,
            item_name: "Camera".into(),
            description: "Mirrorless".into(),
            total_stock: 3,
            available_stock: 1,
            rental_price: 150000.0,
            created_at: String::new(),
            updated_at: String::new(),
            category_ids: vec![ItemCategory { id: 2, name: "Kamera".into() }],
        };
        let f = ItemFields::from_record(&item);
        assert_eq!(f.rental_price, "150.000");
        let update = f.to_update().unwrap();
        assert_eq!(update.available_stock, Some(1));
        assert_eq!(update.category_ids, Some(vec![2]));
    }

    #[test]
    fn test_toggle_category() {
        let mut f = fields();
        f.toggle_category(3, true);
        f.toggle_category(3, true);
        assert_eq!(f.category_ids, vec![1, 3]);
        f.toggle_category(1, false);
        assert_eq!(f.category_ids, vec![3]);
    }
}
