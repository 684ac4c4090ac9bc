use contracts::domain::a001_category::Category;
use contracts::domain::a002_item::Item;
use contracts::domain::a003_customer::Customer;
use contracts::domain::a004_rental::Rental;
use contracts::domain::a005_fine::Fine;
use leptos::prelude::*;
use std::fmt;

/// Every dialog the application can show. Only one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogId {
    CategoryForm,
    ItemForm,
    CustomerForm,
    RentalForm,
    FineForm,
    DeleteConfirmation,
    ItemDetail,
    Logout,
}

impl DialogId {
    pub const ALL: [DialogId; 8] = [
        DialogId::CategoryForm,
        DialogId::ItemForm,
        DialogId::CustomerForm,
        DialogId::RentalForm,
        DialogId::FineForm,
        DialogId::DeleteConfirmation,
        DialogId::ItemDetail,
        DialogId::Logout,
    ];

    /// Stable identifier, rendered as `data-dialog` on the frame
    pub fn as_str(self) -> &'static str {
        match self {
            DialogId::CategoryForm => "category-form",
            DialogId::ItemForm => "item-form",
            DialogId::CustomerForm => "customer-form",
            DialogId::RentalForm => "rental-form",
            DialogId::FineForm => "fine-form",
            DialogId::DeleteConfirmation => "delete-confirmation",
            DialogId::ItemDetail => "item-detail",
            DialogId::Logout => "logout",
        }
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a create/edit form dialog.
///
/// `record == None` means "create". `on_saved` receives the record the backend returned.
pub struct FormPayload<T: 'static> {
    pub record: Option<T>,
    pub on_saved: Option<Callback<T>>,
}

impl<T: 'static> FormPayload<T> {
    pub fn create() -> Self {
        Self {
            record: None,
            on_saved: None,
        }
    }

    pub fn edit(record: T) -> Self {
        Self {
            record: Some(record),
            on_saved: None,
        }
    }

    pub fn with_on_saved(mut self, on_saved: Callback<T>) -> Self {
        self.on_saved = Some(on_saved);
        self
    }

    pub fn is_edit(&self) -> bool {
        self.record.is_some()
    }

    /// Hands the saved record to the listener. The page that registered it may
    /// have been unmounted while the request was in flight; returns whether it ran.
    pub fn notify_saved(&self, saved: T) -> bool {
        let Some(on_saved) = self.on_saved else {
            return false;
        };
        let ran = on_saved.try_run(saved).is_some();
        if !ran {
            log::debug!("on_saved listener already disposed, skipping");
        }
        ran
    }
}

impl<T: Clone + 'static> Clone for FormPayload<T> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            on_saved: self.on_saved,
        }
    }
}

impl<T: 'static> Default for FormPayload<T> {
    fn default() -> Self {
        Self::create()
    }
}

/// Payload of the delete confirmation dialog
#[derive(Clone)]
pub struct DeletePayload {
    pub item_name: Option<String>,
    pub on_confirm: Callback<()>,
}

impl DeletePayload {
    pub fn new(item_name: impl Into<String>, on_confirm: Callback<()>) -> Self {
        Self {
            item_name: Some(item_name.into()),
            on_confirm,
        }
    }

    /// Runs the delete action unless its owner is gone
    pub fn confirm(&self) -> bool {
        let ran = self.on_confirm.try_run(()).is_some();
        if !ran {
            log::debug!("on_confirm listener already disposed, skipping");
        }
        ran
    }

    /// Text shown in the confirmation body
    pub fn prompt(&self) -> String {
        match &self.item_name {
            Some(name) if !name.trim().is_empty() => format!(
                "Apakah Anda yakin ingin menghapus {}? Tindakan ini tidak dapat dibatalkan.",
                name
            ),
            _ => "Apakah Anda yakin ingin menghapus item ini? Tindakan ini tidak dapat dibatalkan."
                .to_string(),
        }
    }
}

/// Data carried from a trigger to the dialog that consumes it
#[derive(Clone, Default)]
pub enum DialogPayload {
    #[default]
    Empty,
    Category(FormPayload<Category>),
    Item(FormPayload<Item>),
    Customer(FormPayload<Customer>),
    Rental(FormPayload<Rental>),
    Fine(FormPayload<Fine>),
    /// Read-only view; `on_saved` is forwarded when the view switches to the edit form
    ItemDetail(FormPayload<Item>),
    DeleteConfirmation(DeletePayload),
}

impl DialogPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            DialogPayload::Empty => "empty",
            DialogPayload::Category(_) => "category",
            DialogPayload::Item(_) => "item",
            DialogPayload::Customer(_) => "customer",
            DialogPayload::Rental(_) => "rental",
            DialogPayload::Fine(_) => "fine",
            DialogPayload::ItemDetail(_) => "item-detail",
            DialogPayload::DeleteConfirmation(_) => "delete-confirmation",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DialogPayload::Empty)
    }

    /// Dialog this payload is meant for, `None` for `Empty`
    pub fn target(&self) -> Option<DialogId> {
        match self {
            DialogPayload::Empty => None,
            DialogPayload::Category(_) => Some(DialogId::CategoryForm),
            DialogPayload::Item(_) => Some(DialogId::ItemForm),
            DialogPayload::Customer(_) => Some(DialogId::CustomerForm),
            DialogPayload::Rental(_) => Some(DialogId::RentalForm),
            DialogPayload::Fine(_) => Some(DialogId::FineForm),
            DialogPayload::ItemDetail(_) => Some(DialogId::ItemDetail),
            DialogPayload::DeleteConfirmation(_) => Some(DialogId::DeleteConfirmation),
        }
    }
}

impl fmt::Debug for DialogPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record_id = match self {
            DialogPayload::Category(p) => p.record.as_ref().map(|r| r.id),
            DialogPayload::Item(p) => p.record.as_ref().map(|r| r.id),
            DialogPayload::Customer(p) => p.record.as_ref().map(|r| r.id),
            DialogPayload::Rental(p) => p.record.as_ref().map(|r| r.id),
            DialogPayload::Fine(p) => p.record.as_ref().map(|r| r.id),
            DialogPayload::ItemDetail(p) => p.record.as_ref().map(|r| r.id),
            DialogPayload::Empty | DialogPayload::DeleteConfirmation(_) => None,
        };
        match record_id {
            Some(id) => write!(f, "DialogPayload::{}(#{})", self.kind(), id),
            None => write!(f, "DialogPayload::{}", self.kind()),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use contracts::domain::a002_item::Item;

    pub fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            user_id: 1,
            item_name: name.to_string(),
            description: String::new(),
            total_stock: 3,
            available_stock: 2,
            rental_price: 150_000.0,
            created_at: String::new(),
            updated_at: String::new(),
            category_ids: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::item;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_payload_targets() {
        assert_eq!(DialogPayload::Empty.target(), None);
        assert_eq!(
            DialogPayload::Item(FormPayload::edit(item(42, "Camera"))).target(),
            Some(DialogId::ItemForm)
        );
        assert_eq!(
            DialogPayload::ItemDetail(FormPayload::edit(item(1, "Tenda"))).target(),
            Some(DialogId::ItemDetail)
        );
    }

    #[test]
    fn test_debug_shows_record_id() {
        let payload = DialogPayload::Item(FormPayload::edit(item(42, "Camera")));
        assert_eq!(format!("{:?}", payload), "DialogPayload::item(#42)");
        assert_eq!(format!("{:?}", DialogPayload::Empty), "DialogPayload::empty");
    }

    #[test]
    fn test_form_payload_modes() {
        let create: FormPayload<Item> = FormPayload::create();
        assert!(!create.is_edit());
        assert!(FormPayload::edit(item(7, "Proyektor")).is_edit());
    }

    #[test]
    fn test_notify_saved_runs_live_listener() {
        let owner = Owner::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let payload = owner.with(|| {
            let seen = seen.clone();
            FormPayload::edit(item(3, "Tenda")).with_on_saved(Callback::new(move |saved: Item| {
                seen.store(saved.id as usize, Ordering::SeqCst);
            }))
        });

        assert!(payload.notify_saved(item(3, "Tenda Besar")));
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_notify_saved_skips_disposed_listener() {
        let owner = Owner::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let payload = owner.with(|| {
            let calls = calls.clone();
            FormPayload::edit(item(3, "Tenda")).with_on_saved(Callback::new(move |_: Item| {
                calls.fetch_add(1, Ordering::SeqCst);
            }))
        });

        // List page unmounted while the save request was in flight
        owner.cleanup();

        assert!(!payload.notify_saved(item(3, "Tenda")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!FormPayload::<Item>::create().notify_saved(item(4, "Kursi")));
    }

    #[test]
    fn test_confirm_skips_disposed_action() {
        let owner = Owner::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let payload = owner.with(|| {
            let calls = calls.clone();
            DeletePayload::new("Tenda", Callback::new(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            }))
        });

        assert!(payload.confirm());
        owner.cleanup();
        assert!(!payload.confirm());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dialog_ids_are_unique() {
        let mut names: Vec<_> = DialogId::ALL.iter().map(|d| d.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DialogId::ALL.len());
    }
}
