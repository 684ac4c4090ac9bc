//! Read-only item view; "Edit" hands over to the item form.

use contracts::domain::a002_item::Item;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::format_rupiah;
use crate::shared::date_utils::format_date_long;
use crate::shared::dialog::{use_dialog, DialogId, DialogPayload, FormPayload};
use crate::shared::dialog_frame::DialogFrame;
use crate::shared::icons::icon;

pub fn availability_label(item: &Item) -> (&'static str, BadgeColor) {
    if !item.is_available() {
        ("Habis", BadgeColor::Danger)
    } else if item.is_low_stock() {
        ("Stok Menipis", BadgeColor::Warning)
    } else {
        ("Tersedia", BadgeColor::Success)
    }
}

#[component]
pub fn ItemDetailDialog() -> impl IntoView {
    let dialog = use_dialog();
    let payload = RwSignal::new(FormPayload::<Item>::create());

    Effect::new(move |_| {
        if dialog.is_active(DialogId::ItemDetail) {
            if let DialogPayload::ItemDetail(p) = dialog.data_untracked() {
                payload.set(p);
            }
        }
    });

    // Close-then-open is sequenced by the coordinator; the form gets the same callback.
    let edit = move |_| {
        let current = payload.get_untracked();
        if current.record.is_some() {
            dialog.open_with(DialogId::ItemForm, DialogPayload::Item(current));
        }
    };

    let title = Signal::derive(move || {
        payload
            .with(|p| p.record.as_ref().map(|i| i.item_name.clone()))
            .unwrap_or_else(|| "Detail Barang".to_string())
    });

    view! {
        <DialogFrame id=DialogId::ItemDetail title=title>
            {move || payload.get().record.map(|item| {
                let (label, color) = availability_label(&item);
                let categories = item.category_names().join(", ");
                view! {
                    <dl class="details-list">
                        <dt>"Kategori"</dt>
                        <dd>{if categories.is_empty() { "-".to_string() } else { categories }}</dd>
                        <dt>"Harga Sewa/Hari"</dt>
                        <dd>{format_rupiah(item.rental_price)}</dd>
                        <dt>"Stok"</dt>
                        <dd>{format!("{} dari {} tersedia", item.available_stock, item.total_stock)}</dd>
                        <dt>"Status"</dt>
                        <dd><StatusBadge label=label color=color /></dd>
                        <dt>"Deskripsi"</dt>
                        <dd>{if item.description.is_empty() { "-".to_string() } else { item.description.clone() }}</dd>
                        <dt>"Ditambahkan"</dt>
                        <dd>{format_date_long(&item.created_at)}</dd>
                    </dl>
                }
            })}

            <div class="dialog-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| dialog.close()>
                    "Tutup"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=edit>
                    {icon("edit")}
                    " Edit"
                </Button>
            </div>
        </DialogFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(total: i64, available: i64) -> Item {
        Item {
            id: 1,
            user_id: 1,
            item_name: "Tenda Dome".into(),
            description: String::new(),
            total_stock: total,
            available_stock: available,
            rental_price: 75_000.0,
            created_at: String::new(),
            updated_at: String::new(),
            category_ids: vec![],
        }
    }

    #[test]
    fn test_availability_label() {
        assert_eq!(availability_label(&item(5, 0)).0, "Habis");
        assert_eq!(availability_label(&item(5, 2)).0, "Stok Menipis");
        assert_eq!(availability_label(&item(5, 4)).0, "Tersedia");
    }
}
