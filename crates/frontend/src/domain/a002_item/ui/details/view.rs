use super::view_model::ItemFormViewModel;
use crate::shared::dialog::{use_dialog, DialogId, DialogPayload};
use crate::shared::dialog_frame::DialogFrame;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ItemFormDialog() -> impl IntoView {
    let dialog = use_dialog();
    let toast = use_toast();
    let vm = ItemFormViewModel::new();

    Effect::new(move |_| {
        if dialog.is_active(DialogId::ItemForm) {
            if let DialogPayload::Item(payload) = dialog.data_untracked() {
                vm.load(payload);
            }
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Edit Barang".to_string()
        } else {
            "Tambah Barang Baru".to_string()
        }
    });

    view! {
        <DialogFrame id=DialogId::ItemForm title=title class="dialog--wide".to_string()>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Nama Barang"</Label>
                <Input value=vm.item_name placeholder="Masukkan nama barang" />
            </div>

            <div class="form__group">
                <Label>"Kategori"</Label>
                <div class="form__checklist">
                    {move || vm.categories.get().into_iter().map(|category| {
                        let id = category.id;
                        view! {
                            <label class="form__check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.category_ids.get().contains(&id)
                                    on:change=move |ev| vm.toggle_category(id, event_target_checked(&ev))
                                />
                                {category.category_name}
                            </label>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="details-grid--3col">
                <div class="form__group">
                    <Label>"Harga Sewa/Hari (Rp)"</Label>
                    <Input value=vm.rental_price placeholder="0" />
                </div>
                <div class="form__group">
                    <Label>"Total Stok"</Label>
                    <Input value=vm.total_stock input_type=InputType::Number placeholder="1" />
                </div>
                <div class="form__group">
                    <Label>"Stok Tersedia"</Label>
                    <Input value=vm.available_stock input_type=InputType::Number placeholder="Sama dengan total" />
                </div>
            </div>

            <div class="form__group">
                <Label>"Deskripsi"</Label>
                <Textarea value=vm.description placeholder="Masukkan deskripsi barang" attr:rows=3 />
            </div>

            <div class="dialog-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| dialog.close()>
                    "Batal"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(dialog, toast)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || {
                        if vm.saving.get() {
                            "Menyimpan..."
                        } else if vm.is_edit_mode() {
                            "Simpan Perubahan"
                        } else {
                            "Tambah Barang"
                        }
                    }}
                </Button>
            </div>
        </DialogFrame>
    }
}
