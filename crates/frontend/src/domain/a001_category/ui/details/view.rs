use super::view_model::CategoryFormViewModel;
use crate::shared::dialog::{use_dialog, DialogId, DialogPayload};
use crate::shared::dialog_frame::DialogFrame;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryFormDialog() -> impl IntoView {
    let dialog = use_dialog();
    let toast = use_toast();
    let vm = CategoryFormViewModel::new();

    // Payload is written before `active`, so it is current when we wake up here.
    Effect::new(move |_| {
        if dialog.is_active(DialogId::CategoryForm) {
            if let DialogPayload::Category(payload) = dialog.data_untracked() {
                vm.load(payload);
            }
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Edit Kategori".to_string()
        } else {
            "Tambah Kategori Baru".to_string()
        }
    });

    view! {
        <DialogFrame id=DialogId::CategoryForm title=title>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Nama Kategori"</Label>
                <Input value=vm.category_name placeholder="Masukkan nama kategori" />
            </div>

            <div class="form__group">
                <Label>"Deskripsi"</Label>
                <Textarea value=vm.description placeholder="Masukkan deskripsi kategori" attr:rows=3 />
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
                            "Tambah Kategori"
                        }
                    }}
                </Button>
            </div>
        </DialogFrame>
    }
}
