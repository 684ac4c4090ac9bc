use super::view_model::CustomerFormViewModel;
use crate::shared::dialog::{use_dialog, DialogId, DialogPayload};
use crate::shared::dialog_frame::DialogFrame;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerFormDialog() -> impl IntoView {
    let dialog = use_dialog();
    let toast = use_toast();
    let vm = CustomerFormViewModel::new();

    Effect::new(move |_| {
        if dialog.is_active(DialogId::CustomerForm) {
            if let DialogPayload::Customer(payload) = dialog.data_untracked() {
                vm.load(payload);
            }
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Edit Pelanggan".to_string()
        } else {
            "Tambah Pelanggan Baru".to_string()
        }
    });

    view! {
        <DialogFrame id=DialogId::CustomerForm title=title>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Nama Pelanggan"</Label>
                <Input value=vm.customer_name placeholder="Masukkan nama pelanggan" />
            </div>
            <div class="form__group">
                <Label>"Email"</Label>
                <Input value=vm.email input_type=InputType::Email placeholder="nama@email.com" />
            </div>
            <div class="form__group">
                <Label>"Nomor Telepon"</Label>
                <Input value=vm.phone_number placeholder="08xxxxxxxxxx" />
            </div>
            <div class="form__group">
                <Label>"Nomor Identitas (KTP)"</Label>
                <Input value=vm.identity_number placeholder="16 digit NIK" />
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
                            "Tambah Pelanggan"
                        }
                    }}
                </Button>
            </div>
        </DialogFrame>
    }
}
