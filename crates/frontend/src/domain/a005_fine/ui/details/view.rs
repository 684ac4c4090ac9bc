use super::view_model::{rental_option_label, FineFormViewModel};
use contracts::domain::a005_fine::FineStatus;
use crate::shared::dialog::{use_dialog, DialogId, DialogPayload};
use crate::shared::dialog_frame::DialogFrame;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn FineFormDialog() -> impl IntoView {
    let dialog = use_dialog();
    let toast = use_toast();
    let vm = FineFormViewModel::new();

    Effect::new(move |_| {
        if dialog.is_active(DialogId::FineForm) {
            if let DialogPayload::Fine(payload) = dialog.data_untracked() {
                vm.load(payload);
            }
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Edit Denda".to_string()
        } else {
            "Tambah Denda Baru".to_string()
        }
    });

    view! {
        <DialogFrame id=DialogId::FineForm title=title>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Penyewaan"</Label>
                <select
                    class="form__input"
                    prop:value=move || vm.rental_id.get()
                    prop:disabled=move || vm.is_edit_mode()
                    on:change=move |ev| vm.rental_id.set(event_target_value(&ev))
                >
                    <option value="">"Pilih penyewaan"</option>
                    {move || {
                        let selected = vm.rental_id.get();
                        vm.rentals.get().into_iter().map(|rental| {
                            let value = rental.id.to_string();
                            let is_selected = value == selected;
                            view! {
                                <option value=value selected=is_selected>
                                    {rental_option_label(&rental)}
                                </option>
                            }
                        }).collect_view()
                    }}
                </select>
            </div>

            <div class="details-grid--3col">
                <div class="form__group">
                    <Label>"Jumlah Denda (Rp)"</Label>
                    <Input value=vm.amount placeholder="0" />
                </div>
                <div class="form__group">
                    <Label>"Tanggal Denda"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || vm.fine_date.get()
                        on:input=move |ev| vm.fine_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Status"</Label>
                    <Select value=vm.status>
                        <option value=FineStatus::Unpaid.as_str()>{FineStatus::Unpaid.label()}</option>
                        <option value=FineStatus::Paid.as_str()>{FineStatus::Paid.label()}</option>
                    </Select>
                </div>
            </div>

            <div class="form__group">
                <Label>"Alasan"</Label>
                <Textarea value=vm.reason placeholder="Contoh: Keterlambatan pengembalian 3 hari" attr:rows=3 />
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
                    {move || if vm.saving.get() { "Menyimpan..." } else { "Simpan" }}
                </Button>
            </div>
        </DialogFrame>
    }
}
