use super::view_model::RentalFormViewModel;
use crate::shared::components::table::format_rupiah;
use crate::shared::dialog::{use_dialog, DialogId, DialogPayload};
use crate::shared::dialog_frame::DialogFrame;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RentalFormDialog() -> impl IntoView {
    let dialog = use_dialog();
    let toast = use_toast();
    let vm = RentalFormViewModel::new();

    Effect::new(move |_| {
        if dialog.is_active(DialogId::RentalForm) {
            if let DialogPayload::Rental(payload) = dialog.data_untracked() {
                vm.load(payload);
            }
        }
    });

    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            "Edit Penyewaan".to_string()
        } else {
            "Tambah Penyewaan Baru".to_string()
        }
    });

    let customer_name = move || {
        let id = vm.customer_id.get();
        vm.customers.with(|rows| {
            rows.iter()
                .find(|c| c.id.to_string() == id)
                .map(|c| c.customer_name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <DialogFrame id=DialogId::RentalForm title=title class="dialog--wide".to_string()>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Pelanggan"</Label>
                <Show
                    when=move || !vm.is_edit_mode()
                    fallback=move || view! { <div class="form__static">{customer_name}</div> }
                >
                    <Select value=vm.customer_id>
                        <option value="">"Pilih pelanggan"</option>
                        {move || vm.customers.get().into_iter().map(|c| view! {
                            <option value=c.id.to_string()>{c.customer_name}</option>
                        }).collect_view()}
                    </Select>
                </Show>
            </div>

            <div class="form__group">
                <Label>"Judul"</Label>
                <Input
                    value=vm.title
                    placeholder="Contoh: Sewa kamera untuk acara"
                    disabled=Signal::derive(move || vm.is_edit_mode())
                />
            </div>

            <div class="details-grid--3col">
                <div class="form__group">
                    <Label>"Tanggal Mulai"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || vm.start_date.get()
                        prop:disabled=move || vm.is_edit_mode()
                        on:input=move |ev| vm.start_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Tanggal Selesai"</Label>
                    <input
                        type="date"
                        class="form__input"
                        prop:value=move || vm.end_date.get()
                        on:input=move |ev| vm.end_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <Label>"Total Biaya (Rp)"</Label>
                    <div class="form__static">
                        {move || vm.estimate().map(format_rupiah).unwrap_or_else(|| "-".to_string())}
                    </div>
                </div>
            </div>

            <div class="form__group">
                <Label>"Barang yang Disewa"</Label>
                <Flex gap=FlexGap::Small>
                    <Select value=vm.picker>
                        <option value="">"Pilih barang"</option>
                        {move || vm.items.get().into_iter().map(|item| {
                            let label = format!(
                                "{} ({} tersedia, {}/hari)",
                                item.item_name,
                                item.available_stock,
                                format_rupiah(item.rental_price),
                            );
                            view! { <option value=item.id.to_string()>{label}</option> }
                        }).collect_view()}
                    </Select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.add_picked()
                        disabled=Signal::derive(move || vm.picker.get().is_empty())
                    >
                        {icon("plus")}
                        " Tambah"
                    </Button>
                </Flex>

                <div class="rental-lines">
                    {move || {
                        let lines = vm.lines.get();
                        if lines.is_empty() {
                            return view! { <p class="form__hint">"Belum ada barang dipilih"</p> }.into_any();
                        }
                        lines.into_iter().map(|line| {
                            let item_id = line.item_id;
                            view! {
                                <div class="rental-lines__row">
                                    <span class="rental-lines__name">{vm.item_name(item_id)}</span>
                                    <input
                                        type="number"
                                        min="1"
                                        class="form__input rental-lines__qty"
                                        prop:value=line.quantity.to_string()
                                        on:input=move |ev| vm.set_quantity(item_id, &event_target_value(&ev))
                                    />
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| vm.remove_line(item_id)
                                    >
                                        {icon("x")}
                                    </Button>
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </div>
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
                            "Tambah Penyewaan"
                        }
                    }}
                </Button>
            </div>
        </DialogFrame>
    }
}
