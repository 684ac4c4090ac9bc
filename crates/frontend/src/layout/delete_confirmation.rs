use leptos::prelude::*;
use thaw::*;

use crate::shared::dialog::{use_dialog, DialogId, DialogPayload};
use crate::shared::dialog_frame::DialogFrame;

/// Generic "are you sure" dialog; the list that opened it supplies the action
#[component]
pub fn DeleteConfirmationDialog() -> impl IntoView {
    let dialog = use_dialog();

    // Data survives until the settle delay, so the prompt stays during the exit window.
    let payload = Signal::derive(move || match dialog.data() {
        DialogPayload::DeleteConfirmation(p) => Some(p),
        _ => None,
    });

    let confirm = move |_| {
        if let Some(p) = payload.get_untracked() {
            p.confirm();
        }
        dialog.close();
    };

    view! {
        <DialogFrame id=DialogId::DeleteConfirmation title="Konfirmasi Hapus">
            <p class="dialog-description">
                {move || payload.get().map(|p| p.prompt()).unwrap_or_default()}
            </p>
            <div class="dialog-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| dialog.close()>
                    "Batal"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=confirm>
                    "Hapus"
                </Button>
            </div>
        </DialogFrame>
    }
}
