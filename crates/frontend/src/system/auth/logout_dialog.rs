use leptos::prelude::*;
use thaw::*;

use crate::shared::dialog::{use_dialog, DialogId};
use crate::shared::dialog_frame::DialogFrame;

use super::context::{do_logout, use_auth};

/// Confirmation shown by the "Keluar" action of the header and sidebar
#[component]
pub fn LogoutDialog() -> impl IntoView {
    let dialog = use_dialog();
    let (_, set_auth_state) = use_auth();

    // The dashboard gate sends the now anonymous visitor to /login.
    let confirm = move |_| {
        dialog.close();
        do_logout(set_auth_state);
    };

    view! {
        <DialogFrame
            id=DialogId::Logout
            title="Konfirmasi Keluar"
            description="Apakah Anda yakin ingin keluar dari aplikasi? Semua sesi Anda akan berakhir.".to_string()
        >
            <div class="dialog-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| dialog.close()>
                    "Batal"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=confirm>
                    "Keluar"
                </Button>
            </div>
        </DialogFrame>
    }
}
