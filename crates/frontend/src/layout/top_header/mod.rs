//! Top bar of the dashboard: sidebar toggle, page brand, signed-in user, logout.

use crate::layout::global_context::use_global_context;
use crate::shared::dialog::{use_dialog, DialogId};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let dialog = use_dialog();
    let (auth_state, _) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Sembunyikan navigasi" } else { "Tampilkan navigasi" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"KamuSewa"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_state.get().display_name()}</span>
                </div>

                // The dialog clears the session on confirm
                <button class="top-header__icon-btn" on:click=move |_| dialog.open(DialogId::Logout) title="Keluar">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
