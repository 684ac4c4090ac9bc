use leptos::prelude::*;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::dialog::{use_dialog, DialogId};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::use_auth;

/// Up to two initials for the avatar ("Budi Santoso" -> "BS")
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let dialog = use_dialog();

    let name = move || auth_state.get().display_name();
    let email = move || {
        auth_state
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="sys_profile--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Profil Pengguna" subtitle="Kelola informasi dan pengaturan akun Anda".to_string() />

            <div class="page__content">
                <div class="profile-card">
                    <div class="profile-card__avatar">{move || initials(&name())}</div>
                    <h3 class="profile-card__name">{name}</h3>
                    <dl class="profile-card__fields">
                        <dt>"Email:"</dt>
                        <dd>{email}</dd>
                    </dl>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| dialog.open(DialogId::Logout)
                    >
                        {icon("logout")}
                        " Keluar"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Budi Santoso"), "BS");
        assert_eq!(initials("sari"), "S");
        assert_eq!(initials("Andi Budi Citra"), "AB");
        assert_eq!(initials("  "), "?");
    }
}
