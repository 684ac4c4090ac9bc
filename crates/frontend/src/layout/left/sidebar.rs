//! Dashboard navigation

use crate::shared::dialog::{use_dialog, DialogId};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: [MenuItem; 7] = [
    MenuItem { path: "/dashboard", label: "Dashboard", icon: "dashboard" },
    MenuItem { path: "/dashboard/categories", label: "Kategori", icon: "categories" },
    MenuItem { path: "/dashboard/items", label: "Barang", icon: "items" },
    MenuItem { path: "/dashboard/customers", label: "Pelanggan", icon: "customers" },
    MenuItem { path: "/dashboard/rentals", label: "Penyewaan", icon: "rentals" },
    MenuItem { path: "/dashboard/fines", label: "Denda", icon: "fines" },
    MenuItem { path: "/dashboard/profile", label: "Profil", icon: "user" },
];

/// `/dashboard` matches only itself; sections also match their sub-paths
pub fn is_active_path(current: &str, path: &str) -> bool {
    let current = current.trim_end_matches('/');
    if path == "/dashboard" {
        return current == path;
    }
    current == path || current.starts_with(&format!("{}/", path))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let dialog = use_dialog();
    let pathname = use_location().pathname;

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__brand">"KamuSewa"</div>
            {MENU.into_iter().map(|item| {
                let active = move || is_active_path(&pathname.get(), item.path);
                view! {
                    <A href=item.path attr:class=move || {
                        if active() {
                            "app-sidebar__item app-sidebar__item--active"
                        } else {
                            "app-sidebar__item"
                        }
                    }>
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </A>
                }
            }).collect_view()}
            <button class="app-sidebar__item app-sidebar__logout" on:click=move |_| dialog.open(DialogId::Logout)>
                <div class="app-sidebar__item-content">
                    {icon("logout")}
                    <span>"Keluar"</span>
                </div>
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_matches_exactly() {
        assert!(is_active_path("/dashboard", "/dashboard"));
        assert!(is_active_path("/dashboard/", "/dashboard"));
        assert!(!is_active_path("/dashboard/items", "/dashboard"));
    }

    #[test]
    fn test_section_matches_sub_paths() {
        assert!(is_active_path("/dashboard/items", "/dashboard/items"));
        assert!(is_active_path("/dashboard/items/3", "/dashboard/items"));
        assert!(!is_active_path("/dashboard/items-archive", "/dashboard/items"));
    }
}
