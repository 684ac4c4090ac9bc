pub mod delete_confirmation;
pub mod dialog_outlet;
pub mod global_context;
pub mod left;
pub mod top_header;

pub use dialog_outlet::DialogOutlet;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Dashboard shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Outlet              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}
