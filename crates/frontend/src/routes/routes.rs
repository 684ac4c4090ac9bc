use crate::dashboards::OverviewDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_item::ui::list::ItemList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_rental::ui::list::RentalList;
use crate::domain::a005_fine::ui::list::FineList;
use crate::layout::Shell;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::auth::AuthGate;
use crate::system::pages::{LandingPage, LoginPage, ProfilePage, RegisterPage};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_not_found--public" category=PAGE_CAT_PUBLIC>
            <div class="not-found">
                <h1>"404"</h1>
                <p>"Halaman tidak ditemukan"</p>
                <A href="/">"Kembali ke beranda"</A>
            </div>
        </PageFrame>
    }
}

/// Public pages plus the guarded `/dashboard` tree
#[component]
pub fn AppRoutes(children: Children) -> impl IntoView {
    view! {
        <Router>
            {children()}
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/login") view=|| view! { <AuthGate><LoginPage /></AuthGate> } />
                <Route path=path!("/register") view=|| view! { <AuthGate><RegisterPage /></AuthGate> } />
                <ParentRoute path=path!("/dashboard") view=|| view! { <AuthGate><Shell /></AuthGate> }>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("categories") view=CategoryList />
                    <Route path=path!("items") view=ItemList />
                    <Route path=path!("customers") view=CustomerList />
                    <Route path=path!("rentals") view=RentalList />
                    <Route path=path!("fines") view=FineList />
                    <Route path=path!("profile") view=ProfilePage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
