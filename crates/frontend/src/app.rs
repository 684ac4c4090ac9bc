use crate::layout::DialogOutlet;
use crate::routes::AppRoutes;
use crate::shared::dialog::{DialogHost, DialogService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One coordinator and one toast queue for the whole app.
    provide_context(DialogService::new());
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes>
                <DialogHost />
                <DialogOutlet />
                <ToastHost />
            </AppRoutes>
        </AuthProvider>
    }
}
