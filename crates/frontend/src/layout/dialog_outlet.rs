use leptos::prelude::*;

use super::delete_confirmation::DeleteConfirmationDialog;
use crate::domain::a001_category::ui::details::CategoryFormDialog;
use crate::domain::a002_item::ui::detail_view::ItemDetailDialog;
use crate::domain::a002_item::ui::details::ItemFormDialog;
use crate::domain::a003_customer::ui::details::CustomerFormDialog;
use crate::domain::a004_rental::ui::details::RentalFormDialog;
use crate::domain::a005_fine::ui::details::FineFormDialog;
use crate::system::auth::LogoutDialog;

/// Every dialog consumer, mounted once; each one renders only while its id is active
#[component]
pub fn DialogOutlet() -> impl IntoView {
    view! {
        <CategoryFormDialog />
        <ItemFormDialog />
        <ItemDetailDialog />
        <CustomerFormDialog />
        <RentalFormDialog />
        <FineFormDialog />
        <DeleteConfirmationDialog />
        <LogoutDialog />
    }
}
