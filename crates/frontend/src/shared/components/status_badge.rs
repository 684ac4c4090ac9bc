use contracts::domain::a004_rental::RentalStatus;
use contracts::domain::a005_fine::FineStatus;
use leptos::prelude::*;
use thaw::*;

/// Badge colour per rental status
pub fn rental_status_color(status: RentalStatus) -> BadgeColor {
    match status {
        RentalStatus::Active => BadgeColor::Informative,
        RentalStatus::Completed => BadgeColor::Success,
        RentalStatus::Overdue => BadgeColor::Danger,
    }
}

pub fn fine_status_color(status: FineStatus) -> BadgeColor {
    match status {
        FineStatus::Unpaid => BadgeColor::Warning,
        FineStatus::Paid => BadgeColor::Success,
    }
}

/// Tinted badge with a status label
#[component]
pub fn StatusBadge(#[prop(into)] label: String, color: BadgeColor) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {label}
        </Badge>
    }
}
