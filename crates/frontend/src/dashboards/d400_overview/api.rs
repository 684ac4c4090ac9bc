use contracts::domain::a002_item::Item;
use contracts::domain::a003_customer::Customer;
use contracts::domain::a004_rental::Rental;
use contracts::domain::a005_fine::Fine;
use contracts::shared::api::ApiResult;

use crate::shared::api::resource;

/// Raw rows the overview is computed from
pub struct OverviewData {
    pub items: Vec<Item>,
    pub rentals: Vec<Rental>,
    pub customers: Vec<Customer>,
    pub fines: Vec<Fine>,
}

/// Fails as a whole: a partial overview would show wrong totals
pub async fn load_overview() -> ApiResult<OverviewData> {
    let items = resource::get_all::<Item>().await?;
    let rentals = resource::get_all::<Rental>().await?;
    let customers = resource::get_all::<Customer>().await?;
    let fines = resource::get_all::<Fine>().await?;
    Ok(OverviewData {
        items,
        rentals,
        customers,
        fines,
    })
}
