use contracts::domain::a002_item::Item;
use contracts::domain::a003_customer::Customer;
use contracts::domain::a004_rental::{CreateRentalRequest, Rental, UpdateRentalRequest};
use contracts::shared::api::ApiResult;

use crate::shared::api::resource;

pub enum Submit {
    Create(CreateRentalRequest),
    Update(i64, UpdateRentalRequest),
}

pub async fn submit(request: Submit) -> ApiResult<Rental> {
    match request {
        Submit::Create(create) => resource::create::<Rental, _>(&create).await,
        Submit::Update(id, update) => resource::update::<Rental, _>(id, &update).await,
    }
}

pub async fn fetch_customers() -> ApiResult<Vec<Customer>> {
    resource::get_all::<Customer>().await
}

pub async fn fetch_items() -> ApiResult<Vec<Item>> {
    resource::get_all::<Item>().await
}
