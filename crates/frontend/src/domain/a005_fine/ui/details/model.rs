use contracts::domain::a004_rental::Rental;
use contracts::domain::a005_fine::{CreateFineRequest, Fine, UpdateFineRequest};
use contracts::shared::api::ApiResult;

use crate::shared::api::resource;

pub enum Submit {
    Create(CreateFineRequest),
    Update(i64, UpdateFineRequest),
}

pub async fn submit(request: Submit) -> ApiResult<Fine> {
    match request {
        Submit::Create(create) => resource::create::<Fine, _>(&create).await,
        Submit::Update(id, update) => resource::update::<Fine, _>(id, &update).await,
    }
}

/// A fine always belongs to an existing rental
pub async fn fetch_rentals() -> ApiResult<Vec<Rental>> {
    resource::get_all::<Rental>().await
}
