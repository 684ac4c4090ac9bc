use contracts::domain::a003_customer::Customer;
use contracts::shared::api::ApiResult;

use super::view_model::CustomerFields;
use crate::shared::api::resource;

pub async fn save(id: Option<i64>, fields: &CustomerFields) -> ApiResult<Customer> {
    match id {
        Some(id) => resource::update::<Customer, _>(id, &fields.to_update()).await,
        None => resource::create::<Customer, _>(&fields.to_create()).await,
    }
}
