use contracts::domain::a001_category::Category;
use contracts::shared::api::ApiResult;

use super::view_model::CategoryFields;
use crate::shared::api::resource;

/// Creates when `id` is None, updates otherwise
pub async fn save(id: Option<i64>, fields: &CategoryFields) -> ApiResult<Category> {
    match id {
        Some(id) => resource::update::<Category, _>(id, &fields.to_update()).await,
        None => resource::create::<Category, _>(&fields.to_create()).await,
    }
}
