use contracts::domain::a001_category::Category;
use contracts::domain::a002_item::{CreateItemRequest, Item, UpdateItemRequest};
use contracts::shared::api::ApiResult;

use crate::shared::api::resource;

/// Checked request ready to be sent
pub enum Submit {
    Create(CreateItemRequest),
    Update(i64, UpdateItemRequest),
}

pub async fn submit(request: Submit) -> ApiResult<Item> {
    match request {
        Submit::Create(create) => resource::create::<Item, _>(&create).await,
        Submit::Update(id, update) => resource::update::<Item, _>(id, &update).await,
    }
}

/// Options for the category checkboxes
pub async fn fetch_categories() -> ApiResult<Vec<Category>> {
    resource::get_all::<Category>().await
}
