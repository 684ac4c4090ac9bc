//! CRUD calls shared by every REST collection.
//!
//! The endpoint comes from the aggregate's [`AggregateRoot::collection_name`].

use contracts::domain::common::AggregateRoot;
use contracts::shared::api::ApiResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::request::{api_request, api_request_empty, Method};

const NO_BODY: Option<&()> = None;

pub async fn get_all<A>() -> ApiResult<Vec<A>>
where
    A: AggregateRoot + DeserializeOwned,
{
    api_request(Method::Get, &A::collection_path(), NO_BODY).await
}

pub async fn get_by_id<A>(id: i64) -> ApiResult<A>
where
    A: AggregateRoot + DeserializeOwned,
{
    api_request(Method::Get, &A::member_path(id), NO_BODY).await
}

pub async fn create<A, C>(request: &C) -> ApiResult<A>
where
    A: AggregateRoot + DeserializeOwned,
    C: Serialize,
{
    api_request(Method::Post, &A::collection_path(), Some(request)).await
}

pub async fn update<A, U>(id: i64, request: &U) -> ApiResult<A>
where
    A: AggregateRoot + DeserializeOwned,
    U: Serialize,
{
    api_request(Method::Put, &A::member_path(id), Some(request)).await
}

pub async fn delete<A>(id: i64) -> ApiResult<()>
where
    A: AggregateRoot,
{
    api_request_empty(Method::Delete, &A::member_path(id), NO_BODY).await
}
