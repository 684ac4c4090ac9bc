use contracts::shared::api::ApiResult;
use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest};

use crate::shared::api::{api_request, api_request_empty, Method};

use super::storage;

/// Login with email and password; stores the session on success
pub async fn login(request: &LoginRequest) -> ApiResult<AuthResponse> {
    let response: AuthResponse = api_request(Method::Post, "/auth/login", Some(request)).await?;
    storage::save_session(&response);
    log::info!("signed in as {}", response.user.email);
    Ok(response)
}

/// Creates the account, then signs in with the same credentials
pub async fn register(request: &RegisterRequest) -> ApiResult<AuthResponse> {
    api_request_empty(Method::Post, "/auth/register", Some(request)).await?;
    login(&request.to_login()).await
}
