use contracts::shared::api::{ApiError, ApiResponse, ApiResult, MessageResponse};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use web_sys::AbortController;

use crate::shared::api_utils::{api_url, is_public_endpoint, API_TIMEOUT};
use crate::system::auth::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

/// Error body of a non-2xx answer; only `message` is used
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Sends one JSON request and unwraps the `{status, data, message}` envelope.
///
/// Non-auth endpoints need a stored token. A 401 ends the session and sends
/// the browser to `/login`.
pub async fn api_request<T, B>(method: Method, endpoint: &str, body: Option<&B>) -> ApiResult<T>
where
    T: DeserializeOwned,
    B: Serialize,
{
    send(method, endpoint, body)
        .await
        .and_then(|(status, ok, text)| {
            let session_bound = !is_public_endpoint(endpoint);
            interpret::<ApiResponse<T>, T>(status, ok, &text, session_bound, |r| {
                r.into_result(status)
            })
        })
        .map_err(|e| report(method, endpoint, e))
}

/// Like [`api_request`] for endpoints that answer with a message only (delete)
pub async fn api_request_empty<B>(method: Method, endpoint: &str, body: Option<&B>) -> ApiResult<()>
where
    B: Serialize,
{
    send(method, endpoint, body)
        .await
        .and_then(|(status, ok, text)| {
            let session_bound = !is_public_endpoint(endpoint);
            interpret::<MessageResponse, ()>(status, ok, &text, session_bound, |r| {
                r.into_result(status)
            })
        })
        .map_err(|e| report(method, endpoint, e))
}

/// Value of the `Authorization` header for `endpoint`, if any
pub fn authorization_header(endpoint: &str, token: Option<String>) -> ApiResult<Option<String>> {
    match token {
        Some(token) => Ok(Some(format!("Bearer {}", token))),
        None if is_public_endpoint(endpoint) => Ok(None),
        None => Err(ApiError::not_authenticated()),
    }
}

/// Maps an HTTP answer to a result; `unwrap` turns the parsed envelope into the value.
///
/// A 401 on a session-bound endpoint means the token is gone; on the auth
/// endpoints it is a plain rejection carrying the server message.
pub fn interpret<E, T>(
    status: u16,
    ok: bool,
    body: &str,
    session_bound: bool,
    unwrap: impl FnOnce(E) -> ApiResult<T>,
) -> ApiResult<T>
where
    E: DeserializeOwned,
{
    if status == 401 && session_bound {
        return Err(ApiError::session_expired());
    }
    if !ok {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        return Err(match message {
            Some(message) => ApiError::server(message),
            None => ApiError::http_status(status),
        });
    }
    let envelope: E = serde_json::from_str(body)?;
    unwrap(envelope)
}

async fn send<B: Serialize>(
    method: Method,
    endpoint: &str,
    body: Option<&B>,
) -> ApiResult<(u16, bool, String)> {
    let authorization = authorization_header(endpoint, storage::get_token())?;
    let url = api_url(endpoint);

    let mut builder = builder_for(method, &url).header("Content-Type", "application/json");
    if let Some(value) = &authorization {
        builder = builder.header("Authorization", value);
    }

    let controller = AbortController::new().map_err(|_| ApiError::network())?;
    builder = builder.abort_signal(Some(&controller.signal()));

    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::validation(format!("Failed to build request: {}", e)))?;

    // Dropping the timeout after the response arrives cancels it.
    let _timeout = Timeout::new(API_TIMEOUT.as_millis() as u32, move || controller.abort());

    let response = request.send().await.map_err(|e| {
        log::debug!("{} {}: transport error: {}", method, endpoint, e);
        ApiError::network()
    })?;
    let status = response.status();
    let ok = response.ok();
    let text = response.text().await.map_err(|_| ApiError::network())?;
    Ok((status, ok, text))
}

fn builder_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
}

fn report(method: Method, endpoint: &str, err: ApiError) -> ApiError {
    log::error!("{} {} failed: {}", method, endpoint, err);
    if err.is_session_expired() {
        storage::clear_session();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_customer::Customer;

    fn customers(status: u16, body: &str) -> ApiResult<Vec<Customer>> {
        let ok = (200..300).contains(&status);
        interpret::<ApiResponse<Vec<Customer>>, _>(status, ok, body, true, |r| {
            r.into_result(status)
        })
    }

    #[test]
    fn test_missing_token_only_allowed_for_auth() {
        assert_eq!(
            authorization_header("/items", None).unwrap_err(),
            ApiError::not_authenticated()
        );
        assert_eq!(authorization_header("/auth/login", None).unwrap(), None);
        assert_eq!(
            authorization_header("/items", Some("t0k".into())).unwrap(),
            Some("Bearer t0k".to_string())
        );
    }

    #[test]
    fn test_unauthorized_means_session_expired() {
        let err = customers(401, r#"{"status":"error","message":"jwt expired"}"#).unwrap_err();
        assert!(err.is_session_expired());
        assert_eq!(err.message, "Session expired. Please login again.");
    }

    #[test]
    fn test_rejected_login_keeps_server_message() {
        let result = interpret::<ApiResponse<Vec<Customer>>, _>(
            401,
            false,
            r#"{"status":"error","message":"Email atau kata sandi salah"}"#,
            false,
            |r| r.into_result(401),
        );
        let err = result.unwrap_err();
        assert!(!err.is_session_expired());
        assert_eq!(err.message, "Email atau kata sandi salah");
    }

    #[test]
    fn test_error_status_uses_server_message_or_fallback() {
        let err = customers(422, r#"{"status":"error","message":"Email sudah terdaftar"}"#)
            .unwrap_err();
        assert_eq!(err.message, "Email sudah terdaftar");

        let err = customers(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.message, "Request failed with status 502");
    }

    #[test]
    fn test_success_envelope_is_unwrapped() {
        let body = r#"{"status":"success","data":[]}"#;
        assert_eq!(customers(200, body).unwrap().len(), 0);
    }

    #[test]
    fn test_message_only_response() {
        let result = interpret::<MessageResponse, ()>(
            200,
            true,
            r#"{"status":"success","message":"Pelanggan dihapus"}"#,
            true,
            |r| r.into_result(200),
        );
        assert!(result.is_ok());
    }
}
