use contracts::shared::api::ApiResult;
use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    /// Session persisted by a previous visit
    pub fn restore() -> Self {
        match storage::get_token() {
            Some(token) => Self {
                token: Some(token),
                user: storage::get_user(),
            },
            None => Self::default(),
        }
    }

    pub fn from_response(response: AuthResponse) -> Self {
        Self {
            token: Some(response.token),
            user: Some(response.user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Pengguna".to_string())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Signs in and publishes the new state
pub async fn do_login(
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> ApiResult<()> {
    let response = api::login(&request).await?;
    set_auth_state.set(AuthState::from_response(response));
    Ok(())
}

pub async fn do_register(
    request: RegisterRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> ApiResult<()> {
    let response = api::register(&request).await?;
    set_auth_state.set(AuthState::from_response(response));
    Ok(())
}

/// Drops the stored session; navigation is up to the caller
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
    log::info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_response() {
        let state = AuthState::from_response(AuthResponse {
            token: "abc".into(),
            user: UserInfo {
                id: 1,
                name: "Budi".into(),
                email: "budi@kamusewa.id".into(),
            },
        });
        assert!(state.is_authenticated());
        assert_eq!(state.display_name(), "Budi");
        assert!(!AuthState::default().is_authenticated());
        assert_eq!(AuthState::default().display_name(), "Pengguna");
    }
}
