use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::use_auth;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

/// Where a visitor of `path` has to go instead, if anywhere
pub fn redirect_for(path: &str, authenticated: bool) -> Option<&'static str> {
    let is_dashboard = path == HOME_PATH || path.starts_with("/dashboard/");
    let is_auth_form = path == LOGIN_PATH || path == "/register";
    match (authenticated, is_dashboard, is_auth_form) {
        (false, true, _) => Some(LOGIN_PATH),
        (true, _, true) => Some(HOME_PATH),
        _ => None,
    }
}

/// Redirects according to [`redirect_for`], otherwise renders children.
///
/// Wraps both the dashboard tree (guests go to `/login`) and the auth forms
/// (signed-in users go to `/dashboard`).
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let location = use_location();
    let target = Memo::new(move |_| {
        redirect_for(&location.pathname.get(), auth_state.get().is_authenticated())
    });

    view! {
        <Show
            when=move || target.get().is_none()
            fallback=move || view! { <Redirect path=target.get().unwrap_or(LOGIN_PATH) /> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guests_are_sent_to_login() {
        assert_eq!(redirect_for("/dashboard", false), Some("/login"));
        assert_eq!(redirect_for("/dashboard/rentals", false), Some("/login"));
        assert_eq!(redirect_for("/login", false), None);
        assert_eq!(redirect_for("/", false), None);
    }

    #[test]
    fn test_signed_in_users_skip_auth_forms() {
        assert_eq!(redirect_for("/login", true), Some("/dashboard"));
        assert_eq!(redirect_for("/register", true), Some("/dashboard"));
        assert_eq!(redirect_for("/dashboard/items", true), None);
        assert_eq!(redirect_for("/dashboardx", false), None);
    }
}
