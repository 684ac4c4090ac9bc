use contracts::system::auth::{AuthResponse, UserInfo};
use web_sys::window;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist token and user after a successful login
pub fn save_session(auth: &AuthResponse) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &auth.token);
        match serde_json::to_string(&auth.user) {
            Ok(user) => {
                let _ = storage.set_item(USER_KEY, &user);
            }
            Err(e) => log::warn!("could not store user: {}", e),
        }
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Stored user; a corrupt entry reads as absent
pub fn get_user() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    parse_user(&raw)
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

fn parse_user(raw: &str) -> Option<UserInfo> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user() {
        let user = parse_user(r#"{"id":7,"name":"Sari","email":"sari@kamusewa.id"}"#).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Sari");
        assert!(parse_user("not json").is_none());
    }
}
