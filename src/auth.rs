use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "gigboard_token";
pub const USER_KEY: &str = "gigboard_user";
pub const ADMIN_TOKEN_KEY: &str = "gigboard_admin_token";

/// The creator account stored alongside the token at login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub organization_name: Option<String>,
}

#[cfg(feature = "web")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "web")]
fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(not(feature = "web"))]
fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(feature = "web")]
fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(feature = "web"))]
fn storage_set(_key: &str, _value: &str) {}

#[cfg(feature = "web")]
fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(feature = "web"))]
fn storage_remove(_key: &str) {}

pub fn token() -> Option<String> {
    storage_get(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn set_token(token: &str) {
    storage_set(TOKEN_KEY, token);
}

pub fn admin_token() -> Option<String> {
    storage_get(ADMIN_TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn user() -> Option<StoredUser> {
    let raw = storage_get(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn set_user(user: &StoredUser) {
    match serde_json::to_string(user) {
        Ok(raw) => storage_set(USER_KEY, &raw),
        Err(err) => tracing::error!("failed to serialize stored user: {err}"),
    }
}

pub fn is_logged_in() -> bool {
    token().is_some()
}

/// Clears the stored credentials and returns to the landing page.
pub fn logout() {
    storage_remove(TOKEN_KEY);
    storage_remove(USER_KEY);
    navigate("/");
}

/// Sends visitors without a creator token to the login page. Returns whether
/// the caller may proceed.
pub fn require_auth() -> bool {
    if is_logged_in() {
        return true;
    }
    navigate("/creator/login");
    false
}

#[cfg(feature = "web")]
pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(feature = "web"))]
pub fn navigate(_path: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_token_outside_the_browser() {
        assert_eq!(token(), None);
        assert!(!is_logged_in());
    }

    #[test]
    fn stored_user_round_trips_through_json() {
        let user = StoredUser {
            id: "9b2e7d0e-8a1f-4f25-b2d4-efc4f3a1c001".to_string(),
            name: "Maya Prasetyo".to_string(),
            email: "maya@example.com".to_string(),
            organization_name: Some("Harbor Arts Collective".to_string()),
        };
        let raw = serde_json::to_string(&user).expect("serializes");
        let back: StoredUser = serde_json::from_str(&raw).expect("deserializes");
        assert_eq!(back, user);
    }
}
