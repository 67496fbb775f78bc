use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "tkn";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the bearer token from localStorage.
///
/// Login writes this key elsewhere; this screen only reads it.
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}
