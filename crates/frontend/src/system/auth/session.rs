use leptos::prelude::*;

use super::storage;

/// Credentials for the current operator session.
///
/// Built once from client storage and provided via context, so API calls
/// receive their credentials explicitly instead of reaching into the global
/// store on every request.
#[derive(Clone, Debug, Default)]
pub struct Session {
    access_token: Option<String>,
}

impl Session {
    pub fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }

    /// Build a session from the ambient client storage.
    pub fn from_storage() -> Self {
        Self::new(storage::get_access_token())
    }

    /// Value for the `Authorization` header, `None` when unauthenticated.
    pub fn bearer(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }
}

/// Hook to access the session provided by `App`
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        let session = Session::new(Some("abc123".to_string()));
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn test_bearer_is_none_without_token() {
        assert!(Session::new(None).bearer().is_none());
        assert!(Session::default().bearer().is_none());
    }
}
