use super::Reducer;
use crate::{
    models::{AuthPayload, SessionUser},
    storage::{DurableStorage, TOKEN_KEY, read_token},
};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Login(AuthPayload),
    Signup(AuthPayload),
    Logout,
    /// Sets or clears only the token, leaving the rest of the session alone.
    HandleToken(Option<String>),
    /// Login or signup was refused; the session is left as it was.
    Rejected(String),
}

/// The authenticated user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl SessionState {
    /// Rebuilds the session from the stored token.
    #[must_use]
    pub fn rehydrate(storage: &dyn DurableStorage) -> Self {
        let token = read_token(storage);
        Self {
            is_authenticated: token.is_some(),
            token,
            user: None,
        }
    }

    fn authenticate(&mut self, payload: AuthPayload, storage: &dyn DurableStorage) {
        if let Err(error) = storage.write(TOKEN_KEY, &payload.access_token) {
            warn!(%error, "failed to persist session token");
        }
        self.is_authenticated = true;
        self.token = Some(payload.access_token);
        self.user = Some(payload.user);
    }
}

impl Reducer for SessionState {
    type Action = SessionAction;

    fn reduce(&mut self, action: SessionAction, storage: &dyn DurableStorage) {
        match action {
            SessionAction::Login(payload) | SessionAction::Signup(payload) => {
                self.authenticate(payload, storage);
            }
            SessionAction::Logout => {
                if let Err(error) = storage.remove(TOKEN_KEY) {
                    warn!(%error, "failed to clear session token");
                }
                *self = Self::default();
            }
            SessionAction::HandleToken(token) => self.token = token,
            SessionAction::Rejected(reason) => debug!(%reason, "authentication rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn payload(token: &str) -> AuthPayload {
        AuthPayload {
            access_token: token.into(),
            user: SessionUser {
                email: "leia@rebellion.com".into(),
                first_name: Some("Leia".into()),
            },
        }
    }

    #[test]
    fn login_authenticates_and_mirrors_the_token() {
        let storage = MemoryStorage::new();
        let mut state = SessionState::default();
        state.reduce(SessionAction::Login(payload("abc")), &storage);

        assert!(state.is_authenticated);
        assert_eq!(state.token.as_deref(), Some("abc"));
        assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("leia@rebellion.com"));
        assert_eq!(read_token(&storage).as_deref(), Some("abc"));
    }

    #[test]
    fn signup_behaves_like_login() {
        let storage = MemoryStorage::new();
        let mut state = SessionState::default();
        state.reduce(SessionAction::Signup(payload("xyz")), &storage);
        assert!(state.is_authenticated);
        assert_eq!(read_token(&storage).as_deref(), Some("xyz"));
    }

    #[test]
    fn logout_clears_state_and_storage() {
        let storage = MemoryStorage::new();
        let mut state = SessionState::default();
        state.reduce(SessionAction::Login(payload("abc")), &storage);
        state.reduce(SessionAction::Logout, &storage);

        assert_eq!(state, SessionState::default());
        assert_eq!(read_token(&storage), None);
    }

    #[test]
    fn handle_token_only_touches_the_token() {
        let storage = MemoryStorage::new();
        let mut state = SessionState::default();
        state.reduce(SessionAction::Login(payload("abc")), &storage);
        state.reduce(SessionAction::HandleToken(None), &storage);

        assert!(state.is_authenticated);
        assert!(state.user.is_some());
        assert_eq!(state.token, None);
    }

    #[test]
    fn rejection_changes_nothing() {
        let storage = MemoryStorage::new();
        let mut state = SessionState::default();
        state.reduce(SessionAction::Rejected("Unauthorized".into()), &storage);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn rehydrate_reads_the_stored_token() {
        let storage = MemoryStorage::with_entry(TOKEN_KEY, "abc");
        let state = SessionState::rehydrate(&storage);
        assert!(state.is_authenticated);
        assert_eq!(state.token.as_deref(), Some("abc"));

        let placeholder = MemoryStorage::with_entry(TOKEN_KEY, "undefined");
        assert_eq!(SessionState::rehydrate(&placeholder), SessionState::default());
    }
}
