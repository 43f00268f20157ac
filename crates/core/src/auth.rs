//! Authenticated-user context.
//!
//! The actual sign-in flow lives with the platform shell; services here
//! only need the current user's id to scope reads and writes. The trait
//! keeps that dependency injectable so tests can run against a fixed
//! session.

use std::sync::{Arc, RwLock};

use crate::errors::{Error, Result};

/// Provides the id of the currently signed-in user.
pub trait AuthContext: Send + Sync {
    /// Returns the current user id, or `Error::Auth` when signed out.
    fn current_user_id(&self) -> Result<String>;
}

/// Session state owned by the application shell.
///
/// The shell updates it on sign-in/sign-out; services observe it through
/// the `AuthContext` trait.
#[derive(Clone, Default)]
pub struct Session {
    user_id: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session already signed in as `user_id`.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        let session = Self::new();
        session.sign_in(user_id);
        session
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        *self.user_id.write().unwrap() = Some(user_id.into());
    }

    pub fn sign_out(&self) {
        *self.user_id.write().unwrap() = None;
    }
}

impl AuthContext for Session {
    fn current_user_id(&self) -> Result<String> {
        self.user_id
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Auth("sign in to continue".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_sign_in_and_out() {
        let session = Session::new();
        assert!(session.current_user_id().is_err());

        session.sign_in("uid-1");
        assert_eq!(session.current_user_id().unwrap(), "uid-1");

        session.sign_out();
        assert!(matches!(session.current_user_id(), Err(Error::Auth(_))));
    }
}
