//! Authentication transitions observed by the coordinator.

use serde::{Deserialize, Serialize};

/// Authentication state reported by the host application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthState {
    /// No signed-in user.
    SignedOut,
    /// A user is signed in.
    SignedIn {
        /// Account identifier.
        user_id: String,
    },
}

impl AuthState {
    /// Signed in as `user_id`.
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self::SignedIn {
            user_id: user_id.into(),
        }
    }

    /// Whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}
