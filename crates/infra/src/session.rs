//! Identity/session gate.

use serde::{Deserialize, Serialize};

use wigstock_core::UserId;

/// Who is using the app. Only `Authenticated` may touch the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user_id: UserId, email: String },
}

impl Session {
    pub fn authenticated(email: impl Into<String>) -> Self {
        Session::Authenticated {
            user_id: UserId::new(),
            email: email.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { email, .. } => Some(email),
        }
    }
}
