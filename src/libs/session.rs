//! Process-lifetime record of the authenticated user.
//!
//! The session is an explicit value handed to callers instead of ambient
//! global state. It starts anonymous, becomes authenticated only through a
//! successful login and returns to anonymous only on explicit logout. It is
//! never persisted, so a process restart always starts anonymous.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        user_id: i64,
        name: String,
    },
}

impl Session {
    pub fn new() -> Self {
        Session::Anonymous
    }

    pub fn login(&mut self, user_id: i64, name: String) {
        *self = Session::Authenticated { user_id, name };
    }

    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn user_id(&self) -> Option<i64> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    pub fn user_name(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { name, .. } => Some(name),
        }
    }
}
