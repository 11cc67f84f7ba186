use serde::Serialize;

use super::user::UserId;

/// The user a live token is bound to, as resolved by the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOwner {
    pub user_id: UserId,
    pub is_admin: bool,
}

/// Who is making a request. Anonymous unless a live token was presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: Option<UserId>,
    pub is_admin: bool,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }
}

impl From<SessionOwner> for Identity {
    fn from(owner: SessionOwner) -> Self {
        Self {
            user_id: Some(owner.user_id),
            is_admin: owner.is_admin,
        }
    }
}
