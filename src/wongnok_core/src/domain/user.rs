use std::fmt;

use serde::{Deserialize, Serialize};

use super::password_digest::PasswordDigest;

/// Storage-assigned user identifier, always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What the credential store returns for a username lookup.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: UserId,
    pub password_digest: PasswordDigest,
    pub is_admin: bool,
}
