pub mod identity;
pub mod password;
pub mod password_digest;
pub mod session_token;
pub mod user;
pub mod username;
pub mod validation;
