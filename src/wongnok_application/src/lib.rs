pub mod auth_service;
pub mod error;
pub mod use_cases;

pub use auth_service::AuthService;
pub use error::{AuthError, ErrorClass};
pub use use_cases::{SigninUseCase, SignoutUseCase, SignupUseCase, VerifyTokenUseCase};
