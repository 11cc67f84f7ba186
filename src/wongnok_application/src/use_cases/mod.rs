pub mod signin;
pub mod signout;
pub mod signup;
pub mod verify_token;

#[cfg(test)]
pub(crate) mod test_support;

pub use signin::SigninUseCase;
pub use signout::SignoutUseCase;
pub use signup::SignupUseCase;
pub use verify_token::VerifyTokenUseCase;
