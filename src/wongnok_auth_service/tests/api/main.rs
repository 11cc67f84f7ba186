mod admin;
mod health;
mod helpers;
mod me;
mod signin;
mod signout;
mod signup;
