use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn signin_returns_token() {
    let app = TestApp::new().await;
    app.post_signup("tester", "123456").await;

    let response = app.post_signin("tester", "123456").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    let token = body["token"].as_str().unwrap();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn signin_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    app.post_signup("tester", "123456").await;

    let wrong_password = app.post_signin("tester", "654321").await;
    let unknown_user = app.post_signin("nobody", "123456").await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_user.status().as_u16(), 401);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_user: Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["error"], "invalid credentials");
}

#[tokio::test]
async fn signin_missing_fields_return_400() {
    let app = TestApp::new().await;

    let response = app.post_signin("", "123456").await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "username required");
}
