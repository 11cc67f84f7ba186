use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn signup_returns_user_id() {
    let app = TestApp::new().await;

    let response = app.post_signup("tester", "123456").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["user_id"], 1);
}

#[tokio::test]
async fn signup_rejects_invalid_fields_with_400() {
    let app = TestApp::new().await;

    let cases = [
        (json!({ "username": "abc", "password": "123456" }), "username too short"),
        (json!({ "username": "tester", "password": "12345" }), "password too short"),
        (json!({ "username": "bad name!", "password": "123456" }), "username invalid"),
        (json!({ "password": "123456" }), "username required"),
        (json!({ "username": "tester" }), "password required"),
    ];

    for (request, expected) in cases {
        let response = app.post_json("/auth/signup", &request).await;
        assert_eq!(response.status().as_u16(), 400, "request: {request}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], expected, "request: {request}");
    }
}

#[tokio::test]
async fn signup_duplicate_username_returns_409() {
    let app = TestApp::new().await;

    assert_eq!(app.post_signup("tester", "123456").await.status().as_u16(), 200);

    let response = app.post_signup(" TESTER ", "abcdef").await;
    assert_eq!(response.status().as_u16(), 409);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "username not available");
}
