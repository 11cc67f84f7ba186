use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn signout_revokes_only_that_token() {
    let app = TestApp::new().await;
    let (user_id, first) = app.signed_in_user("tester", "123456").await;
    let second: Value = app.post_signin("tester", "123456").await.json().await.unwrap();
    let second = second["token"].as_str().unwrap();

    let response = app.post_signout(&first).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let me: Value = app.get("/auth/me", Some(&first)).await.json().await.unwrap();
    assert_eq!(me, json!({ "user_id": null, "is_admin": false }));

    let me: Value = app.get("/auth/me", Some(second)).await.json().await.unwrap();
    assert_eq!(me, json!({ "user_id": user_id, "is_admin": false }));
}

#[tokio::test]
async fn signout_is_idempotent() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in_user("tester", "123456").await;

    assert_eq!(app.post_signout(&token).await.status().as_u16(), 200);
    assert_eq!(app.post_signout(&token).await.status().as_u16(), 200);
    assert_eq!(app.post_signout("never-issued").await.status().as_u16(), 200);
}

#[tokio::test]
async fn signout_without_token_returns_400() {
    let app = TestApp::new().await;

    let response = app.post_json("/auth/signout", &json!({})).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "token required");
}
