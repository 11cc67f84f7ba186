use serde_json::Value;
use wongnok_core::UserId;

use crate::helpers::TestApp;

#[tokio::test]
async fn admin_route_rejects_anonymous_and_regular_users() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in_user("tester", "123456").await;

    for token in [None, Some(token.as_str())] {
        let response = app.get("/admin/ping", token).await;
        assert_eq!(response.status().as_u16(), 403);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "forbidden");
    }
}

#[tokio::test]
async fn admin_route_allows_administrators() {
    let app = TestApp::new().await;
    let (user_id, token) = app.signed_in_user("manager", "123456").await;

    app.auth
        .credential_store()
        .set_admin(UserId::new(user_id), true)
        .await
        .unwrap();

    let response = app.get("/admin/ping", Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), format!("pong {user_id}"));
}

#[tokio::test]
async fn removed_user_token_resolves_anonymous() {
    let app = TestApp::new().await;
    let (user_id, token) = app.signed_in_user("tester", "123456").await;

    app.auth
        .credential_store()
        .remove_user(UserId::new(user_id))
        .await
        .unwrap();

    let body: Value = app.get("/auth/me", Some(&token)).await.json().await.unwrap();
    assert!(body["user_id"].is_null());
}
