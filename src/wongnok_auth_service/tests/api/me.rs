use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn me_is_anonymous_without_a_live_token() {
    let app = TestApp::new().await;

    for token in [None, Some("forged-token")] {
        let response = app.get("/auth/me", token).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "user_id": null, "is_admin": false }));
    }
}

#[tokio::test]
async fn me_resolves_raw_and_bearer_tokens() {
    let app = TestApp::new().await;
    let (user_id, token) = app.signed_in_user("tester", "123456").await;

    let bearer: Value = app.get("/auth/me", Some(&token)).await.json().await.unwrap();
    assert_eq!(bearer, json!({ "user_id": user_id, "is_admin": false }));

    let raw: Value = app
        .http_client
        .get(format!("{}/auth/me", app.address))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(raw, bearer);
}
