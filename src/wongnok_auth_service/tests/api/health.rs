use crate::helpers::TestApp;

#[tokio::test]
async fn healthz_returns_200() {
    let app = TestApp::new().await;

    let response = app.get("/healthz", None).await;

    assert_eq!(response.status().as_u16(), 200);
}
