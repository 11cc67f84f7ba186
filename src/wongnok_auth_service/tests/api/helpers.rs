use argon2::Params;
use axum::{Router, routing::get};
use reqwest::{Client, Response};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::oneshot};
use wongnok_adapters::{hashing::Argon2PasswordHasher, persistence::HashMapCredentialStore};
use wongnok_application::AuthService;
use wongnok_auth_service::AuthServer;
use wongnok_axum::CurrentIdentity;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub auth: AuthService<HashMapCredentialStore, Argon2PasswordHasher>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestApp {
    pub async fn new() -> Self {
        let hasher = Argon2PasswordHasher::new(Params::new(8, 1, 1, None).unwrap());
        let auth = AuthService::new(HashMapCredentialStore::new(), hasher);

        let admin_routes = Router::new().route(
            "/admin/ping",
            get(|CurrentIdentity(identity): CurrentIdentity| async move {
                format!("pong {}", identity.user_id.map(|id| id.get()).unwrap_or_default())
            }),
        );
        let server = AuthServer::new(auth.clone()).with_admin_routes(admin_routes);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            server
                .run_standalone(listener, async {
                    rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            address,
            http_client: Client::new(),
            auth,
            shutdown: Some(tx),
        }
    }

    pub async fn post_signup(&self, username: &str, password: &str) -> Response {
        self.post_json(
            "/auth/signup",
            &json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn post_signin(&self, username: &str, password: &str) -> Response {
        self.post_json(
            "/auth/signin",
            &json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn post_signout(&self, token: &str) -> Response {
        self.post_json("/auth/signout", &json!({ "token": token }))
            .await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.http_client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Response {
        let mut request = self.http_client.get(format!("{}{}", self.address, path));
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Signs up and signs in, returning the new user's id and token.
    pub async fn signed_in_user(&self, username: &str, password: &str) -> (i64, String) {
        let body: Value = self.post_signup(username, password).await.json().await.unwrap();
        let user_id = body["user_id"].as_i64().unwrap();

        let body: Value = self.post_signin(username, password).await.json().await.unwrap();
        let token = body["token"].as_str().unwrap().to_owned();

        (user_id, token)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
