use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    middleware::session::{SessionSigner, SESSION_COOKIE},
    router::router,
    state::AppState,
};


const TEST_SECRET: &str = "test-session-secret";

fn test_state(db: &DatabaseConnection) -> AppState {
    let oauth_client = BasicClient::new(ClientId::new("client-id".to_string()))
        .set_client_secret(ClientSecret::new("client-secret".to_string()))
        .set_auth_uri(AuthUrl::new("http://localhost/authorize".to_string()).unwrap())
        .set_token_uri(TokenUrl::new("http://localhost/token".to_string()).unwrap())
        .set_redirect_uri(RedirectUrl::new("http://localhost/auth/callback".to_string()).unwrap());

    AppState::new(
        db.clone(),
        reqwest::Client::new(),
        oauth_client,
        "http://localhost/userinfo".to_string(),
        SessionSigner::new(TEST_SECRET).unwrap(),
        false,
    )
}

fn app(db: &DatabaseConnection) -> Router {
    router(test_state(db), "web/dist")
}

fn session_for(user_id: Uuid) -> String {
    let value = SessionSigner::new(TEST_SECRET).unwrap().sign(user_id);
    format!("{}={}", SESSION_COOKIE, value)
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
