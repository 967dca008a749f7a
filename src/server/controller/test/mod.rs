use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use tempfile::TempDir;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    middleware::auth::USER_ID_HEADER, router::router, service::storage::PdfStorage,
    state::AppState,
};


/// Router over an in-memory database with every table and a temporary upload directory.
struct TestApp {
    _context: TestContext,
    _dir: TempDir,
    app: Router,
    state: AppState,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(
            context.db.clone().unwrap(),
            PdfStorage::new(dir.path().join("uploads")),
        );

        Self {
            app: router().with_state(state.clone()),
            state,
            _context: context,
            _dir: dir,
        }
    }

    async fn user(&self) -> i32 {
        factory::user::create_user(&self.state.db).await.unwrap().id
    }

    async fn admin(&self) -> i32 {
        factory::user::create_admin(&self.state.db).await.unwrap().id
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }
}

fn json_request(
    method: &str,
    uri: &str,
    user_id: Option<i32>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: &str, uri: &str, user_id: Option<i32>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Asserts the status and returns the JSON body.
async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
