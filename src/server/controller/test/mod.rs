use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        Method, Request, StatusCode,
    },
    response::Response,
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::server::{router::router, state::AppState, view::EmbeddedDataRenderer};

mod gate;

/// Drives the full router in-process, carrying the session cookie between requests
/// like a browser would.
struct TestApp {
    app: Router,
    cookie: Option<String>,
}

impl TestApp {
    fn new(db: &sea_orm::DatabaseConnection) -> Self {
        let state = AppState::new(db.clone(), Arc::new(EmbeddedDataRenderer));
        let session = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

        Self {
            app: router(state, "static").layer(session),
            cookie: None,
        }
    }

    async fn send(&mut self, mut request: Request<Body>) -> Response {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(COOKIE, cookie.parse().unwrap());
        }

        let response = self.app.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_string());
        }

        response
    }

    async fn get(&mut self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn delete(&mut self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn json(&mut self, method: Method, uri: &str, body: Value) -> Response {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn form(&mut self, method: Method, uri: &str, body: &str) -> Response {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Registers an account and logs in with it, returning the new user's ID.
    async fn sign_in(&mut self, name: &str, email: &str, password: &str) -> i64 {
        let response = self
            .json(
                Method::POST,
                "/register",
                json!({ "name": name, "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["id"].as_i64().unwrap();

        let response = self
            .json(
                Method::POST,
                "/login",
                json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        id
    }
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}
