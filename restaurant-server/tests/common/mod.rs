//! 集成测试公共工具
//!
//! 每个测试一个临时 SQLite 文件，通过 `oneshot` 直接驱动完整的 axum 应用。

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use restaurant_server::{Config, DbService, PageRenderer, ServerState, build_app};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    // 保持临时目录存活直到测试结束
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(tweak: impl FnOnce(&mut Config)) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("restaurant.db");
        let mut config = Config::with_database(path.to_string_lossy().to_string());
        tweak(&mut config);

        let db = DbService::new(&config.database_path)
            .await
            .expect("open database");
        let pages = PageRenderer::new().expect("load templates");
        let state = ServerState::new(config, db, pages);
        let router = build_app(&state).with_state(state.clone());

        Self {
            router,
            state,
            _dir: dir,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("infallible router");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request("GET", uri, token, None)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request("DELETE", uri, token, None)).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(request("POST", uri, token, Some(body))).await
    }

    pub async fn put_json(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(request("PUT", uri, token, Some(body))).await
    }

    pub async fn patch_json(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(request("PATCH", uri, token, Some(body))).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("request");
        self.send(req).await
    }

    /// 注册用户并返回令牌
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let res = self
            .post_json(
                "/auth/users/",
                None,
                json!({ "username": username, "password": password, "email": "" }),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "register: {}", res.body);

        let res = self
            .post_json(
                "/api/token/",
                None,
                json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "token: {}", res.body);
        res.json()["token"]
            .as_str()
            .expect("token string")
            .to_string()
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request")
}
