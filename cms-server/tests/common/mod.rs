//! Shared helpers for the in-process router tests
#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, Response, header},
};
use cms_server::{Config, ServerState, api::build_router};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "cms-test-boundary";

/// Router over an in-memory store and a throwaway content directory
pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::for_work_dir(dir.path().to_string_lossy().to_string());
        let state = ServerState::in_memory(&config).await.unwrap();
        Self {
            router: build_router(state.clone()),
            state,
            _dir: dir,
        }
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    /// GET and decode a JSON body
    pub async fn get_json(&self, uri: &str) -> Value {
        let resp = self.get(uri).await;
        assert!(resp.status().is_success(), "GET {uri} -> {}", resp.status());
        body_json(resp).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        let req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> Response<Body> {
        let req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn post_multipart(&self, uri: &str, form: MultipartBody) -> Response<Body> {
        let req = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(form.finish()))
            .unwrap();
        self.send(req).await
    }

    /// Menu items as served by `/api/menu`
    pub async fn menu(&self) -> Vec<Value> {
        self.get_json("/api/menu").await.as_array().unwrap().clone()
    }

    /// On-disk path of an `/uploads/<name>` URL
    pub fn upload_path(&self, url: &str) -> std::path::PathBuf {
        self.state.images.path_for_url(url).unwrap()
    }
}

pub async fn body_bytes(resp: Response<Body>) -> Bytes {
    resp.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

pub async fn body_text(resp: Response<Body>) -> String {
    String::from_utf8(body_bytes(resp).await.to_vec()).unwrap()
}

pub fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Hand-built `multipart/form-data` body
#[derive(Default)]
pub struct MultipartBody {
    buf: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, data: &[u8]) -> Self {
        self.buf.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.buf
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.buf
    }
}

/// A complete add-menu form
pub fn dish(name: &str, price: &str, category: &str, image: &[u8]) -> MultipartBody {
    MultipartBody::new()
        .text("name", name)
        .text("price", price)
        .text("category", category)
        .file("imageFile", "dish.png", image)
}
