mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use common::{TestApp, body_json, body_text};

#[tokio::test]
async fn unknown_path_is_json_404() {
    let app = TestApp::spawn().await;

    let resp = app.get("/no/such/page").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("x-request-id"));
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 3);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn wrong_method_on_known_path_is_404() {
    let app = TestApp::spawn().await;

    let req = Request::delete("/api/menu").body(Body::empty()).unwrap();
    assert_eq!(app.send(req).await.status(), StatusCode::NOT_FOUND);

    // delete is a GET route
    let resp = app.post_form("/delete-menu/1", "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app.get("/login").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preflight_answered_with_cors_headers() {
    let app = TestApp::spawn().await;

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/submit-reservation")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app.send(req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    assert!(resp.headers().contains_key("x-request-id"));
}

fn allows_any_origin(resp: &axum::http::Response<Body>) -> bool {
    resp.headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_some_and(|v| v == "*")
}

#[tokio::test]
async fn json_endpoints_allow_any_origin() {
    let app = TestApp::spawn().await;

    let resp = app.get("/api/menu").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(allows_any_origin(&resp));

    let resp = app.get("/api/reservations").await;
    assert!(allows_any_origin(&resp));

    let resp = app
        .post_form("/login", "userid=admin&password=password123&role=admin")
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(allows_any_origin(&resp));

    let resp = app
        .post_form("/login", "userid=admin&password=wrong&role=admin")
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(allows_any_origin(&resp));

    let resp = app
        .post_json("/submit-reservation", r#"{"name": "Meera"}"#)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(allows_any_origin(&resp));
}

#[tokio::test]
async fn bare_options_on_any_path_is_ok() {
    let app = TestApp::spawn().await;

    for uri in ["/login", "/whatever"] {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        assert_eq!(app.send(req).await.status(), StatusCode::OK, "OPTIONS {uri}");
    }
}

#[tokio::test]
async fn request_id_is_propagated() {
    let app = TestApp::spawn().await;

    let req = Request::get("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let resp = app.send(req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-42");
}

#[tokio::test]
async fn health_reports_database() {
    let app = TestApp::spawn().await;

    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn login_pages_are_served() {
    let app = TestApp::spawn().await;

    for uri in ["/", "/login.html", "/admin-login.html", "/staff-login.html"] {
        let resp = app.get(uri).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
        assert!(ct.starts_with("text/html"), "{uri}: {ct}");
        assert!(body_text(resp).await.contains("<form"), "{uri}");
    }
}

#[tokio::test]
async fn dashboards_render_when_empty() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/dashboard.html").await.status(), StatusCode::OK);
    assert_eq!(app.get("/staff-dashboard.html").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn upload_path_traversal_rejected() {
    let app = TestApp::spawn().await;

    let resp = app.get("/uploads/..%2Fdatabase").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.get("/uploads/missing.png").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
