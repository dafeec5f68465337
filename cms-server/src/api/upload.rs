//! Upload Routes
//!
//! 已上传的菜品图片，公开访问：`GET /uploads/{file}`

use axum::{
    Router,
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use http::{StatusCode, header};
use shared::AppError;

use crate::core::ServerState;

/// Build upload router
pub fn router() -> Router<ServerState> {
    Router::new().route("/uploads/{file}", get(serve_uploaded_file))
}

/// Serve uploaded file handler
async fn serve_uploaded_file(
    State(state): State<ServerState>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    // Security check: prevent path traversal
    if state.images.resolve(&file).is_none() {
        return Err(AppError::invalid_request("Invalid filename"));
    }

    let Some(content) = state.images.read(&file).await else {
        tracing::debug!(file = %file, "Uploaded file not found");
        return Err(AppError::not_found("File"));
    };

    let mime = mime_guess::from_path(&file).first_or_octet_stream();
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.essence_str().to_string())],
        Bytes::from(content),
    )
        .into_response())
}
