use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::AppState;

/// `GET /`: the stored feed, byte for byte.
pub(super) async fn serve_feed(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    let read = match tokio::task::spawn_blocking(move || store.read()).await {
        Ok(read) => read,
        Err(e) => {
            tracing::error!(error = %e, "feed read task failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "failed to read feed").into_response();
        }
    };

    match read {
        Ok(Some(xml)) => (StatusCode::OK, [(header::CONTENT_TYPE, "application/xml")], xml)
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "feed has not been generated yet").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to read stored feed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to read feed").into_response()
        }
    }
}
