mod feed;

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Extension, Json,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use vinofeed_xml::FeedStore;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub store: FeedStore,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    feed: &'static str,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(feed::serve_feed))
        .route("/api/v1/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let feed = match tokio::fs::try_exists(state.store.path()).await {
        Ok(true) => "present",
        Ok(false) => "missing",
        Err(e) => {
            tracing::warn!(error = %e, "health check: cannot stat feed file");
            "unreadable"
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData { status: "ok", feed },
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
