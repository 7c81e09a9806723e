use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header::CACHE_CONTROL, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::Error,
    pipeline::{MenuResponse, Pipeline},
    reference_date::ReferenceDate,
};

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// `YYYY-MM-DD`; looks up that day instead of today.
    pub test_date: Option<String>,
}

pub fn router(pipeline: Arc<Pipeline>) -> Router {
    Router::new()
        .route("/api/menu", get(menu))
        .with_state(pipeline)
}

/// `GET /api/menu`. Always answers 200; callers must check `success`.
/// A query string that cannot be read is reported in the body too.
pub async fn menu(
    State(pipeline): State<Arc<Pipeline>>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Response {
    let response = match query {
        Err(rejection) => MenuResponse::failure(&Error::InvalidQuery(rejection.body_text())),
        Ok(Query(query)) => match query.test_date.as_deref().map(str::trim) {
            None | Some("") => pipeline.todays_menu().await,
            Some(date) => match date.parse::<ReferenceDate>() {
                Ok(today) => pipeline.menu_for(today).await,
                Err(e) => MenuResponse::failure(&e),
            },
        },
    };
    log::info!("GET /api/menu success={}", response.is_success());
    if response.is_success() {
        // browsers may reuse a successful lookup for five minutes
        let cache = HeaderValue::from_static("max-age=300");
        ([(CACHE_CONTROL, cache)], Json(response)).into_response()
    } else {
        Json(response).into_response()
    }
}
