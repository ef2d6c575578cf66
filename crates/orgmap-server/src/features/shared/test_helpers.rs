//! Test helpers for feature handlers and routes
//!
//! # Examples
//!
//! ```rust,ignore
//! let mut organisations = MockOrganisationRepository::new();
//! organisations.expect_list_organisations().returning(|| Ok(vec![]));
//!
//! let app = features::router(feature_state(organisations, MockLocationRepository::new()));
//! let (status, json) = send(app, get("/")).await;
//! ```

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::error::{DatabaseError, ErrorKind};
use std::{borrow::Cow, error::Error as StdError, fmt, sync::Arc};
use tower::ServiceExt;

use crate::db::DbError;
use crate::features::FeatureState;
use crate::repository::{MockLocationRepository, MockOrganisationRepository};

pub fn feature_state(
    organisations: MockOrganisationRepository,
    locations: MockLocationRepository,
) -> FeatureState {
    FeatureState {
        organisations: Arc::new(organisations),
        locations: Arc::new(locations),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Drive one request through `app` and decode the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

/// A `DbError` shaped like PostgreSQL's `foreign_key_violation` (23503).
pub fn foreign_key_violation() -> DbError {
    DbError::Sqlx(sqlx::Error::Database(Box::new(FakeDatabaseError)))
}

#[derive(Debug)]
struct FakeDatabaseError;

impl fmt::Display for FakeDatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("insert or update violates foreign key constraint")
    }
}

impl StdError for FakeDatabaseError {}

impl DatabaseError for FakeDatabaseError {
    fn message(&self) -> &str {
        "insert or update violates foreign key constraint"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("23503"))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::ForeignKeyViolation
    }
}
