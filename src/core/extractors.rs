//! Axum extractors for order requests
//!
//! Both extractors reject with [`OrderError`] so that every failure a client
//! sees has the same `{ message, errors }` shape.

use super::error::OrderError;
use super::order::{OrderId, OrderPayload};
use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

/// Order id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct OrderIdPath(pub OrderId);

impl<S> FromRequestParts<S> for OrderIdPath
where
    S: Send + Sync,
{
    type Rejection = OrderError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| OrderError::InvalidId(e.body_text()))?;

        raw.parse::<OrderId>()
            .map(OrderIdPath)
            .map_err(|_| OrderError::InvalidId(raw))
    }
}

/// Order payload taken from a JSON request body
///
/// Syntax errors, wrong field types and a missing JSON content type all
/// become [`OrderError::MalformedBody`]. Missing fields do not: they are left
/// for validation to report.
#[derive(Debug, Clone)]
pub struct OrderJson(pub OrderPayload);

impl<S> FromRequest<S> for OrderJson
where
    S: Send + Sync,
{
    type Rejection = OrderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<OrderPayload>::from_request(req, state)
            .await
            .map_err(|e| OrderError::MalformedBody(e.body_text()))?;

        Ok(OrderJson(payload))
    }
}
