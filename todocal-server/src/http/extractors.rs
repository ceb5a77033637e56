//! Custom Axum extractors

use axum::body::{to_bytes, Body};
use axum::extract::{Form, FromRequest, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Uri};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Largest request body read before decoding (axum's default limit)
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Request input read from a JSON body, a form body or the query string.
///
/// GET/HEAD requests and requests with an empty body read the query
/// string whatever their `Content-Type`. Otherwise the body is decoded
/// as JSON or form fields by `Content-Type`. The calendar UI posts form
/// fields while API clients send JSON. Decoding failures are rejected as
/// a failure envelope, never a bare 4xx.
pub struct Input<T>(pub T);

fn from_query<T: DeserializeOwned>(uri: &Uri) -> Result<T, ApiError> {
    let Query(value) =
        Query::<T>::try_from_uri(uri).map_err(|e| ApiError::malformed(e.body_text()))?;
    Ok(value)
}

impl<S, T> FromRequest<S> for Input<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if matches!(*req.method(), Method::GET | Method::HEAD) {
            return from_query(req.uri()).map(Self);
        }

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, BODY_LIMIT)
            .await
            .map_err(|e| ApiError::malformed(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return from_query(&parts.uri).map(Self);
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::malformed(e.body_text()))?;
            Ok(Self(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::malformed(e.body_text()))?;
            Ok(Self(value))
        } else {
            from_query(req.uri()).map(Self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::IdParams;

    async fn extract(req: Request) -> Result<i64, ApiError> {
        let Input(params) = Input::<IdParams>::from_request(req, &()).await?;
        Ok(params.id())
    }

    #[tokio::test]
    async fn reads_json_body() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/Todo/Delete")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"id":4}"#))
            .unwrap();
        assert_eq!(extract(req).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn reads_form_body() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/Todo/Delete")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded; charset=UTF-8")
            .body(Body::from("id=9"))
            .unwrap();
        assert_eq!(extract(req).await.unwrap(), 9);
    }

    #[tokio::test]
    async fn falls_back_to_query() {
        let req = Request::builder()
            .uri("/Todo/GetById?id=12")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract(req).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn get_ignores_json_content_type() {
        let req = Request::builder()
            .uri("/Todo/GetById?id=1")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract(req).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn empty_body_falls_back_to_query() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/Todo/Delete?id=6")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract(req).await.unwrap(), 6);
    }

    #[tokio::test]
    async fn bad_json_is_malformed() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/Todo/Delete")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        assert!(matches!(extract(req).await, Err(ApiError::Malformed { .. })));
    }
}
