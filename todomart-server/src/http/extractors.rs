//! Custom Axum extractors
//!
//! Both reject with `ApiError::BadRequest`, so clients get the same JSON
//! error shape as every other failure.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Form, Path, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;

/// Extract a numeric row id from the path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        Ok(Self(id))
    }
}

/// Request parameters merged from the query string and the body.
///
/// The body may be a url-encoded form or a JSON object; an empty body adds
/// nothing. Body values win over query values with the same name.
pub struct Params<T>(pub T);

impl<S, T> FromRequest<S> for Params<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut params = Map::new();

        if req.uri().query().is_some() {
            let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            insert_text(&mut params, pairs);
        }

        if is_form(req.headers()) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            insert_text(&mut params, pairs);
        } else {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;

            if !body.iter().all(u8::is_ascii_whitespace) {
                let fields = match serde_json::from_slice(&body) {
                    Ok(Value::Object(fields)) => fields,
                    Ok(_) => return Err(ApiError::bad_request("body must be a JSON object")),
                    Err(e) => return Err(ApiError::bad_request(format!("invalid JSON body: {e}"))),
                };
                params.extend(fields);
            }
        }

        let value = serde_json::from_value(Value::Object(params))
            .map_err(|e| ApiError::bad_request(format!("invalid parameters: {e}")))?;
        Ok(Self(value))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

fn insert_text(params: &mut Map<String, Value>, pairs: Vec<(String, String)>) {
    for (key, value) in pairs {
        params.insert(key, Value::String(value));
    }
}
