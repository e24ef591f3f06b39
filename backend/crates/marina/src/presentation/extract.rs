//! Request body extractor
//!
//! Accepts `application/x-www-form-urlencoded` bodies as well as JSON.
//! Every rejection is turned into a 400 with the usual error body.

use crate::error::MarinaError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

/// Body deserialized from JSON or a urlencoded form, chosen by `Content-Type`
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = MarinaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| MarinaError::InvalidParameters(rejection.body_text()))?;
            return Ok(Self(value));
        }

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            // No body type at all: nothing was supplied
            Err(JsonRejection::MissingJsonContentType(_)) => Err(MarinaError::MissingParameters),
            Err(rejection) => Err(MarinaError::InvalidParameters(rejection.body_text())),
        }
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            content_type
                .trim_start()
                .starts_with("application/x-www-form-urlencoded")
        })
}
