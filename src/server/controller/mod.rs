//! HTTP request handlers.
//!
//! Each handler authenticates and authorizes through `AuthGuard`, converts the request
//! into domain parameters, calls a service and wraps the result in the
//! `{status, message, data}` envelope.

pub mod auth;
pub mod game;
pub mod health;
pub mod review;
pub mod user;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::model::api::ApiResponse;

/// Wraps `data` in the response envelope.
pub fn respond<T: Serialize>(
    status: StatusCode,
    message: &str,
    data: T,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse {
            status: status.as_u16(),
            message: message.to_string(),
            data: Some(data),
        }),
    )
}

/// Envelope with `data: null`.
pub fn respond_empty(status: StatusCode, message: &str) -> (StatusCode, Json<ApiResponse<()>>) {
    (
        status,
        Json(ApiResponse {
            status: status.as_u16(),
            message: message.to_string(),
            data: None,
        }),
    )
}
