// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Error;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use hyper::StatusCode;

/// Create a `Response` suitable for `axum::Router`. The body is the flat
/// `{"error": message}` JSON shape that every API route reports.
pub fn create_error_response(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
        .into_response()
}

/// Convert `Error` into a `Response` suitable for `axum::Router`.
impl Into<Response> for Error {
    fn into(self) -> Response {
        match self {
            Error::Http(code, mesg) => create_error_response(code, mesg),
            Error::String(s) => create_error_response(StatusCode::NOT_ACCEPTABLE, s),
        }
    }
}
