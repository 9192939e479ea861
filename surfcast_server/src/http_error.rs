/*
 * Copyright (c) 2026, Surfcast Contributors. All rights reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 * http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use surfcast_common::errors::SurfcastError;

/// wraps the core error type so we can give it an axum `IntoResponse` impl
/// without violating the orphan rule from the server crate.
pub struct ApiError(pub SurfcastError);

impl From<SurfcastError> for ApiError {
    fn from (e: SurfcastError) -> Self { ApiError(e) }
}

impl IntoResponse for ApiError {
    fn into_response (self) -> Response {
        let (status, kind) = match &self.0 {
            SurfcastError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BadRequest"),
            SurfcastError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "ServerError"),
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
            "internal server error".to_string()
        } else {
            tracing::info!(error = %self.0, "request rejected");
            self.0.to_string()
        };

        (status, Json(json!({ "error": kind, "message": message }))).into_response()
    }
}
