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
#![allow(unused)]

/// unit tests for error-to-status mapping
/// run with "cargo test --test test_http_error -- --nocapture"

use axum::http::StatusCode;
use axum::response::IntoResponse;
use surfcast_common::errors::{bad_request, not_found, op_failed};
use surfcast_server::http_error::ApiError;

#[test]
fn test_bad_request_maps_to_400 () {
    println!("--- testing error-to-status mapping");
    let response = ApiError(bad_request("missing praia_id")).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_not_found_maps_to_404 () {
    let response = ApiError(not_found("no spot with id 1")).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_internal_errors_map_to_500_and_hide_detail () {
    let response = ApiError(op_failed("unexpected failure detail")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
