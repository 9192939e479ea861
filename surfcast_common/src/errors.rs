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
use thiserror::Error;

pub type SurfcastResult<T> = std::result::Result<T, SurfcastError>;

#[derive(Error,Debug)]
pub enum SurfcastError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    SqlxError( #[from] sqlx::Error),

    #[error("JSON error: {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("blob store error: {0}")]
    BlobError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("operation failed: {0}")]
    OpFailed(String),
}

pub fn bad_request (msg: impl ToString)->SurfcastError {
    SurfcastError::BadRequest(msg.to_string())
}

pub fn not_found (msg: impl ToString)->SurfcastError {
    SurfcastError::NotFound(msg.to_string())
}

pub fn blob_error (msg: impl ToString)->SurfcastError {
    SurfcastError::BlobError(msg.to_string())
}

pub fn config_error (msg: impl ToString)->SurfcastError {
    SurfcastError::ConfigError(msg.to_string())
}

pub fn op_failed (msg: impl ToString)->SurfcastError {
    SurfcastError::OpFailed(msg.to_string())
}
