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
//! blob store access: fetch an encoded location file by key, distinguishing
//! "no such object" (a normal, recoverable condition for optional layers)
//! from transport/service errors.

use async_trait::async_trait;
use aws_config::{Region, meta::region::RegionProviderChain};
use aws_sdk_s3::Client;
use aws_smithy_runtime_api::client::result::SdkError;
use serde_json::Value;

use crate::errors::{SurfcastError, SurfcastResult, blob_error};

#[async_trait]
pub trait BlobClient: Send + Sync {
    /// fetch and parse the object at `bucket/key`. Returns `Ok(None)` when the
    /// object does not exist; any other failure is an `Err`.
    async fn fetch_json (&self, bucket: &str, key: &str) -> SurfcastResult<Option<Value>>;
}

pub struct S3BlobClient {
    client: Client,
}

impl S3BlobClient {
    pub async fn new (region: String) -> Self {
        let region_provider = RegionProviderChain::first_try(Region::new(region));
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;
        S3BlobClient { client: Client::new(&aws_config) }
    }
}

#[async_trait]
impl BlobClient for S3BlobClient {
    async fn fetch_json (&self, bucket: &str, key: &str) -> SurfcastResult<Option<Value>> {
        let result = self.client.get_object().bucket(bucket).key(key).send().await;

        let output = match result {
            Ok(output) => output,
            Err(SdkError::ServiceError(e)) if e.err().is_no_such_key() => return Ok(None),
            Err(e) => return Err(blob_error(e)),
        };

        let bytes = output.body.collect().await.map_err(blob_error)?.into_bytes();
        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(Some(value))
    }
}
