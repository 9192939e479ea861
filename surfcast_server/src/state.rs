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
use std::sync::Arc;
use sqlx::mysql::{MySqlPoolOptions, MySqlPool};
use surfcast_common::blob_client::{BlobClient, S3BlobClient};
use surfcast_common::config::Config;
use surfcast_common::errors::SurfcastResult;
use surfcast_common::spot_resolver::SpotResolver;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pool: MySqlPool,
    pub blob_client: Arc<dyn BlobClient>,
}

impl AppState {
    pub async fn init (config: Config) -> SurfcastResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(std::time::Duration::from_secs(10))
            .connect(&config.mysql_url())
            .await?;

        let blob_client = S3BlobClient::new(config.aws_region.clone()).await;

        Ok(AppState {
            config: Arc::new(config),
            pool,
            blob_client: Arc::new(blob_client),
        })
    }

    pub fn spot_resolver (&self) -> SpotResolver {
        SpotResolver::new(self.pool.clone())
    }
}
