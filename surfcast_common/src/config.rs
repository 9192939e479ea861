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
//! process configuration, loaded once from the environment.

use std::env;
use crate::errors::{SurfcastResult, config_error};

#[derive(Debug, Clone)]
pub struct Config {
    pub s3_bucket: String,
    pub mysql_host: String,
    pub mysql_user: String,
    pub mysql_password: String,
    pub mysql_database: String,
    pub aws_region: String,
    pub bind_addr: String,
}

fn required (name: &str) -> SurfcastResult<String> {
    env::var(name).map_err(|_| config_error(format!("missing required environment variable: {name}")))
}

fn optional (name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env () -> SurfcastResult<Self> {
        Ok(Config {
            s3_bucket: required("FORECAST_API_S3_BUCKET")?,
            mysql_host: required("FORECAST_API_MYSQL_HOST")?,
            mysql_user: required("FORECAST_API_MYSQL_USER")?,
            mysql_password: required("FORECAST_API_MYSQL_PASSWORD")?,
            mysql_database: required("FORECAST_API_MYSQL_DATABASE")?,
            aws_region: optional("AWS_REGION", "us-east-1"),
            bind_addr: optional("FORECAST_API_BIND_ADDR", "0.0.0.0:8080"),
        })
    }

    pub fn mysql_url (&self) -> String {
        format!(
            "mysql://{}:{}@{}/{}",
            self.mysql_user, self.mysql_password, self.mysql_host, self.mysql_database
        )
    }
}
