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

/// unit tests for query parameter parsing
/// run with "cargo test --test test_routes -- --nocapture"

use serde_urlencoded;
use surfcast_server::routes::ForecastQuery;

#[test]
fn test_parses_praia_id () {
    println!("--- testing forecast query parsing");
    let q: ForecastQuery = serde_urlencoded::from_str("praia_id=42").unwrap();
    assert_eq!(q.praia_id.as_deref(), Some("42"));
    assert_eq!(q.coast_id, None);
}

#[test]
fn test_parses_coast_id () {
    let q: ForecastQuery = serde_urlencoded::from_str("coastId=7").unwrap();
    assert_eq!(q.coast_id.as_deref(), Some("7"));
    assert_eq!(q.praia_id, None);
}

#[test]
fn test_empty_query_parses_to_none () {
    let q: ForecastQuery = serde_urlencoded::from_str("").unwrap();
    assert_eq!(q.praia_id, None);
    assert_eq!(q.coast_id, None);
}
