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

/// unit tests for compass direction conversion
/// run with "cargo test --test test_direction -- --nocapture"

use surfcast_common::direction::{compass, normalize_degrees};

#[test]
fn test_normalize_degrees () {
    assert_eq!(normalize_degrees(0.0), 0.0);
    assert_eq!(normalize_degrees(90.0), 90.0);
    assert_eq!(normalize_degrees(360.0), 360.0);
    assert_eq!(normalize_degrees(-90.0), 270.0);
    assert_eq!(normalize_degrees(-180.0), 180.0);
    assert_eq!(normalize_degrees(450.0), 90.0);
}

#[test]
fn test_cardinal_directions () {
    println!("--- testing cardinal compass labels");
    assert_eq!(compass(0.0), "N");
    assert_eq!(compass(90.0), "E");
    assert_eq!(compass(180.0), "S");
    assert_eq!(compass(270.0), "O");
}

#[test]
fn test_intercardinal_directions () {
    assert_eq!(compass(45.0), "NE");
    assert_eq!(compass(135.0), "SE");
    // note: both 225 maps onto the duplicated SSO sector
    assert_eq!(compass(225.0), "SSO");
    assert_eq!(compass(315.0), "NO");
}

#[test]
fn test_half_winds () {
    assert_eq!(compass(22.5), "NNE");
    assert_eq!(compass(67.5), "ENE");
    assert_eq!(compass(112.5), "ESE");
    assert_eq!(compass(157.5), "SSE");
}

#[test]
fn test_negative_and_overflow_degrees () {
    assert_eq!(compass(-90.0), "O");
    assert_eq!(compass(-45.0), "NO");
    assert_eq!(compass(450.0), "E");
}

#[test]
fn test_always_returns_a_table_entry () {
    let table = ["N","NNE","NE","ENE","E","ESE","SE","SSE","S","SSO","OSO","O","ONO","NO","NNO"];
    let mut d = 0.0;
    while d < 360.0 {
        let label = compass(d);
        assert!(table.contains(&label), "invalid direction for {d}: {label}");
        d += 15.0;
    }
}
