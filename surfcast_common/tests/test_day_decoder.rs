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

/// unit tests for day-blob and tide decoding
/// run with "cargo test --test test_day_decoder -- --nocapture"

use surfcast_common::day_decoder::{decode, decode_tides};

#[test]
fn test_decode_splits_rows_and_slots () {
    println!("--- testing day-blob decode");
    let m = decode("10:12:14:16:18:20:22:24;100:90:80:70:60:50:40:30").unwrap();
    assert_eq!(m.row_count(), 2);
    assert_eq!(m.int_at(0, 0), 10);
    assert_eq!(m.int_at(0, 7), 24);
    assert_eq!(m.int_at(1, 0), 100);
}

#[test]
fn test_decode_empty_returns_none () {
    assert!(decode("").is_none());
    assert!(decode("   ").is_none());
}

#[test]
fn test_scaled_at_divides_by_ten () {
    let m = decode("15:14:13:12:11:10:9:8").unwrap();
    assert_eq!(m.scaled_at(0, 0), 1.5);
    assert_eq!(m.scaled_at(0, 7), 0.8);
}

#[test]
fn test_missing_cell_defaults_to_zero () {
    let m = decode("1:2:3").unwrap();
    assert_eq!(m.int_at(0, 7), 0);
    assert_eq!(m.int_at(5, 0), 0);
}

#[test]
fn test_decode_tides_single_entry () {
    println!("--- testing tide decode");
    let tides = decode_tides("050015");
    assert_eq!(tides.len(), 1);
    assert_eq!(tides[0].time, "05:00");
    assert_eq!(tides[0].height, "1.5");
}

#[test]
fn test_decode_tides_multiple_entries () {
    let tides = decode_tides("050015113008");
    assert_eq!(tides.len(), 2);
    assert_eq!(tides[0].time, "05:00");
    assert_eq!(tides[0].height, "1.5");
    assert_eq!(tides[1].time, "11:30");
    assert_eq!(tides[1].height, "0.8");
}

#[test]
fn test_decode_tides_short_string_is_empty () {
    assert_eq!(decode_tides("123"), vec![]);
    assert_eq!(decode_tides(""), vec![]);
}

#[test]
fn test_decode_tides_ignores_trailing_malformed_run () {
    let tides = decode_tides("0500151");
    assert_eq!(tides.len(), 1);
}
