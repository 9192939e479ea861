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

/// unit tests for horizon-wide maxima
/// run with "cargo test --test test_aggregator -- --nocapture"

use surfcast_common::day_decoder::decode;
use surfcast_common::aggregator::{max_height, max_energy, max_power, max_wind};

#[test]
fn test_max_height_across_days () {
    println!("--- testing max height aggregation");
    let days = vec![
        decode("10:12:14:16:18:20:22:24"),
        decode("15:17:19:21:23:25:27:29"),
        decode("5:6:7:8:9:10:11:12"),
    ];
    assert_eq!(max_height(&days), 2.9);
}

#[test]
fn test_max_energy_across_days () {
    // total_energy is row 3 of the oceanic layout
    let days = vec![
        decode("0;0;0;10:20:30:5:5:5:5:5"),
        decode("0;0;0;1:2:3:4:5:6:7:8"),
    ];
    assert_eq!(max_energy(&days), 30);
}

#[test]
fn test_max_power_scaled () {
    let days = vec![
        decode("0;0;0;0;100:90:80:70:60:50:40:30"),
    ];
    assert_eq!(max_power(&days), 10.0);
}

#[test]
fn test_max_wind_across_days () {
    let atmos = vec![
        decode("10:12:14:16:18:20:22:24;180:180:180:180:180:180:180:180"),
        decode("15:18:21:25:28:30:32:35;180:180:180:180:180:180:180:180"),
    ];
    assert_eq!(max_wind(&atmos), 35);
}

#[test]
fn test_empty_input_is_zero () {
    let none: Vec<Option<surfcast_common::day_decoder::DayMatrix>> = vec![None, None];
    assert_eq!(max_height(&none), 0.0);
    assert_eq!(max_wind(&none), 0);
}
