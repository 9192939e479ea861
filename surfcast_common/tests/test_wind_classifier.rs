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

/// unit tests for onshore/offshore/crossed wind classification
/// run with "cargo test --test test_wind_classifier -- --nocapture"

use surfcast_common::wind_classifier::{classify, WindType};

#[test]
fn test_offshore_directly_opposed () {
    println!("--- testing wind classification");
    assert_eq!(classify(90.0, 270.0), WindType::Offshore);
    assert_eq!(classify(0.0, 180.0), WindType::Offshore);
}

#[test]
fn test_onshore_same_direction () {
    assert_eq!(classify(90.0, 90.0), WindType::Onshore);
    assert_eq!(classify(0.0, 20.0), WindType::Onshore);
}

#[test]
fn test_crossed_intermediate_angle () {
    assert_eq!(classify(90.0, 0.0), WindType::Crossed);
}

#[test]
fn test_classification_is_360_periodic () {
    assert_eq!(classify(90.0, 270.0), classify(90.0 + 360.0, 270.0));
    assert_eq!(classify(90.0, 270.0), classify(90.0, 270.0 + 360.0));
}
