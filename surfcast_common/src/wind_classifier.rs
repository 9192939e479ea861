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
//! classifies coastal wind relative to beach orientation.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WindType {
    Onshore,
    Offshore,
    Crossed,
    Oceanic,
}

/// classify wind direction relative to a beach's seaward orientation.
/// both angles are normalized to a single `(-180, 180]`-equivalent
/// difference before the distance thresholds are applied.
pub fn classify (orientation: f64, wind_from_deg: f64) -> WindType {
    let mut angle = orientation - wind_from_deg;
    if angle > 180.0 || angle < -180.0 {
        angle = if orientation < wind_from_deg {
            orientation + 360.0 - wind_from_deg
        } else {
            orientation - (wind_from_deg + 360.0)
        };
    }
    let angle = angle.abs();

    if angle > 125.0 {
        WindType::Offshore
    } else if angle >= 66.0 {
        WindType::Crossed
    } else {
        WindType::Onshore
    }
}
