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
//! projects a single (day, slot) out of the decoded matrices into the
//! wave/wind/atmospheric shape of the response document.

use serde::Serialize;
use crate::day_decoder::DayMatrix;
use crate::direction::compass;
use crate::var_index::{OCEAN_VARIABLES, BEACH_VARIABLES, ATMOSPHERIC_VARIABLES, find};
use crate::wind_classifier::{self, WindType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastMode {
    Surf,
    Oceanic,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaveChannel {
    pub value: f64,
    pub period: f64,
    pub direction: String,
    #[serde(rename = "directionDegree")]
    pub direction_degree: i64,
    pub power: f64,
    pub energy: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Waves {
    #[serde(rename = "totalHeight")]
    pub total_height: WaveChannel,
    pub windseas: WaveChannel,
    #[serde(rename = "swellA")]
    pub swell_a: WaveChannel,
    #[serde(rename = "swellB")]
    pub swell_b: WaveChannel,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoastWind {
    #[serde(rename = "directionDegree")]
    pub direction_degree: i64,
    pub direction: String,
    pub wind: i64,
    #[serde(rename = "windGust")]
    pub wind_gust: i64,
    pub pressure: String,
    #[serde(rename = "type")]
    pub wind_type: WindType,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeaWind {
    pub wind: i64,
    pub direction: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Winds {
    pub coast: CoastWind,
    pub sea: SeaWind,
}

#[derive(Debug, Clone, Serialize)]
pub struct Atmospheric {
    pub pressure: i64,
    pub temperature: i64,
    pub clouds: i64,
    pub precipitation: i64,
    #[serde(rename = "stormPotential")]
    pub storm_potential: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hour {
    pub hour: String,
    pub waves: Waves,
    pub winds: Winds,
    pub atmospheric: Atmospheric,
}

fn row (name: &str) -> usize {
    find(OCEAN_VARIABLES, name).map(|v| v.row).unwrap_or(0)
}

fn brow (name: &str) -> usize {
    find(BEACH_VARIABLES, name).map(|v| v.row).unwrap_or(0)
}

fn arow (name: &str) -> usize {
    find(ATMOSPHERIC_VARIABLES, name).map(|v| v.row).unwrap_or(0)
}

/// a wave channel whose height may be overridden by the beach overlay, falling
/// through to the oceanic height when the overlay has no row for this channel.
fn wave_channel (
    ocean: Option<&DayMatrix>,
    beach: Option<&DayMatrix>,
    slot: usize,
    height_row: &str,
    beach_row_idx: usize,
    period_row: &str,
    direction_row: &str,
    energy_row: &str,
    power_row: &str,
) -> WaveChannel {
    let value = match beach.filter(|b| b.row_count() > beach_row_idx) {
        Some(b) => b.scaled_at(beach_row_idx, slot),
        None => ocean.map(|m| m.scaled_at(row(height_row), slot)).unwrap_or(0.0),
    };
    let period = ocean.map(|m| m.scaled_at(row(period_row), slot)).unwrap_or(0.0);
    let direction_degree = ocean.map(|m| m.int_at(row(direction_row), slot)).unwrap_or(0);
    let energy = ocean.map(|m| m.int_at(row(energy_row), slot)).unwrap_or(0);
    let power = ocean.map(|m| m.scaled_at(row(power_row), slot)).unwrap_or(0.0);

    WaveChannel {
        value,
        period,
        direction: compass(direction_degree as f64).to_string(),
        direction_degree,
        power,
        energy,
    }
}

pub fn build (
    ocean: Option<&DayMatrix>,
    beach: Option<&DayMatrix>,
    atmos: Option<&DayMatrix>,
    slot: usize,
    mode: ForecastMode,
    orientation: Option<i64>,
) -> Hour {
    let hour_label = format!("{:02}:00", crate::var_index::TIME_HOURS[slot]);

    let waves = Waves {
        total_height: wave_channel(ocean, beach, slot, "wave_height", brow("total_height"), "wave_period", "primary_direction", "total_energy", "total_power"),
        windseas: wave_channel(ocean, beach, slot, "windseas_height", brow("windseas_height"), "windseas_period", "windseas_direction", "windseas_energy", "windseas_power"),
        swell_a: wave_channel(ocean, beach, slot, "swell_a_height", brow("primary_swell_height"), "swell_a_period", "swell_a_direction", "swell_a_energy", "swell_a_power"),
        swell_b: wave_channel(ocean, beach, slot, "swell_b_height", brow("secondary_swell_height"), "swell_b_period", "swell_b_direction", "swell_b_energy", "swell_b_power"),
    };

    let coast_wind_direction = atmos.map(|m| m.int_at(arow("wind_direction"), slot)).unwrap_or(0);
    let coast_wind = atmos.map(|m| m.int_at(arow("wind"), slot)).unwrap_or(0);
    let wind_type = match (mode, orientation, atmos) {
        (ForecastMode::Surf, Some(o), Some(_)) => wind_classifier::classify(o as f64, coast_wind_direction as f64),
        _ => WindType::Oceanic,
    };

    let winds = Winds {
        coast: CoastWind {
            direction_degree: coast_wind_direction,
            direction: compass(coast_wind_direction as f64).to_string(),
            wind: coast_wind,
            wind_gust: atmos.map(|m| m.int_at(arow("wind_gust"), slot)).unwrap_or(0),
            pressure: atmos.map(|m| m.int_at(arow("pressure"), slot)).unwrap_or(0).to_string(),
            wind_type,
        },
        sea: {
            // intentionally always slot 0, regardless of the hour being built
            let sea_wind = ocean.map(|m| m.int_at(row("sea_wind"), 0)).unwrap_or(0);
            let sea_dir = ocean.map(|m| m.int_at(row("sea_wind_direction"), 0)).unwrap_or(0);
            SeaWind {
                wind: sea_wind,
                direction: sea_dir,
            }
        },
    };

    let atmospheric = Atmospheric {
        pressure: atmos.map(|m| m.int_at(arow("pressure"), slot)).unwrap_or(0),
        temperature: atmos.map(|m| m.int_at(arow("temperature"), slot)).unwrap_or(0),
        clouds: atmos.map(|m| m.int_at(arow("clouds"), slot)).unwrap_or(0),
        precipitation: atmos.map(|m| m.int_at(arow("precipitation"), slot)).unwrap_or(0),
        storm_potential: atmos.map(|m| m.int_at(arow("storm_potential"), slot)).unwrap_or(0),
    };

    Hour { hour: hour_label, waves, winds, atmospheric }
}
