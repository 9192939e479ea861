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
//! scalar maxima across the 15-day horizon.

use crate::day_decoder::DayMatrix;
use crate::var_index::{OCEAN_VARIABLES, ATMOSPHERIC_VARIABLES, find};

fn max_int (days: &[Option<DayMatrix>], row: usize) -> i64 {
    days.iter()
        .filter_map(|d| d.as_ref())
        .flat_map(|m| (0..8).map(move |slot| m.int_at(row, slot)))
        .max()
        .unwrap_or(0)
}

/// maximum wave height (`wave_height`, scaled) across every day and slot.
pub fn max_height (oceans: &[Option<DayMatrix>]) -> f64 {
    let row = find(OCEAN_VARIABLES, "wave_height").unwrap().row;
    max_int(oceans, row) as f64 / crate::var_index::DIVISOR_FACTOR
}

/// maximum total wave energy (`total_energy`, unscaled) across every day and slot.
pub fn max_energy (oceans: &[Option<DayMatrix>]) -> i64 {
    let row = find(OCEAN_VARIABLES, "total_energy").unwrap().row;
    max_int(oceans, row)
}

/// maximum total wave power (`total_power`, scaled) across every day and slot.
pub fn max_power (oceans: &[Option<DayMatrix>]) -> f64 {
    let row = find(OCEAN_VARIABLES, "total_power").unwrap().row;
    max_int(oceans, row) as f64 / crate::var_index::DIVISOR_FACTOR
}

/// maximum wind speed (`wind`, unscaled) across every day and slot.
pub fn max_wind (atmos: &[Option<DayMatrix>]) -> i64 {
    let row = find(ATMOSPHERIC_VARIABLES, "wind").unwrap().row;
    max_int(atmos, row)
}
