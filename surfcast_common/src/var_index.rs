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
//! static field layout of the encoded day-blob formats.
//!
//! Each layer (oceanic, beach overlay, atmospheric) is a fixed list of
//! variable rows. A row either carries raw integers or values that have
//! been multiplied by 10 upstream and must be divided back down.

pub const TIME_HOURS: [u32; 8] = [0, 3, 6, 9, 12, 15, 18, 21];
pub const DIVISOR_FACTOR: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarSlot {
    pub name: &'static str,
    pub row: usize,
    pub scaled: bool,
}

macro_rules! var_table {
    ($name:ident => $(($field:expr, $row:expr, $scaled:expr)),+ $(,)?) => {
        pub const $name: &[VarSlot] = &[
            $( VarSlot { name: $field, row: $row, scaled: $scaled } ),+
        ];
    };
}

var_table!(OCEAN_VARIABLES =>
    ("wave_height", 0, true),
    ("wave_period", 1, true),
    ("primary_direction", 2, false),
    ("total_energy", 3, false),
    ("total_power", 4, true),
    ("windseas_height", 5, true),
    ("windseas_period", 6, true),
    ("windseas_direction", 7, false),
    ("windseas_energy", 8, false),
    ("windseas_power", 9, true),
    ("swell_a_height", 10, true),
    ("swell_a_period", 11, true),
    ("swell_a_direction", 12, false),
    ("swell_a_energy", 13, false),
    ("swell_a_power", 14, true),
    ("swell_b_height", 15, true),
    ("swell_b_period", 16, true),
    ("swell_b_direction", 17, false),
    ("swell_b_energy", 18, false),
    ("swell_b_power", 19, true),
    ("sea_wind", 20, false),
    ("sea_wind_direction", 21, false),
    ("unused", 22, false),
    ("tides", 23, false),
);

var_table!(BEACH_VARIABLES =>
    ("total_height", 0, true),
    ("windseas_height", 1, true),
    ("primary_swell_height", 2, true),
    ("secondary_swell_height", 3, true),
);

var_table!(ATMOSPHERIC_VARIABLES =>
    ("wind", 0, false),
    ("wind_direction", 1, false),
    ("wind_gust", 2, false),
    ("storm_potential", 3, false),
    ("pressure", 4, false),
    ("temperature", 5, false),
    ("clouds", 6, false),
    ("precipitation", 7, false),
);

pub fn find<'a> (table: &'a [VarSlot], name: &str) -> Option<&'a VarSlot> {
    table.iter().find(|v| v.name == name)
}
