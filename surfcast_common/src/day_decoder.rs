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
//! splits an encoded day-blob into a `[variable][slot]` matrix, and
//! decodes the packed tide substring carried in the tides row.

#[derive(Debug, Clone)]
pub struct DayMatrix {
    rows: Vec<Vec<String>>,
}

impl DayMatrix {
    pub fn row_count (&self) -> usize {
        self.rows.len()
    }

    /// the raw string cell at (row, slot), or None if either index is out of range.
    pub fn cell (&self, row: usize, slot: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(slot)).map(|s| s.as_str())
    }

    /// lenient integer projection: defaults to 0 on a missing cell or a parse failure.
    pub fn int_at (&self, row: usize, slot: usize) -> i64 {
        match self.cell(row, slot) {
            None => {
                tracing::warn!(row, slot, "missing cell, defaulting to 0");
                0
            }
            Some(s) => s.trim().parse::<i64>().unwrap_or_else(|_| {
                tracing::warn!(row, slot, cell = s, "non-integer cell, defaulting to 0");
                0
            }),
        }
    }

    /// lenient scaled-float projection: defaults to 0.0 on a missing cell or a parse failure.
    pub fn scaled_at (&self, row: usize, slot: usize) -> f64 {
        self.int_at(row, slot) as f64 / crate::var_index::DIVISOR_FACTOR
    }
}

/// decode a semicolon/colon-delimited day-blob. Returns None for empty input;
/// rows with fewer than 8 slots are kept as-is (shorter reads fall back to
/// defaults at projection time, not at decode time).
pub fn decode (day_blob: &str) -> Option<DayMatrix> {
    if day_blob.trim().is_empty() {
        tracing::warn!("empty day-blob, treating day as absent");
        return None;
    }
    let rows = day_blob
        .split(';')
        .map(|row| row.split(':').map(|s| s.to_string()).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    Some(DayMatrix { rows })
}

#[derive(Debug, Clone, PartialEq)]
pub struct TideEntry {
    pub time: String,
    pub height: String,
}

/// decode the packed tide substring: fixed 6-char `HHMMDd` groups.
/// a trailing run shorter than 6 characters is ignored.
pub fn decode_tides (raw: &str) -> Vec<TideEntry> {
    let chars: Vec<char> = raw.chars().collect();
    let mut tides = Vec::new();
    let mut i = 0;
    while i + 6 <= chars.len() {
        let hh: String = chars[i..i + 2].iter().collect();
        let mm: String = chars[i + 2..i + 4].iter().collect();
        let d: char = chars[i + 4];
        let dd: char = chars[i + 5];
        tides.push(TideEntry {
            time: format!("{}:{}", hh, mm),
            height: format!("{}.{}", d, dd),
        });
        i += 6;
    }
    if i < chars.len() {
        let trailing: String = chars[i..].iter().collect();
        tracing::warn!(trailing, "short trailing tide group, ignoring");
    }
    tides
}
