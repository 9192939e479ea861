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
//! orchestrates the full 15-day decode and builds the response document.

use chrono::{NaiveDate, Duration, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::aggregator;
use crate::day_decoder::{self, DayMatrix, TideEntry};
use crate::hour_view::{self, ForecastMode};
use crate::is_none;

const HORIZON_DAYS: usize = 15;

/// a parsed encoded location file: a `{ano, mes, dia, v0..v14[, s0..s14]}`
/// JSON object, accessed by day index rather than deserialized field-by-field
/// since the field set is sparse and positional.
pub struct LocationFile<'a> {
    value: &'a Value,
}

impl<'a> LocationFile<'a> {
    pub fn new (value: &'a Value) -> Self {
        LocationFile { value }
    }

    pub fn raw_date (&self) -> Option<(String, String, String)> {
        let ano = self.value.get("ano")?.as_str()?.to_string();
        let mes = self.value.get("mes")?.as_str()?.to_string();
        let dia = self.value.get("dia")?.as_str()?.to_string();
        Some((ano, mes, dia))
    }

    pub fn base_date (&self) -> NaiveDate {
        self.raw_date()
            .and_then(|(ano, mes, dia)| {
                let y: i32 = ano.trim().parse().ok()?;
                let m: u32 = mes.trim().parse().ok()?;
                let d: u32 = dia.trim().parse().ok()?;
                NaiveDate::from_ymd_opt(y, m, d)
            })
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    fn blob (&self, prefix: char, day: usize) -> Option<&str> {
        self.value.get(format!("{prefix}{day}").as_str())?.as_str()
    }

    pub fn day_blob (&self, day: usize) -> Option<&str> {
        self.blob('v', day)
    }

    pub fn overlay_blob (&self, day: usize) -> Option<&str> {
        self.blob('s', day)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Day {
    pub day: String,
    pub tides: Vec<TideEntry>,
    pub hours: Vec<hour_view::Hour>,
}

impl Serialize for TideEntry {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("TideEntry", 2)?;
        s.serialize_field("time", &self.time)?;
        s.serialize_field("height", &self.height)?;
        s.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastBody {
    #[serde(rename = "maxHeight")]
    pub max_height: f64,
    #[serde(rename = "maxEnergy")]
    pub max_energy: i64,
    #[serde(rename = "maxPower")]
    pub max_power: f64,
    #[serde(rename = "maxWind")]
    pub max_wind: i64,
    #[serde(rename = "forecastMapUrl", skip_serializing_if = "is_none")]
    pub forecast_map_url: Option<String>,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastDocument {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub forecast_type: String,
    pub name: String,
    pub orientation: i64,
    pub forecast: ForecastBody,
}

pub struct SpotContext {
    pub id: String,
    pub name: String,
    pub orientation: Option<i64>,
    pub mode: ForecastMode,
    pub forecast_map_url: Option<String>,
}

/// build the full response document from already-fetched, already-parsed
/// location files. `atmospheric` may be absent entirely (surf and regional
/// requests both tolerate a missing atmospheric layer).
pub fn build_forecast (
    ctx: &SpotContext,
    atmospheric: Option<&Value>,
    oceanic: &Value,
    beach: Option<&Value>,
) -> ForecastDocument {
    let ocean_file = LocationFile::new(oceanic);
    let atmos_file = atmospheric.map(LocationFile::new);
    let beach_file = beach.map(LocationFile::new);

    let base_date = ocean_file.base_date();
    // the top-level date is the numeric ano-mes-dia with no zero-padding, unlike
    // the per-day ISO dates below - this asymmetry matches existing clients.
    let top_level_date = format!("{}-{}-{}", base_date.format("%Y"), base_date.format("%-m"), base_date.format("%-d"));

    let mut ocean_matrices: Vec<Option<DayMatrix>> = Vec::with_capacity(HORIZON_DAYS);
    let mut atmos_matrices: Vec<Option<DayMatrix>> = Vec::with_capacity(HORIZON_DAYS);
    let mut days = Vec::with_capacity(HORIZON_DAYS);

    for n in 0..HORIZON_DAYS {
        let ocean_blob = ocean_file.day_blob(n);
        let ocean_matrix = ocean_blob.and_then(day_decoder::decode);
        let beach_matrix = beach_file.as_ref().and_then(|f| f.overlay_blob(n)).and_then(day_decoder::decode);
        let atmos_matrix = atmos_file.as_ref().and_then(|f| f.day_blob(n)).and_then(day_decoder::decode);

        let date = base_date + Duration::days(n as i64);
        let date_str = date.format("%Y-%m-%d").to_string();

        let hours = match &ocean_matrix {
            None => Vec::new(),
            Some(om) => (0..8)
                .map(|slot| hour_view::build(Some(om), beach_matrix.as_ref(), atmos_matrix.as_ref(), slot, ctx.mode, ctx.orientation))
                .collect(),
        };

        let tides = if n == 0 {
            let tides_row = crate::var_index::find(crate::var_index::OCEAN_VARIABLES, "tides").unwrap().row;
            ocean_matrix
                .as_ref()
                .map(|m| m.cell(tides_row, 0).map(day_decoder::decode_tides).unwrap_or_default())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        atmos_matrices.push(atmos_matrix);
        ocean_matrices.push(ocean_matrix);
        days.push(Day { day: date_str, tides, hours });
    }

    let forecast = ForecastBody {
        max_height: aggregator::max_height(&ocean_matrices),
        max_energy: aggregator::max_energy(&ocean_matrices),
        max_power: aggregator::max_power(&ocean_matrices),
        max_wind: aggregator::max_wind(&atmos_matrices),
        forecast_map_url: ctx.forecast_map_url.clone(),
        days,
    };

    ForecastDocument {
        id: ctx.id.clone(),
        date: top_level_date,
        forecast_type: match ctx.mode { ForecastMode::Surf => "SURF".to_string(), ForecastMode::Oceanic => "OCEANIC".to_string() },
        name: ctx.name.clone(),
        orientation: ctx.orientation.unwrap_or(0),
        forecast,
    }
}
