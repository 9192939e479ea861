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
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use surfcast_common::assembler::{self, SpotContext};
use surfcast_common::errors::{bad_request, not_found};
use surfcast_common::hour_view::ForecastMode;

use crate::http_error::ApiError;
use crate::state::AppState;

const APP_NAME: &str = "wave-prediction-service";

pub fn router (state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/forecast", get(forecast))
        .route("/locations", get(unimplemented_route))
        .route("/geolocation/nearest-spots", get(unimplemented_route))
        .route("/geolocation/search", get(unimplemented_route))
        .with_state(state)
}

async fn health (State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "application": APP_NAME,
        "message": "OK",
        "region": state.config.aws_region,
    }))
}

async fn unimplemented_route () -> ApiError {
    ApiError(not_found("not implemented in this service"))
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub praia_id: Option<String>,
    #[serde(rename = "coastId")]
    pub coast_id: Option<String>,
}

async fn forecast (
    State(state): State<AppState>,
    Query(q): Query<ForecastQuery>,
) -> Result<Json<Value>, ApiError> {
    let resolver = state.spot_resolver();

    let doc = if let Some(raw) = q.praia_id {
        let praia_id: i64 = raw.trim().parse().map_err(|_| bad_request("praia_id must be an integer"))?;
        let spot = resolver.resolve_spot(praia_id).await?;

        let oceanic_key = format!("oceanos/praia{praia_id}.json");
        let atmos_key = format!("atmos/atmos{}pro.json", spot.vento_litoraneo_id);

        let oceanic = state.blob_client.fetch_json(&state.config.s3_bucket, &oceanic_key).await?
            .ok_or_else(|| not_found(format!("no oceanic data for spot {praia_id}")))?;
        let atmos = state.blob_client.fetch_json(&state.config.s3_bucket, &atmos_key).await?;

        let ctx = SpotContext {
            id: spot.praia_id.to_string(),
            name: spot.nome.clone(),
            orientation: Some(spot.orientacao),
            mode: ForecastMode::Surf,
            forecast_map_url: None,
        };

        // the beach-specific file carries both the oceanic v-blobs and its own
        // s-blob overlay, so the same fetched value serves as both arguments.
        assembler::build_forecast(&ctx, atmos.as_ref(), &oceanic, Some(&oceanic))
    } else if let Some(raw) = q.coast_id {
        let coast_id: i64 = raw.trim().parse().map_err(|_| bad_request("coastId must be an integer"))?;
        let region = resolver.resolve_region(coast_id).await?;

        let oceanic_key = format!("oceanos/oceano{coast_id}.json");
        let atmos_key = format!("atmos/atmos{coast_id}pro.json");

        let oceanic = state.blob_client.fetch_json(&state.config.s3_bucket, &oceanic_key).await?
            .ok_or_else(|| not_found(format!("no oceanic data for coast {coast_id}")))?;
        let atmos = state.blob_client.fetch_json(&state.config.s3_bucket, &atmos_key).await?;

        let ctx = SpotContext {
            id: region.id.to_string(),
            name: region.nome.clone(),
            orientation: None,
            mode: ForecastMode::Oceanic,
            forecast_map_url: None,
        };

        assembler::build_forecast(&ctx, atmos.as_ref(), &oceanic, None)
    } else {
        return Err(bad_request("one of praia_id or coastId is required").into());
    };

    Ok(Json(serde_json::to_value(doc).map_err(|e| surfcast_common::errors::op_failed(e))?))
}
