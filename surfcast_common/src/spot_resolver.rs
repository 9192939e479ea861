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
//! resolves a spot or coastal-region identifier to the metadata needed to
//! locate and interpret its encoded blobs.

use sqlx::{FromRow, MySqlPool};

use crate::errors::{SurfcastResult, not_found};

#[derive(Debug, Clone, FromRow)]
pub struct SpotMetadata {
    pub litoral_id: i64,
    pub litoral_nome: String,
    pub litoral_lat: f64,
    pub litoral_lon: f64,
    pub praia_id: i64,
    pub vento_litoraneo_id: i64,
    pub orientacao: i64,
    pub nome: String,
    pub lat: f64,
    pub lon: f64,
    pub uf: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RegionMetadata {
    pub id: i64,
    pub nome: String,
    pub lat: f64,
    pub lon: f64,
    pub uf: Option<String>,
}

pub struct SpotResolver {
    pool: MySqlPool,
}

impl SpotResolver {
    pub fn new (pool: MySqlPool) -> Self {
        SpotResolver { pool }
    }

    /// resolve a surf spot by its beach id, joining the beach to its
    /// enclosing coastal region and the region's state code.
    pub async fn resolve_spot (&self, praia_id: i64) -> SurfcastResult<SpotMetadata> {
        let row = sqlx::query_as::<_, SpotMetadata>(
            "SELECT DISTINCT \
                lo.litoral_id AS litoral_id, lo.nome AS litoral_nome, lo.lat AS litoral_lat, lo.lon AS litoral_lon, \
                pr.id AS praia_id, pr.litoral_id AS vento_litoraneo_id, pr.orientacao AS orientacao, \
                pr.nome_2 AS nome, pr.lat AS lat, pr.lon AS lon, \
                (SELECT lo2.sigla FROM locais lo2 WHERE lo2.id = lo.pai) AS uf \
             FROM praias pr \
             INNER JOIN locais lo ON pr.local_id = lo.id \
             WHERE pr.id = ?",
        )
        .bind(praia_id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| not_found(format!("no spot with id {praia_id}")))
    }

    /// resolve a coastal region by its id, for requests that want the
    /// regional oceanic forecast rather than a specific surf spot.
    pub async fn resolve_region (&self, coast_id: i64) -> SurfcastResult<RegionMetadata> {
        let row = sqlx::query_as::<_, RegionMetadata>(
            "SELECT lo.id AS id, lo.nome AS nome, lo.lat AS lat, lo.lon AS lon, \
                (SELECT lo2.sigla FROM locais lo2 WHERE lo2.id = lo.pai) AS uf \
             FROM locais lo \
             WHERE lo.litoral_id = ? \
             LIMIT 1",
        )
        .bind(coast_id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| not_found(format!("no region with coast id {coast_id}")))
    }
}
