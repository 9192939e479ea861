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

pub mod errors;
pub mod direction;
pub mod var_index;
pub mod day_decoder;
pub mod hour_view;
pub mod wind_classifier;
pub mod aggregator;
pub mod assembler;
pub mod spot_resolver;
pub mod blob_client;
pub mod config;

// a global fn that can be used with serde(skip_serializing_if="surfcast_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }
