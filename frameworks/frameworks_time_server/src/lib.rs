//! Frameworks Layer: time_server
//!
//! A worker for an Erlang message gateway. It registers with the
//! `time_server` group and answers each routed request with the local time.
//! The binary entry point is `src/main.rs`; the logic lives here so it can be
//! tested against a stand-in gateway.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * This file is derived from work copyrighted by Ericsson AB 1996-2025.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod args;
pub mod time_service;

pub use args::TimeServerArgs;
pub use time_service::{local_timestamp, respond, serve, TIMESTAMP_FORMAT};
