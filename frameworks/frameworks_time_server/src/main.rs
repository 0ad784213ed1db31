//! time_server Binary Entry Point
//!
//! # Usage
//!
//! ```bash
//! # Gateway on localhost:3307
//! time_server
//!
//! # Another gateway, with protocol logging
//! GATEWAY_HOST=gw.local time_server --port 4000 --log-level debug
//! ```

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

use adapters_gateway::Session;
use anyhow::Context;
use clap::Parser;
use frameworks_time_server::{local_timestamp, serve, TimeServerArgs};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = TimeServerArgs::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    info!(host = %args.host, port = args.port, group = %args.group, "time_server starting");

    let result = Session::connect_with(&args.host, args.port, args.session_config())
        .with_context(|| format!("connecting to gateway at {}:{}", args.host, args.port))
        .and_then(|mut session| {
            let served = serve(&mut session, &args.group, local_timestamp);
            session.close();
            served.context("serving requests")
        });

    match result {
        Ok(replies) => {
            info!(replies, "time_server stopped");
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            Err(e)
        }
    }
}
