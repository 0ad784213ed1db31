//! Session Listener
//!
//! The gateway side of a connection: accepts TCP connections and wraps each
//! one in a [`Session`]. Used by tests and by tools that stand in for a
//! gateway.

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

use crate::config::SessionConfig;
use crate::error::GatewayError;
use crate::session::Session;
use adapters_socket::bind_tcp;
use std::net::{SocketAddr, TcpListener};
use tracing::debug;

const LISTEN_BACKLOG: i32 = 128;

/// Listening socket producing sessions
#[derive(Debug)]
pub struct SessionListener {
    listener: TcpListener,
    config: SessionConfig,
}

impl SessionListener {
    /// Listen on `addr`; port 0 picks a free port
    pub fn bind(addr: SocketAddr, config: SessionConfig) -> Result<Self, GatewayError> {
        let listener = bind_tcp(addr, LISTEN_BACKLOG)?;
        Ok(Self { listener, config })
    }

    /// Address actually bound
    pub fn local_addr(&self) -> Result<SocketAddr, GatewayError> {
        Ok(self.listener.local_addr()?)
    }

    /// Wait for the next connection
    pub fn accept(&self) -> Result<(Session, SocketAddr), GatewayError> {
        let (stream, peer) = self.listener.accept()?;
        debug!(%peer, "connection accepted");
        let session = Session::from_stream(stream, self.config)?;
        Ok((session, peer))
    }
}
