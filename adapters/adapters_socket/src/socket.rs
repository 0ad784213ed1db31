//! Socket Module
//!
//! TCP connection setup using the `socket2` crate: name resolution, connect
//! with a timeout, and the socket options a long-lived gateway connection
//! wants. The result is a plain blocking `std::net::TcpStream`.

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

use crate::error::ConnectionError;
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing::debug;

/// Default connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Options applied to every connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketOptions {
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
    nodelay: bool,
    keepalive: bool,
}

impl Default for SocketOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            read_timeout: None,
            write_timeout: None,
            nodelay: true,
            keepalive: true,
        }
    }
}

impl SocketOptions {
    /// Default options: 10 s connect timeout, blocking reads and writes,
    /// `TCP_NODELAY` and keepalive on
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect timeout; `None` waits as long as the OS does
    pub fn connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Read timeout; `None` blocks until data arrives
    pub fn read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Write timeout; `None` blocks until the write completes
    pub fn write_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Disable Nagle's algorithm
    pub fn nodelay(mut self, enabled: bool) -> Self {
        self.nodelay = enabled;
        self
    }

    /// Enable TCP keepalive probes
    pub fn keepalive(mut self, enabled: bool) -> Self {
        self.keepalive = enabled;
        self
    }

    /// Configured connect timeout
    pub fn get_connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Apply the per-stream options to a connected or accepted stream
    pub fn apply(&self, stream: &TcpStream) -> std::io::Result<()> {
        let socket = socket2::SockRef::from(stream);
        socket.set_nodelay(self.nodelay)?;
        socket.set_keepalive(self.keepalive)?;
        socket.set_read_timeout(self.read_timeout)?;
        socket.set_write_timeout(self.write_timeout)?;
        Ok(())
    }
}

/// Connect to `host:port`
///
/// Resolves the host and tries each address in turn, returning the first
/// connection that succeeds or the error from the last attempt.
///
/// # Arguments
/// * `host` - Host name or IP address
/// * `port` - TCP port
/// * `options` - Timeouts and socket options
///
/// # Returns
/// * `Ok(TcpStream)` - Connected blocking stream with the options applied
/// * `Err(ConnectionError)` - Resolution or connection failure
pub fn connect_tcp(
    host: &str,
    port: u16,
    options: &SocketOptions,
) -> Result<TcpStream, ConnectionError> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| ConnectionError::Resolve { host: host.to_string(), message: e.to_string() })?
        .collect();
    if addrs.is_empty() {
        return Err(ConnectionError::Resolve {
            host: host.to_string(),
            message: "no addresses found".to_string(),
        });
    }

    let mut last_error = None;
    for addr in addrs {
        debug!(%addr, "connecting");
        match connect_addr(addr, options) {
            Ok(stream) => {
                debug!(%addr, "connected");
                return Ok(stream);
            }
            Err(e) => {
                debug!(%addr, error = %e, "connect attempt failed");
                last_error = Some(e);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| ConnectionError::Resolve {
        host: host.to_string(),
        message: "no addresses found".to_string(),
    }))
}

fn connect_addr(addr: SocketAddr, options: &SocketOptions) -> Result<TcpStream, ConnectionError> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
        .map_err(|e| ConnectionError::from_io(addr, e))?;
    let target = SockAddr::from(addr);
    match options.connect_timeout {
        Some(timeout) => socket.connect_timeout(&target, timeout),
        None => socket.connect(&target),
    }
    .map_err(|e| ConnectionError::from_io(addr, e))?;

    let stream = TcpStream::from(socket);
    options.apply(&stream).map_err(|e| ConnectionError::from_io(addr, e))?;
    Ok(stream)
}

/// Listen on `addr`
///
/// Address reuse is enabled so a restarted listener can rebind at once.
/// Port 0 picks a free port; read it back with `local_addr`.
pub fn bind_tcp(addr: SocketAddr, backlog: i32) -> Result<TcpListener, ConnectionError> {
    let bind_error = |e: std::io::Error| ConnectionError::Bind { addr, message: e.to_string() };
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))
        .map_err(bind_error)?;
    socket.set_reuse_address(true).map_err(bind_error)?;
    socket.bind(&SockAddr::from(addr)).map_err(bind_error)?;
    socket.listen(backlog).map_err(bind_error)?;
    let listener = TcpListener::from(socket);
    debug!(addr = ?listener.local_addr().ok(), "listening");
    Ok(listener)
}
