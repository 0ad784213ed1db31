//! Session Module
//!
//! A [`Session`] is one TCP connection to a gateway carrying one encoded term
//! per frame.
//!
//! ## Lifecycle
//!
//! A session starts `Open` and ends `Closed`. It closes when [`Session::close`]
//! is called, and also after any failed [`send`](Session::send) or
//! [`recv`](Session::recv): once a frame has been partly read or written the
//! stream position is unknown, so the connection is not reused. Calls on a
//! closed session fail with [`GatewayError::Closed`].
//!
//! `send` and `recv` take `&mut self`; one session is driven by one thread at
//! a time. To stop a thread blocked in `recv`, close the socket from another
//! thread with a [`ShutdownHandle`].

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
use adapters_socket::{connect_tcp, FramedTransport};
use entities_terms::Term;
use infrastructure_external_format::{decode_exact_with, encode_with};
use std::io::ErrorKind;
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Usable
    Open,
    /// Closed explicitly or after an error
    Closed,
}

/// Connection to a gateway
#[derive(Debug)]
pub struct Session {
    transport: FramedTransport<TcpStream>,
    config: SessionConfig,
    state: SessionState,
    peer: Option<SocketAddr>,
}

impl Session {
    /// Connect to a gateway with the default configuration
    pub fn connect(host: &str, port: u16) -> Result<Self, GatewayError> {
        Self::connect_with(host, port, SessionConfig::default())
    }

    /// Connect to a gateway
    ///
    /// # Arguments
    /// * `host` - Gateway host name or address
    /// * `port` - Gateway port
    /// * `config` - Socket, framing and codec settings
    ///
    /// # Returns
    /// * `Ok(Session)` - Open session
    /// * `Err(GatewayError::Connection(_))` - Refused, timed out or not resolvable
    pub fn connect_with(
        host: &str,
        port: u16,
        config: SessionConfig,
    ) -> Result<Self, GatewayError> {
        let stream = connect_tcp(host, port, config.get_socket_options())?;
        let session = Self::new(stream, config);
        debug!(host, port, peer = ?session.peer, "session opened");
        Ok(session)
    }

    /// Wrap an already connected stream, applying the configured socket options
    pub fn from_stream(stream: TcpStream, config: SessionConfig) -> Result<Self, GatewayError> {
        config.get_socket_options().apply(&stream)?;
        Ok(Self::new(stream, config))
    }

    fn new(stream: TcpStream, config: SessionConfig) -> Self {
        let peer = stream.peer_addr().ok();
        Self {
            transport: FramedTransport::with_max_frame_size(stream, config.get_max_frame_size()),
            config,
            state: SessionState::Open,
            peer,
        }
    }

    /// Send one term
    ///
    /// Returns once the whole frame has been written to the socket.
    pub fn send(&mut self, term: &Term) -> Result<(), GatewayError> {
        self.ensure_open()?;
        let result = encode_with(term, self.config.get_encode_options())
            .map_err(GatewayError::from)
            .and_then(|bytes| {
                self.transport.write_frame(&bytes)?;
                trace!(bytes = bytes.len(), "term sent");
                Ok(())
            });
        self.close_on_error(result)
    }

    /// Receive one term
    ///
    /// Blocks until a whole frame has arrived. Terms come back in the order
    /// the peer sent them, one per call.
    pub fn recv(&mut self) -> Result<Term, GatewayError> {
        self.ensure_open()?;
        let decode_options = *self.config.get_decode_options();
        let result = self
            .transport
            .read_frame()
            .map_err(GatewayError::from)
            .and_then(|frame| {
                trace!(bytes = frame.len(), "term received");
                Ok(decode_exact_with(&frame, &decode_options)?)
            });
        self.close_on_error(result)
    }

    /// Close the connection in both directions
    ///
    /// Closing a closed session does nothing.
    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        self.state = SessionState::Closed;
        shutdown_stream(self.transport.get_ref());
        debug!(peer = ?self.peer, "session closed");
    }

    /// Handle that can close this session's socket from another thread
    pub fn shutdown_handle(&self) -> Result<ShutdownHandle, GatewayError> {
        let stream = self.transport.get_ref().try_clone()?;
        Ok(ShutdownHandle { stream: Arc::new(stream) })
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session is still usable
    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    /// Remote address, if known
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.peer
    }

    /// Local address of the connection
    pub fn local_addr(&self) -> Result<SocketAddr, GatewayError> {
        Ok(self.transport.get_ref().local_addr()?)
    }

    /// The configuration the session was opened with
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn ensure_open(&self) -> Result<(), GatewayError> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::Closed => Err(GatewayError::Closed),
        }
    }

    fn close_on_error<T>(&mut self, result: Result<T, GatewayError>) -> Result<T, GatewayError> {
        if let Err(e) = &result {
            warn!(peer = ?self.peer, error = %e, "closing session after error");
            self.close();
        }
        result
    }
}

/// Cloneable handle that shuts down a session's socket
///
/// A `recv` blocked in another thread returns with a
/// [`TransportError`](adapters_socket::TransportError) once the socket is shut down.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    stream: Arc<TcpStream>,
}

impl ShutdownHandle {
    /// Shut the socket down in both directions
    pub fn shutdown(&self) {
        shutdown_stream(&self.stream);
        debug!("session shut down from handle");
    }
}

fn shutdown_stream(stream: &TcpStream) {
    match stream.shutdown(Shutdown::Both) {
        Ok(()) => {}
        // Already closed by the peer
        Err(e) if e.kind() == ErrorKind::NotConnected => {}
        Err(e) => debug!(error = %e, "socket shutdown failed"),
    }
}
