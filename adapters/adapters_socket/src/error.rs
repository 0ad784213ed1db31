//! Socket Errors
//!
//! Error types for connection setup and for framed reads and writes.

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

use std::io::{self, ErrorKind};
use std::net::SocketAddr;
use thiserror::Error;

/// Failures of the byte stream underneath the framing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The peer closed the stream cleanly between frames
    #[error("connection closed by peer")]
    Closed,
    /// The stream ended part way through a frame
    #[error("unexpected end of stream: expected {expected} bytes, received {received}")]
    UnexpectedEof {
        /// Bytes the frame part needed
        expected: usize,
        /// Bytes that arrived before the stream ended
        received: usize,
    },
    /// Connection reset
    #[error("connection reset")]
    ConnectionReset,
    /// Connection aborted
    #[error("connection aborted")]
    ConnectionAborted,
    /// Write to a closed connection
    #[error("broken pipe")]
    BrokenPipe,
    /// A read or write timeout expired
    #[error("timed out")]
    TimedOut,
    /// Any other I/O error
    #[error("i/o error ({kind:?}): {message}")]
    Io {
        /// Error kind reported by the OS
        kind: ErrorKind,
        /// Error text
        message: String,
    },
}

impl From<io::Error> for TransportError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::ConnectionReset => TransportError::ConnectionReset,
            ErrorKind::ConnectionAborted => TransportError::ConnectionAborted,
            ErrorKind::BrokenPipe => TransportError::BrokenPipe,
            // Socket read timeouts surface as WouldBlock on Unix
            ErrorKind::TimedOut | ErrorKind::WouldBlock => TransportError::TimedOut,
            kind => TransportError::Io { kind, message: err.to_string() },
        }
    }
}

/// Frames that break the size contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramingError {
    /// Frame length above the configured maximum
    #[error("frame of {length} bytes exceeds maximum of {max}")]
    FrameTooLarge {
        /// Declared or requested length
        length: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Error from a framed read or write
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Stream failure
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Size contract violation
    #[error(transparent)]
    Framing(#[from] FramingError),
}

/// Failures establishing a connection or listener
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// Host name lookup failed or returned no addresses
    #[error("failed to resolve {host}: {message}")]
    Resolve {
        /// Host that was looked up
        host: String,
        /// Resolver error text
        message: String,
    },
    /// Nothing listening at the address
    #[error("connection to {addr} refused")]
    Refused {
        /// Address tried
        addr: SocketAddr,
    },
    /// Connect timeout expired
    #[error("connection to {addr} timed out")]
    TimedOut {
        /// Address tried
        addr: SocketAddr,
    },
    /// Any other failure while connecting
    #[error("connection to {addr} failed: {message}")]
    Failed {
        /// Address tried
        addr: SocketAddr,
        /// Error kind reported by the OS
        kind: ErrorKind,
        /// Error text
        message: String,
    },
    /// Could not bind or listen on a local address
    #[error("failed to listen on {addr}: {message}")]
    Bind {
        /// Local address
        addr: SocketAddr,
        /// Error text
        message: String,
    },
}

impl ConnectionError {
    pub(crate) fn from_io(addr: SocketAddr, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::ConnectionRefused => ConnectionError::Refused { addr },
            ErrorKind::TimedOut | ErrorKind::WouldBlock => ConnectionError::TimedOut { addr },
            kind => ConnectionError::Failed { addr, kind, message: err.to_string() },
        }
    }
}
