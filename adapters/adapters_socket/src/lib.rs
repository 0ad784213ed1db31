//! Adapters Layer: Sockets and Framing
//!
//! Provides the byte-stream side of a gateway connection.
//!
//! ## Overview
//!
//! The `adapters_socket` crate provides:
//! - **TCP setup**: [`connect_tcp`] and [`bind_tcp`] built on `socket2`
//! - **Framing**: [`FramedTransport`], 4-byte big-endian length-prefixed
//!   frames over any `Read + Write` stream
//! - **Errors**: [`TransportError`], [`FramingError`] and [`ConnectionError`]
//!
//! Everything is blocking I/O on OS threads; there is no runtime to set up.
//!
//! ## See Also
//!
//! - [`adapters_gateway`](../adapters_gateway/index.html): sessions that carry
//!   encoded terms in these frames

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

pub mod error;
pub mod framing;
pub mod socket;

pub use error::{ConnectionError, FrameError, FramingError, TransportError};
pub use framing::{FramedTransport, DEFAULT_MAX_FRAME_SIZE, PREFIX_SIZE};
pub use socket::{bind_tcp, connect_tcp, SocketOptions, DEFAULT_CONNECT_TIMEOUT};
