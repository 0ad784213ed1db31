//! API Facades Layer
//!
//! One import for applications that talk to an Erlang message gateway. The
//! facades call into the inner layers; the term types, codec entry points
//! and error types are re-exported unchanged.
//!
//! ```no_run
//! use api_facades::{connect, Term};
//!
//! let mut session = connect("localhost", 3307)?;
//! session.send(&Term::tuple(vec![
//!     Term::atom("register_with_group"),
//!     Term::atom("time_server"),
//! ]))?;
//! let request = session.recv()?;
//! println!("{}", request);
//! session.close();
//! # Ok::<(), api_facades::GatewayError>(())
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

pub mod codec_facades;
pub mod gateway_facades;

// Re-export main facade functions
pub use codec_facades::*;
pub use gateway_facades::*;

// Re-export the types the facades work with
pub use adapters_gateway::{
    messages, GatewayError, Session, SessionConfig, SessionListener, SessionState, ShutdownHandle,
};
pub use adapters_socket::{ConnectionError, FramingError, SocketOptions, TransportError};
pub use entities_terms::{
    Atom, BigNumber, Export, Fun, IndexError, Map, OldFun, Pid, Port, Reference, Term, Tuple,
};
pub use infrastructure_external_format::{
    CodecError, CompressionLevel, DecodeOptions, EncodeOptions,
};
