//! Adapters Layer: Gateway Sessions
//!
//! Connects to an Erlang message gateway and exchanges terms with it. Each
//! message travels as one length-prefixed frame holding one term in external
//! term format.
//!
//! ## Overview
//!
//! - **[`session`](session/index.html)**: [`Session`] with `connect`, `send`,
//!   `recv`, `close` and a [`ShutdownHandle`] for cross-thread shutdown
//! - **[`listener`](listener/index.html)**: [`SessionListener`], the accepting side
//! - **[`messages`](messages/index.html)**: `register_with_group` and tag checks
//! - **[`config`](config/index.html)**: [`SessionConfig`]
//!
//! ## Examples
//!
//! ```rust,no_run
//! use adapters_gateway::{messages, Session};
//! use entities_terms::Term;
//!
//! # fn main() -> Result<(), adapters_gateway::GatewayError> {
//! let mut session = Session::connect("localhost", 3307)?;
//! session.send(&messages::register_with_group("time_server"))?;
//! let mut request = session.recv()?;
//! if let Some(tuple) = request.as_tuple_mut() {
//!     tuple.set(0, Term::atom("response")).ok();
//! }
//! session.send(&request)?;
//! session.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## See Also
//!
//! - [`adapters_socket`](../adapters_socket/index.html): framing and TCP setup
//! - [`infrastructure_external_format`](../infrastructure_external_format/index.html): the codec

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

pub mod config;
pub mod error;
pub mod listener;
pub mod messages;
pub mod session;

pub use config::{SessionConfig, DEFAULT_GATEWAY_PORT};
pub use error::GatewayError;
pub use listener::SessionListener;
pub use session::{Session, SessionState, ShutdownHandle};
