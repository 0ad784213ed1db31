//! Gateway Errors

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

use adapters_socket::{ConnectionError, FrameError, FramingError, TransportError};
use infrastructure_external_format::CodecError;
use thiserror::Error;

/// Any failure of a gateway session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Could not connect or listen
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    /// The byte stream failed
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A frame broke the size limit
    #[error(transparent)]
    Framing(#[from] FramingError),
    /// A message could not be encoded or decoded
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// The session was closed earlier
    #[error("session is closed")]
    Closed,
}

impl From<FrameError> for GatewayError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::Transport(e) => GatewayError::Transport(e),
            FrameError::Framing(e) => GatewayError::Framing(e),
        }
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::Transport(err.into())
    }
}
