//! Session Configuration
//!
//! Plain settings with builder-style setters; the defaults suit a gateway on
//! the local network.

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

use adapters_socket::{SocketOptions, DEFAULT_MAX_FRAME_SIZE};
use infrastructure_external_format::{DecodeOptions, EncodeOptions};
use std::time::Duration;

/// Default gateway port
pub const DEFAULT_GATEWAY_PORT: u16 = 3307;

/// Settings for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    socket: SocketOptions,
    max_frame_size: usize,
    encode: EncodeOptions,
    decode: DecodeOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            socket: SocketOptions::default(),
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            encode: EncodeOptions::default(),
            decode: DecodeOptions::default(),
        }
    }
}

impl SessionConfig {
    /// Default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Socket options for new connections
    pub fn socket_options(mut self, options: SocketOptions) -> Self {
        self.socket = options;
        self
    }

    /// Connect timeout; shorthand for adjusting the socket options
    pub fn connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.socket = self.socket.connect_timeout(timeout);
        self
    }

    /// Largest frame sent or accepted
    pub fn max_frame_size(mut self, size: usize) -> Self {
        self.max_frame_size = size;
        self
    }

    /// How outgoing terms are encoded
    pub fn encode_options(mut self, options: EncodeOptions) -> Self {
        self.encode = options;
        self
    }

    /// Limits for incoming terms
    pub fn decode_options(mut self, options: DecodeOptions) -> Self {
        self.decode = options;
        self
    }

    /// Encode atoms with the Latin-1 tags for gateways that predate UTF-8 atoms
    pub fn legacy_atoms(mut self, enabled: bool) -> Self {
        self.encode = self.encode.legacy_atoms(enabled);
        self
    }

    /// Socket options
    pub fn get_socket_options(&self) -> &SocketOptions {
        &self.socket
    }

    /// Frame size limit
    pub fn get_max_frame_size(&self) -> usize {
        self.max_frame_size
    }

    /// Encoding options
    pub fn get_encode_options(&self) -> &EncodeOptions {
        &self.encode
    }

    /// Decoding options
    pub fn get_decode_options(&self) -> &DecodeOptions {
        &self.decode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.get_max_frame_size(), 64 * 1024 * 1024);
        assert!(!config.get_encode_options().uses_legacy_atoms());
        assert_eq!(config.get_decode_options().depth_limit(), 512);
    }

    #[test]
    fn test_builders_compose() {
        let config = SessionConfig::new()
            .max_frame_size(1024)
            .legacy_atoms(true)
            .connect_timeout(Some(Duration::from_millis(500)));
        assert_eq!(config.get_max_frame_size(), 1024);
        assert!(config.get_encode_options().uses_legacy_atoms());
        assert_eq!(
            config.get_socket_options().get_connect_timeout(),
            Some(Duration::from_millis(500))
        );
    }
}
