//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing. Connection settings fall back to
//! the `GATEWAY_HOST` and `GATEWAY_PORT` environment variables.

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

use adapters_gateway::{SessionConfig, DEFAULT_GATEWAY_PORT};
use adapters_socket::DEFAULT_MAX_FRAME_SIZE;
use clap::Parser;
use std::time::Duration;

/// time_server command-line arguments
#[derive(Parser, Debug)]
#[command(name = "time_server")]
#[command(about = "Answers time requests routed by an Erlang message gateway")]
#[command(version)]
pub struct TimeServerArgs {
    /// Gateway host
    #[arg(long, env = "GATEWAY_HOST", default_value = "localhost")]
    pub host: String,

    /// Gateway port
    #[arg(long, env = "GATEWAY_PORT", default_value_t = DEFAULT_GATEWAY_PORT)]
    pub port: u16,

    /// Group to register with
    #[arg(long, default_value = "time_server")]
    pub group: String,

    /// Largest frame sent or accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FRAME_SIZE)]
    pub max_frame_size: usize,

    /// Connect timeout in milliseconds (0 waits as long as the OS does)
    #[arg(long, default_value_t = 10_000)]
    pub connect_timeout_ms: u64,

    /// Encode atoms with the Latin-1 tags older gateways expect
    #[arg(long)]
    pub legacy_atoms: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl TimeServerArgs {
    /// Session settings derived from the arguments
    pub fn session_config(&self) -> SessionConfig {
        let timeout = match self.connect_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };
        SessionConfig::new()
            .connect_timeout(timeout)
            .max_frame_size(self.max_frame_size)
            .legacy_atoms(self.legacy_atoms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_arguments() {
        let args = TimeServerArgs::try_parse_from([
            "time_server",
            "--host",
            "gateway.local",
            "--port",
            "4000",
            "--group",
            "clock",
            "--max-frame-size",
            "1024",
            "--connect-timeout-ms",
            "0",
            "--legacy-atoms",
        ])
        .unwrap();
        assert_eq!(args.host, "gateway.local");
        assert_eq!(args.port, 4000);
        assert_eq!(args.group, "clock");

        let config = args.session_config();
        assert_eq!(config.get_max_frame_size(), 1024);
        assert!(config.get_encode_options().uses_legacy_atoms());
        assert_eq!(config.get_socket_options().get_connect_timeout(), None);
    }

    #[test]
    fn test_defaults() {
        let argv = ["time_server", "--host", "h", "--port", "3307"];
        let args = TimeServerArgs::try_parse_from(argv).unwrap();
        assert_eq!(args.group, "time_server");
        assert_eq!(args.max_frame_size, DEFAULT_MAX_FRAME_SIZE);
        assert!(!args.legacy_atoms);
        assert_eq!(
            args.session_config().get_socket_options().get_connect_timeout(),
            Some(Duration::from_secs(10))
        );
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(TimeServerArgs::try_parse_from(["time_server", "--port", "70000"]).is_err());
    }
}
