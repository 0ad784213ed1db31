//! Gateway Facades
//!
//! Opening sessions to a gateway, and accepting them when acting as one.

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

use adapters_gateway::{GatewayError, Session, SessionConfig, SessionListener};
use std::net::SocketAddr;

/// Connect to a gateway with default settings
pub fn connect(host: &str, port: u16) -> Result<Session, GatewayError> {
    Session::connect(host, port)
}

/// Connect to a gateway with explicit settings
pub fn connect_with(host: &str, port: u16, config: SessionConfig) -> Result<Session, GatewayError> {
    Session::connect_with(host, port, config)
}

/// Listen for workers on `addr`
///
/// Every accepted session uses `config`.
pub fn listen(addr: SocketAddr, config: SessionConfig) -> Result<SessionListener, GatewayError> {
    SessionListener::bind(addr, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_terms::Term;
    use std::thread;

    #[test]
    fn test_connect_and_exchange() {
        let listener = listen("127.0.0.1:0".parse().unwrap(), SessionConfig::default()).unwrap();
        let port = listener.local_addr().unwrap().port();
        let gateway = thread::spawn(move || {
            let (mut session, _) = listener.accept().unwrap();
            let term = session.recv().unwrap();
            session.send(&term).unwrap();
        });

        let mut session = connect("127.0.0.1", port).unwrap();
        let message = Term::tuple(vec![Term::atom("ping"), Term::from(1)]);
        session.send(&message).unwrap();
        assert_eq!(session.recv().unwrap(), message);
        gateway.join().unwrap();
        session.close();
        assert!(!session.is_open());
    }

    #[test]
    fn test_connect_with_legacy_atoms() {
        let listener = listen("127.0.0.1:0".parse().unwrap(), SessionConfig::default()).unwrap();
        let port = listener.local_addr().unwrap().port();
        let gateway = thread::spawn(move || listener.accept().unwrap().0.recv().unwrap());

        let config = SessionConfig::new().legacy_atoms(true);
        let mut session = connect_with("127.0.0.1", port, config).unwrap();
        session.send(&Term::atom("hello")).unwrap();
        assert_eq!(gateway.join().unwrap(), Term::atom("hello"));
    }

    #[test]
    fn test_connect_to_closed_port() {
        let port = {
            let addr = "127.0.0.1:0".parse().unwrap();
            let listener = listen(addr, SessionConfig::default()).unwrap();
            listener.local_addr().unwrap().port()
        };
        assert!(matches!(connect("127.0.0.1", port), Err(GatewayError::Connection(_))));
    }
}
