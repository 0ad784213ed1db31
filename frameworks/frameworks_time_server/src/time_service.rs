//! Time Service
//!
//! The worker loop: register with a group, then answer every request by
//! rewriting it into a reply. A request is a tuple of at least four elements;
//! the reply is the same tuple with element 0 replaced by the atom `response`
//! and element 3 by the current local time as a string.

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

use adapters_gateway::{messages, GatewayError, Session};
use adapters_socket::TransportError;
use entities_terms::Term;
use tracing::{debug, info, warn};

/// Timestamp layout in replies
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn local_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Turn a request into its reply, or `None` if it is not a request
pub fn respond(mut message: Term, timestamp: &str) -> Option<Term> {
    let tuple = message.as_tuple_mut()?;
    if tuple.arity() < 4 {
        return None;
    }
    tuple.set(0, Term::atom(messages::RESPONSE)).ok()?;
    tuple.set(3, Term::from(timestamp)).ok()?;
    Some(message)
}

/// Register with `group` and answer requests until the gateway disconnects
///
/// `now` supplies the timestamp for each reply. Messages that are not
/// requests are logged and skipped.
///
/// # Returns
/// * `Ok(u64)` - Number of replies sent before the gateway closed the connection
/// * `Err(GatewayError)` - Any other failure; the session is closed
pub fn serve<F>(session: &mut Session, group: &str, mut now: F) -> Result<u64, GatewayError>
where
    F: FnMut() -> String,
{
    session.send(&messages::register_with_group(group))?;
    info!(group, "registered with gateway");

    let mut replies = 0u64;
    loop {
        let message = match session.recv() {
            Ok(message) => message,
            Err(GatewayError::Transport(TransportError::Closed)) => {
                info!(replies, "gateway closed the connection");
                return Ok(replies);
            }
            Err(e) => return Err(e),
        };
        debug!(%message, "request received");
        match respond(message, &now()) {
            Some(reply) => {
                session.send(&reply)?;
                replies += 1;
            }
            None => warn!("ignoring message that is not a request tuple"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_rewrites_slots() {
        let request = Term::tuple(vec![
            Term::atom("time_request"),
            Term::from(1),
            Term::from(2),
            Term::nil(),
            Term::atom("extra"),
        ]);
        let reply = respond(request, "2024-01-01 00:00:00").unwrap();
        let tuple = reply.as_tuple().unwrap();
        assert_eq!(tuple.get(0).unwrap(), &Term::atom("response"));
        assert_eq!(tuple.get(1).unwrap(), &Term::from(1));
        assert_eq!(tuple.get(3).unwrap().as_str(), Some("2024-01-01 00:00:00"));
        assert_eq!(tuple.get(4).unwrap(), &Term::atom("extra"));
    }

    #[test]
    fn test_respond_rejects_non_requests() {
        assert_eq!(respond(Term::atom("hello"), "t"), None);
        assert_eq!(respond(Term::tuple(vec![Term::atom("a"), Term::nil()]), "t"), None);
    }

    #[test]
    fn test_local_timestamp_shape() {
        let stamp = local_timestamp();
        assert_eq!(stamp.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&stamp, TIMESTAMP_FORMAT).is_ok());
    }
}
