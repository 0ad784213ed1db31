//! Gateway Messages
//!
//! Builders and checks for the few message shapes the gateway protocol names.
//! The session itself treats every message as an opaque term.

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

use entities_terms::Term;

/// Tag of the registration request
pub const REGISTER_WITH_GROUP: &str = "register_with_group";

/// Tag a worker puts on its replies
pub const RESPONSE: &str = "response";

/// `{register_with_group, Group}`
///
/// Sent once after connecting so the gateway routes the group's requests to
/// this connection.
pub fn register_with_group(group: &str) -> Term {
    Term::tuple(vec![Term::atom(REGISTER_WITH_GROUP), Term::atom(group)])
}

/// Whether `term` is a tuple whose first element is the atom `tag`
pub fn is_tagged(term: &Term, tag: &str) -> bool {
    term.tag().is_some_and(|atom| atom.as_str() == tag)
}
