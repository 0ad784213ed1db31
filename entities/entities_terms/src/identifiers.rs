//! Identifier Terms
//!
//! Opaque identifiers carried by the external term format: process
//! identifiers, ports, references, external functions and closures.
//!
//! Fields follow the modern tags (`NEW_PID_EXT`, `NEW_PORT_EXT`/`V4_PORT_EXT`,
//! `NEWER_REFERENCE_EXT`, `NEW_FUN_EXT`): creation is always 32 bits, even
//! when the value was decoded from an older tag that carried a single byte.

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

use crate::atom::Atom;
use crate::term::Term;

/// Process identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pid {
    /// Node the process lives on
    pub node: Atom,
    /// Process number
    pub id: u32,
    /// Serial number
    pub serial: u32,
    /// Node incarnation
    pub creation: u32,
}

/// Port identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Port {
    /// Node the port lives on
    pub node: Atom,
    /// Port number (64 bits since `V4_PORT_EXT`)
    pub id: u64,
    /// Node incarnation
    pub creation: u32,
}

/// Reference
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Node the reference was created on
    pub node: Atom,
    /// Node incarnation
    pub creation: u32,
    /// Identifier words, in wire order
    pub ids: Vec<u32>,
}

/// External function `fun Module:Function/Arity`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Export {
    /// Module name
    pub module: Atom,
    /// Function name
    pub function: Atom,
    /// Arity
    pub arity: u8,
}

/// Closure as carried by `NEW_FUN_EXT`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fun {
    /// Number of arguments
    pub arity: u8,
    /// MD5 of the module's significant parts
    pub uniq: [u8; 16],
    /// Index into the module's fun table
    pub index: u32,
    /// Module the fun was defined in
    pub module: Atom,
    /// Old-style index
    pub old_index: u32,
    /// Old-style hash
    pub old_uniq: u32,
    /// Process that created the fun
    pub pid: Pid,
    /// Captured free variables
    pub free_vars: Vec<Term>,
}

/// Closure in the older `FUN_EXT` layout
///
/// Peers still running old emulators send these. The fun is identified only by
/// its module's old index and hash, and it carries no arity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OldFun {
    /// Process that created the fun
    pub pid: Pid,
    /// Module the fun was defined in
    pub module: Atom,
    /// Index into the module's fun table
    pub index: u32,
    /// Hash of the fun's code
    pub uniq: u32,
    /// Captured free variables
    pub free_vars: Vec<Term>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality() {
        let a = Pid { node: Atom::new("n@h"), id: 1, serial: 0, creation: 3 };
        let b = Pid { node: Atom::new("n@h"), id: 1, serial: 0, creation: 3 };
        assert_eq!(a, b);
        assert_ne!(a, Pid { creation: 4, ..b.clone() });

        let r = Reference { node: Atom::new("n@h"), creation: 1, ids: vec![1, 2, 3] };
        assert_ne!(r, Reference { ids: vec![3, 2, 1], ..r.clone() });
    }
}
