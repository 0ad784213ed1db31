//! Term Module
//!
//! Provides the [`Term`] enum, the closed set of values the external term
//! format can carry.
//!
//! ## Lists
//!
//! A proper list is `Term::List`; the empty list (nil, `[]`) is
//! `Term::List(vec![])`. Lists whose tail is not nil are `Term::ImproperList`.
//! A list of bytes that arrived as `STRING_EXT` is `Term::String`, which keeps
//! the bytes together instead of boxing each one as an integer term.

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
use crate::big::BigNumber;
use crate::identifiers::{Export, Fun, OldFun, Pid, Port, Reference};
use crate::map::Map;
use crate::tuple::Tuple;
use std::hash::{Hash, Hasher};
use std::mem;

/// An Erlang term
///
/// Equality is exact term equality: floats compare by bit pattern, so `0.0`
/// and `-0.0` are different terms, and `Hash` agrees with it.
#[derive(Clone, Debug)]
pub enum Term {
    /// Atom
    Atom(Atom),
    /// Integer of any size
    Integer(BigNumber),
    /// IEEE-754 double
    Float(f64),
    /// Byte-aligned binary
    Binary(Vec<u8>),
    /// Bitstring whose last byte only uses `bits` bits (1..=7), high bits first
    BitBinary {
        /// Payload bytes
        data: Vec<u8>,
        /// Number of significant bits in the last byte
        bits: u8,
    },
    /// List of bytes (`STRING_EXT`)
    String(Vec<u8>),
    /// Proper list; empty is nil
    List(Vec<Term>),
    /// List with a non-nil tail
    ImproperList {
        /// Leading elements (at least one)
        elements: Vec<Term>,
        /// Tail that is not a list
        tail: Box<Term>,
    },
    /// Tuple
    Tuple(Tuple),
    /// Map
    Map(Map),
    /// Process identifier
    Pid(Pid),
    /// Port identifier
    Port(Port),
    /// Reference
    Reference(Reference),
    /// External function
    Export(Export),
    /// Closure
    Fun(Box<Fun>),
    /// Closure in the older layout
    OldFun(Box<OldFun>),
}

impl Term {
    /// Atom term from a name
    pub fn atom(name: impl AsRef<str>) -> Self {
        Term::Atom(Atom::new(name))
    }

    /// The empty list `[]`
    pub fn nil() -> Self {
        Term::List(Vec::new())
    }

    /// Tuple term from its elements
    pub fn tuple(elements: Vec<Term>) -> Self {
        Term::Tuple(Tuple::new(elements))
    }

    /// String term (a byte list) from text
    pub fn string(text: impl AsRef<str>) -> Self {
        Term::String(text.as_ref().as_bytes().to_vec())
    }

    /// Binary term
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Term::Binary(bytes.into())
    }

    /// The atoms `true` and `false`
    pub fn boolean(value: bool) -> Self {
        Term::atom(if value { "true" } else { "false" })
    }

    /// Whether this is the empty list
    pub fn is_nil(&self) -> bool {
        matches!(self, Term::List(elements) if elements.is_empty())
    }

    /// The atom, if this is one
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Term::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    /// The tuple, if this is one
    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Term::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    /// Mutable access to the tuple, if this is one
    pub fn as_tuple_mut(&mut self) -> Option<&mut Tuple> {
        match self {
            Term::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    /// The integer, if this is one
    pub fn as_integer(&self) -> Option<&BigNumber> {
        match self {
            Term::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// The integer as i64, if this is one that fits
    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(BigNumber::to_i64)
    }

    /// The float, if this is one
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Term::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The bytes of a binary, if this is one
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Term::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// A string term's bytes as UTF-8 text
    ///
    /// Returns None for other variants and for strings that are not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::String(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// The elements of a proper list, if this is one
    pub fn as_list(&self) -> Option<&[Term]> {
        match self {
            Term::List(elements) => Some(elements),
            _ => None,
        }
    }

    /// The map, if this is one
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Term::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The tag of a message: the first element of a tuple when it is an atom
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_terms::Term;
    ///
    /// let msg = Term::tuple(vec![Term::atom("register_with_group"), Term::atom("time_server")]);
    /// assert_eq!(msg.tag().map(|a| a.as_str()), Some("register_with_group"));
    /// assert_eq!(Term::from(1).tag(), None);
    /// ```
    pub fn tag(&self) -> Option<&Atom> {
        self.as_tuple()
            .and_then(|tuple| tuple.get(0).ok())
            .and_then(Term::as_atom)
    }

    /// Short name of the variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Term::Atom(_) => "atom",
            Term::Integer(_) => "integer",
            Term::Float(_) => "float",
            Term::Binary(_) => "binary",
            Term::BitBinary { .. } => "bitstring",
            Term::String(_) => "string",
            Term::List(_) => "list",
            Term::ImproperList { .. } => "improper_list",
            Term::Tuple(_) => "tuple",
            Term::Map(_) => "map",
            Term::Pid(_) => "pid",
            Term::Port(_) => "port",
            Term::Reference(_) => "reference",
            Term::Export(_) | Term::Fun(_) | Term::OldFun(_) => "fun",
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Atom(a), Term::Atom(b)) => a == b,
            (Term::Integer(a), Term::Integer(b)) => a == b,
            (Term::Float(a), Term::Float(b)) => a.to_bits() == b.to_bits(),
            (Term::Binary(a), Term::Binary(b)) => a == b,
            (
                Term::BitBinary { data: a, bits: a_bits },
                Term::BitBinary { data: b, bits: b_bits },
            ) => a_bits == b_bits && a == b,
            (Term::String(a), Term::String(b)) => a == b,
            (Term::List(a), Term::List(b)) => a == b,
            (
                Term::ImproperList { elements: a, tail: a_tail },
                Term::ImproperList { elements: b, tail: b_tail },
            ) => a == b && a_tail == b_tail,
            (Term::Tuple(a), Term::Tuple(b)) => a == b,
            (Term::Map(a), Term::Map(b)) => a == b,
            (Term::Pid(a), Term::Pid(b)) => a == b,
            (Term::Port(a), Term::Port(b)) => a == b,
            (Term::Reference(a), Term::Reference(b)) => a == b,
            (Term::Export(a), Term::Export(b)) => a == b,
            (Term::Fun(a), Term::Fun(b)) => a == b,
            (Term::OldFun(a), Term::OldFun(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Term::Atom(atom) => atom.hash(state),
            Term::Integer(value) => value.hash(state),
            Term::Float(value) => value.to_bits().hash(state),
            Term::Binary(bytes) | Term::String(bytes) => bytes.hash(state),
            Term::BitBinary { data, bits } => {
                data.hash(state);
                bits.hash(state);
            }
            Term::List(elements) => elements.hash(state),
            Term::ImproperList { elements, tail } => {
                elements.hash(state);
                tail.hash(state);
            }
            Term::Tuple(tuple) => tuple.hash(state),
            Term::Map(map) => map.hash(state),
            Term::Pid(pid) => pid.hash(state),
            Term::Port(port) => port.hash(state),
            Term::Reference(reference) => reference.hash(state),
            Term::Export(export) => export.hash(state),
            Term::Fun(fun) => fun.hash(state),
            Term::OldFun(fun) => fun.hash(state),
        }
    }
}

impl From<Atom> for Term {
    fn from(atom: Atom) -> Self {
        Term::Atom(atom)
    }
}

impl From<BigNumber> for Term {
    fn from(value: BigNumber) -> Self {
        Term::Integer(value)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Integer(BigNumber::from(value))
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Integer(BigNumber::from(value))
    }
}

impl From<u32> for Term {
    fn from(value: u32) -> Self {
        Term::Integer(BigNumber::from(value))
    }
}

impl From<u64> for Term {
    fn from(value: u64) -> Self {
        Term::Integer(BigNumber::from(value))
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::boolean(value)
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Term::string(text)
    }
}

impl From<String> for Term {
    fn from(text: String) -> Self {
        Term::String(text.into_bytes())
    }
}

impl From<Tuple> for Term {
    fn from(tuple: Tuple) -> Self {
        Term::Tuple(tuple)
    }
}

impl From<Map> for Term {
    fn from(map: Map) -> Self {
        Term::Map(map)
    }
}

impl From<Vec<Term>> for Term {
    fn from(elements: Vec<Term>) -> Self {
        Term::List(elements)
    }
}

impl From<Pid> for Term {
    fn from(pid: Pid) -> Self {
        Term::Pid(pid)
    }
}

impl From<Reference> for Term {
    fn from(reference: Reference) -> Self {
        Term::Reference(reference)
    }
}
