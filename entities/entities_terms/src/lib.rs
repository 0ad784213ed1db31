//! Entities Layer: Erlang Terms
//!
//! This crate provides the in-memory model of Erlang terms as they travel over
//! the external term format: atoms, tuples, arbitrary precision integers,
//! floats, binaries, lists, maps and the opaque process identifiers.
//!
//! ## Overview
//!
//! The `entities_terms` crate is the innermost layer of the gateway client. It has no
//! dependencies on other crates in the workspace, and every higher layer (the codec, the
//! socket adapter and the gateway session) speaks in terms of the types defined here.
//!
//! ## Modules
//!
//! - **[`term`](term/index.html)**: The closed [`Term`] sum type and its accessors.
//!
//! - **[`atom`](atom/index.html)**: [`Atom`], an immutable symbolic name compared and
//!   hashed by name.
//!
//! - **[`tuple`](tuple/index.html)**: [`Tuple`], a fixed-arity container with
//!   bounds-checked indexed mutation.
//!
//! - **[`big`](big/index.html)**: [`BigNumber`], arbitrary precision integers backed by
//!   `malachite`.
//!
//! - **[`map`](map/index.html)**: [`Map`], a unique-key term map whose equality ignores
//!   insertion order.
//!
//! - **[`identifiers`](identifiers/index.html)**: [`Pid`], [`Port`], [`Reference`],
//!   [`Export`], [`Fun`] and [`OldFun`].
//!
//! - **[`print_term`](print_term/index.html)**: `Display` in Erlang syntax.
//!
//! ## Usage
//!
//! ```rust
//! use entities_terms::{Atom, Term, Tuple};
//!
//! let mut message = Tuple::new(vec![
//!     Term::atom("request"),
//!     Term::from(7),
//!     Term::from("payload"),
//!     Term::from("1970-01-01 00:00:00"),
//! ]);
//!
//! message.set(0, Term::atom("response")).unwrap();
//! assert_eq!(message.get(0).unwrap().as_atom(), Some(&Atom::new("response")));
//! assert!(message.set(5, Term::atom("oops")).is_err());
//! ```
//!
//! ## See Also
//!
//! - [`infrastructure_external_format`](../infrastructure_external_format/index.html):
//!   encoding and decoding of these terms

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

pub mod atom;
pub mod big;
pub mod identifiers;
pub mod map;
pub mod print_term;
pub mod term;
pub mod tuple;

// Re-export main types for convenience
pub use atom::{Atom, MAX_ATOM_CHARACTERS};
pub use big::BigNumber;
pub use identifiers::{Export, Fun, OldFun, Pid, Port, Reference};
pub use map::Map;
pub use term::Term;
pub use tuple::{IndexError, Tuple};
