//! Atom Module
//!
//! Provides the [`Atom`] type: an immutable symbolic name.
//!
//! ## Overview
//!
//! Atoms are compared and hashed by name. Two atoms built from the same string
//! are equal regardless of where they were allocated. The name is kept in a
//! shared `Arc<str>`, so cloning an atom (which happens every time a tuple is
//! copied or a message is echoed back) never copies the string.
//!
//! ## Limits
//!
//! - Maximum characters per atom: 255 (`MAX_ATOM_CHARACTERS`)
//!
//! The limit is a property of the wire format, so it is checked by the codec
//! when an atom is encoded or decoded rather than on construction.

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

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Maximum number of characters in an atom name
pub const MAX_ATOM_CHARACTERS: usize = 255;

/// An Erlang atom
///
/// # Examples
///
/// ```rust
/// use entities_terms::Atom;
///
/// let a = Atom::new("time_server");
/// let b = Atom::from(String::from("time_server"));
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "time_server");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(Arc<str>);

impl Atom {
    /// Create an atom from its name
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The atom's name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the name
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the name fits within [`MAX_ATOM_CHARACTERS`]
    pub fn is_valid_length(&self) -> bool {
        self.char_count() <= MAX_ATOM_CHARACTERS
    }

    /// Whether every character is in the Latin-1 range (U+0000..=U+00FF)
    ///
    /// Only such atoms can be written with the legacy `ATOM_EXT` and
    /// `SMALL_ATOM_EXT` tags.
    pub fn is_latin1(&self) -> bool {
        self.0.chars().all(|c| (c as u32) <= 0xFF)
    }

    /// The name encoded as Latin-1 bytes, or `None` when a character is out of range
    pub fn to_latin1(&self) -> Option<Vec<u8>> {
        self.0
            .chars()
            .map(|c| u8::try_from(c as u32).ok())
            .collect()
    }

    /// Build an atom from Latin-1 bytes
    ///
    /// Every byte maps to the code point of the same value, so this never fails.
    pub fn from_latin1(bytes: &[u8]) -> Self {
        let name: String = bytes.iter().map(|&b| char::from(b)).collect();
        Self(Arc::from(name))
    }

    /// Whether the atom prints without quotes in Erlang syntax
    ///
    /// That is the case for names starting with a lowercase letter followed by
    /// alphanumerics, `_` or `@`.
    pub fn is_bare(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@')
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({:?})", &*self.0)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bare() {
            return f.write_str(&self.0);
        }
        f.write_str("'")?;
        for c in self.0.chars() {
            match c {
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\t' => f.write_str("\\t")?,
                _ => write!(f, "{}", c)?,
            }
        }
        f.write_str("'")
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl AsRef<str> for Atom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Atom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Atom {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Atom {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
