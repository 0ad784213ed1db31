//! Tuple Module
//!
//! Provides [`Tuple`], a fixed-arity ordered container of terms.
//!
//! The arity is fixed when the tuple is built; elements can be read and
//! replaced by zero-based index, and every indexed access is bounds-checked.

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

use crate::term::Term;
use thiserror::Error;

/// Out-of-bounds tuple element access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of bounds for a tuple of arity {arity}")]
pub struct IndexError {
    /// The index that was requested
    pub index: usize,
    /// The arity of the tuple
    pub arity: usize,
}

/// Fixed-arity tuple
///
/// # Examples
///
/// ```rust
/// use entities_terms::{Term, Tuple};
///
/// let mut pair = Tuple::new(vec![Term::atom("x"), Term::from(1)]);
/// let old = pair.set(1, Term::from(2)).unwrap();
/// assert_eq!(old, Term::from(1));
/// assert_eq!(pair.get(1).unwrap(), &Term::from(2));
///
/// let err = pair.set(5, Term::from(3)).unwrap_err();
/// assert_eq!((err.index, err.arity), (5, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Tuple {
    elements: Vec<Term>,
}

impl Tuple {
    /// Create a tuple whose arity is the number of elements given
    pub fn new(elements: Vec<Term>) -> Self {
        Self { elements }
    }

    /// The empty tuple `{}`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of elements
    pub fn arity(&self) -> usize {
        self.elements.len()
    }

    /// Whether this is the empty tuple
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Read the element at `index`
    pub fn get(&self, index: usize) -> Result<&Term, IndexError> {
        let arity = self.arity();
        self.elements.get(index).ok_or(IndexError { index, arity })
    }

    /// Mutable access to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Term, IndexError> {
        let arity = self.arity();
        self.elements.get_mut(index).ok_or(IndexError { index, arity })
    }

    /// Replace the element at `index`, returning the previous element
    ///
    /// # Arguments
    /// * `index` - Zero-based element position
    /// * `value` - The new element
    ///
    /// # Returns
    /// * `Ok(Term)` - The element that was replaced
    /// * `Err(IndexError)` - `index` is not below the arity; the tuple is unchanged
    pub fn set(&mut self, index: usize, value: Term) -> Result<Term, IndexError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// All elements in order
    pub fn elements(&self) -> &[Term] {
        &self.elements
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.elements.iter()
    }

    /// Consume the tuple, returning its elements
    pub fn into_elements(self) -> Vec<Term> {
        self.elements
    }
}

impl From<Vec<Term>> for Tuple {
    fn from(elements: Vec<Term>) -> Self {
        Self::new(elements)
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl IntoIterator for Tuple {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
