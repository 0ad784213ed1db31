//! Map Operations Module
//!
//! Provides the map term.
//! Based on erl_map.c
//!
//! Keys and values are both terms. Keys are unique; two maps are equal when
//! they hold the same entries, whatever order those entries were inserted or
//! decoded in.

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
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// Map data structure
///
/// Stores key-value pairs as a vector. Single-key lookups are linear, which is
/// fine for the message-sized maps that travel through a gateway; bulk
/// construction and equality hash the keys.
#[derive(Clone, Debug, Default)]
pub struct Map {
    /// Key-value pairs; keys are unique
    pairs: Vec<(Term, Term)>,
}

impl Map {
    /// Create a new empty map
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Number of key-value pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check if a key exists in the map
    pub fn contains_key(&self, key: &Term) -> bool {
        self.find_index(key).is_some()
    }

    /// Get a value by key
    pub fn get(&self, key: &Term) -> Option<&Term> {
        self.find_index(key).map(|idx| &self.pairs[idx].1)
    }

    /// Put a key-value pair into the map
    ///
    /// If the key already exists, the value is updated.
    /// Returns the previous value if the key existed, None otherwise.
    pub fn put(&mut self, key: Term, value: Term) -> Option<Term> {
        if let Some(idx) = self.find_index(&key) {
            Some(std::mem::replace(&mut self.pairs[idx].1, value))
        } else {
            self.pairs.push((key, value));
            None
        }
    }

    /// Remove a key from the map, returning its value if it was present
    pub fn remove(&mut self, key: &Term) -> Option<Term> {
        self.find_index(key).map(|idx| self.pairs.remove(idx).1)
    }

    /// Iterate over the entries
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Term)> {
        self.pairs.iter().map(|(k, v)| (k, v))
    }

    /// Create a map from a list of (key, value) pairs
    ///
    /// If duplicate keys exist, the last value for each key is kept.
    pub fn from_pairs(pairs: Vec<(Term, Term)>) -> Self {
        let keep = {
            let mut seen = HashSet::with_capacity(pairs.len());
            let mut keep = vec![false; pairs.len()];
            for (idx, (key, _)) in pairs.iter().enumerate().rev() {
                keep[idx] = seen.insert(key);
            }
            keep
        };
        let pairs = pairs
            .into_iter()
            .zip(keep)
            .filter_map(|(pair, kept)| kept.then_some(pair))
            .collect();
        Self { pairs }
    }

    /// Create a map from pairs whose keys must all differ
    ///
    /// # Returns
    /// The map, or the first key that occurs twice.
    pub fn from_distinct_pairs(mut pairs: Vec<(Term, Term)>) -> Result<Self, Term> {
        let repeated = {
            let mut seen = HashSet::with_capacity(pairs.len());
            pairs.iter().position(|(key, _)| !seen.insert(key))
        };
        match repeated {
            Some(idx) => Err(pairs.swap_remove(idx).0),
            None => Ok(Self { pairs }),
        }
    }

    /// Consume the map, returning its entries
    pub fn into_pairs(self) -> Vec<(Term, Term)> {
        self.pairs
    }

    fn find_index(&self, key: &Term) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let entries: HashMap<&Term, &Term> = other.iter().collect();
        self.iter()
            .all(|(key, value)| entries.get(key) == Some(&value))
    }
}

impl Eq for Map {}

impl Hash for Map {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entries are summed so that insertion order does not change the hash
        let entries = self
            .pairs
            .iter()
            .map(|entry| {
                let mut hasher = DefaultHasher::new();
                entry.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0u64, u64::wrapping_add);
        self.pairs.len().hash(state);
        entries.hash(state);
    }
}

impl FromIterator<(Term, Term)> for Map {
    fn from_iter<I: IntoIterator<Item = (Term, Term)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().collect())
    }
}
