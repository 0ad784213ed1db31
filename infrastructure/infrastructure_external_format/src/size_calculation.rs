//! Size Calculation Module
//!
//! Provides size calculation for external term format encoding.
//! Based on erts_encode_ext_size() and encode_size_struct_int() from external.c

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

use crate::encoding::check_improper_list;
use crate::error::CodecError;
use crate::options::EncodeOptions;
use crate::tags::MAX_STRING_EXT_LEN;
use entities_terms::{Atom, BigNumber, Pid, Term, MAX_ATOM_CHARACTERS};

/// Calculate the size needed to encode a term in external format
///
/// Based on `erts_encode_ext_size()` from external.c. The count includes the
/// version magic byte and is the exact length of the uncompressed encoding.
/// Fails in the same cases [`encode_with`](crate::encode_with) does.
///
/// # Arguments
/// * `term` - The term to calculate size for
/// * `options` - Encoding options (atom tags change the size)
///
/// # Returns
/// * `Ok(usize)` - Size in bytes needed for encoding
/// * `Err(CodecError)` - The term cannot be encoded
pub fn encoded_size(term: &Term, options: &EncodeOptions) -> Result<usize, CodecError> {
    Ok(1 + encode_size_struct_int(term, options)?)
}

/// Size of a term without the version byte
pub fn encode_size_struct_int(term: &Term, options: &EncodeOptions) -> Result<usize, CodecError> {
    let size = match term {
        Term::Atom(atom) => atom_size(atom, options)?,
        Term::Integer(value) => integer_size(value),
        Term::Float(value) => {
            if !value.is_finite() {
                return Err(CodecError::InvalidFloat);
            }
            9
        }
        Term::Binary(data) => 5 + data.len(),
        Term::BitBinary { data, bits } => {
            if data.is_empty() || !(1..=7).contains(bits) {
                return Err(CodecError::InvalidTerm(format!(
                    "bitstring of {} bytes cannot end in {} bits",
                    data.len(),
                    bits
                )));
            }
            6 + data.len()
        }
        Term::String(bytes) if bytes.len() <= MAX_STRING_EXT_LEN => 3 + bytes.len(),
        // LIST_EXT header, two bytes per element, NIL_EXT
        Term::String(bytes) => 5 + 2 * bytes.len() + 1,
        Term::List(elements) if elements.is_empty() => 1,
        Term::List(elements) => 5 + sum_sizes(elements, options)? + 1,
        Term::ImproperList { elements, tail } => {
            check_improper_list(elements, tail)?;
            5 + sum_sizes(elements, options)? + encode_size_struct_int(tail, options)?
        }
        Term::Tuple(tuple) => {
            let header = if tuple.arity() <= 255 { 2 } else { 5 };
            header + sum_sizes(tuple.elements(), options)?
        }
        Term::Map(map) => {
            let mut size = 5;
            for (key, value) in map.iter() {
                size += encode_size_struct_int(key, options)?;
                size += encode_size_struct_int(value, options)?;
            }
            size
        }
        Term::Pid(pid) => pid_size(pid, options)?,
        Term::Port(port) => {
            let id_size = if port.id <= u64::from(u32::MAX) { 4 } else { 8 };
            1 + atom_size(&port.node, options)? + id_size + 4
        }
        Term::Reference(reference) => {
            if reference.ids.len() > usize::from(u16::MAX) {
                return Err(CodecError::TermTooLarge);
            }
            3 + atom_size(&reference.node, options)? + 4 + 4 * reference.ids.len()
        }
        Term::Export(export) => {
            1 + atom_size(&export.module, options)? + atom_size(&export.function, options)? + 2
        }
        Term::Fun(fun) => {
            // tag, size, arity, uniq, index, numfree
            1 + 4 + 1 + 16 + 4 + 4
                + atom_size(&fun.module, options)?
                + u32_integer_size(fun.old_index)
                + u32_integer_size(fun.old_uniq)
                + pid_size(&fun.pid, options)?
                + sum_sizes(&fun.free_vars, options)?
        }
        Term::OldFun(fun) => {
            1 + 4
                + pid_size(&fun.pid, options)?
                + atom_size(&fun.module, options)?
                + u32_integer_size(fun.index)
                + u32_integer_size(fun.uniq)
                + sum_sizes(&fun.free_vars, options)?
        }
    };
    Ok(size)
}

fn sum_sizes(terms: &[Term], options: &EncodeOptions) -> Result<usize, CodecError> {
    terms
        .iter()
        .map(|term| encode_size_struct_int(term, options))
        .sum()
}

fn atom_size(atom: &Atom, options: &EncodeOptions) -> Result<usize, CodecError> {
    if atom.char_count() > MAX_ATOM_CHARACTERS {
        return Err(CodecError::AtomTooLong);
    }
    let len = if options.uses_legacy_atoms() {
        if !atom.is_latin1() {
            return Err(CodecError::AtomNotLatin1);
        }
        atom.char_count()
    } else {
        atom.as_str().len()
    };
    Ok(if len <= 255 { 2 + len } else { 3 + len })
}

fn integer_size(value: &BigNumber) -> usize {
    if value.to_u8().is_some() {
        2
    } else if value.to_i32().is_some() {
        5
    } else {
        let len = value.magnitude_len();
        if len <= 255 {
            3 + len
        } else {
            6 + len
        }
    }
}

fn u32_integer_size(value: u32) -> usize {
    if value <= 255 {
        2
    } else {
        5
    }
}

fn pid_size(pid: &Pid, options: &EncodeOptions) -> Result<usize, CodecError> {
    Ok(1 + atom_size(&pid.node, options)? + 12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_with;
    use entities_terms::{Export, Fun, Map, OldFun, Port, Reference};

    fn assert_size_matches(term: &Term, options: &EncodeOptions) {
        let size = encoded_size(term, options).unwrap();
        assert_eq!(size, encode_with(term, options).unwrap().len(), "size of {}", term);
    }

    #[test]
    fn test_sizes_match_encoding() {
        let node = Atom::new("gateway@localhost");
        let pid = Pid { node: node.clone(), id: 1, serial: 2, creation: 3 };
        let terms = vec![
            Term::nil(),
            Term::from(7),
            Term::from(-70_000),
            Term::from(u64::MAX),
            Term::from(2.5),
            Term::atom("caf\u{e9}"),
            Term::binary(vec![1, 2, 3]),
            Term::BitBinary { data: vec![1, 0x80], bits: 1 },
            Term::from("hello"),
            Term::String(vec![b'a'; 70_000]),
            Term::List(vec![Term::from(1), Term::atom("two")]),
            Term::ImproperList { elements: vec![Term::from(1)], tail: Box::new(Term::atom("t")) },
            Term::tuple(vec![Term::from(300); 300]),
            Term::Map(Map::from_pairs(vec![(Term::atom("k"), Term::from("v"))])),
            Term::Pid(pid.clone()),
            Term::Port(Port { node: node.clone(), id: 1 << 40, creation: 1 }),
            Term::Reference(Reference { node: node.clone(), creation: 1, ids: vec![1, 2, 3] }),
            Term::Export(Export { module: Atom::new("m"), function: Atom::new("f"), arity: 0 }),
            Term::Fun(Box::new(Fun {
                arity: 0,
                uniq: [0; 16],
                index: 1,
                module: Atom::new("m"),
                old_index: 1,
                old_uniq: 123_456,
                pid: pid.clone(),
                free_vars: vec![Term::from(1), Term::nil()],
            })),
            Term::OldFun(Box::new(OldFun {
                pid,
                module: Atom::new("m"),
                index: 2,
                uniq: 1 << 31,
                free_vars: vec![Term::atom("x")],
            })),
        ];
        let legacy = EncodeOptions::new().legacy_atoms(true);
        for term in &terms {
            assert_size_matches(term, &EncodeOptions::default());
            assert_size_matches(term, &legacy);
        }
    }

    #[test]
    fn test_size_errors_match_encoding() {
        let legacy = EncodeOptions::new().legacy_atoms(true);
        assert_eq!(encoded_size(&Term::atom("\u{3bb}"), &legacy), Err(CodecError::AtomNotLatin1));
        assert_eq!(
            encoded_size(&Term::Float(f64::INFINITY), &EncodeOptions::default()),
            Err(CodecError::InvalidFloat)
        );
    }
}
