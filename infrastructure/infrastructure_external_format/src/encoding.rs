//! Encoding Module
//!
//! Provides core encoding functions for external term format.
//! Based on enc_term(), enc_atom() and enc_pid() from external.c
//!
//! Every term has exactly one canonical encoding: integers use the smallest
//! tag that holds them, containers use the small form when the length fits a
//! byte, and identifiers always use the newest tags.

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

use crate::compression::compress;
use crate::error::CodecError;
use crate::options::EncodeOptions;
use crate::size_calculation::encoded_size;
use crate::tags::*;
use entities_terms::{
    Atom, BigNumber, Export, Fun, OldFun, Pid, Port, Reference, Term, MAX_ATOM_CHARACTERS,
};

/// Encode a term with the default options
///
/// # Examples
///
/// ```rust
/// use entities_terms::Term;
/// use infrastructure_external_format::encode;
///
/// let bytes = encode(&Term::tuple(vec![Term::atom("ok"), Term::from(1)])).unwrap();
/// assert_eq!(bytes, vec![131, 104, 2, 119, 2, b'o', b'k', 97, 1]);
/// ```
pub fn encode(term: &Term) -> Result<Vec<u8>, CodecError> {
    encode_with(term, &EncodeOptions::default())
}

/// Encode a term to external format
///
/// Based on `erts_encode_ext()` from external.c. Writes the version magic
/// byte followed by the term. The buffer is sized up front with
/// [`encoded_size`], so encoding performs a single allocation.
///
/// With compression enabled the result is the `COMPRESSED` form whenever it
/// comes out smaller than the plain encoding.
///
/// # Arguments
/// * `term` - The term to encode
/// * `options` - Atom tag and compression choices
///
/// # Returns
/// * `Ok(Vec<u8>)` - Encoded bytes in ETF format
/// * `Err(CodecError)` - The term cannot be represented
pub fn encode_with(term: &Term, options: &EncodeOptions) -> Result<Vec<u8>, CodecError> {
    let size = encoded_size(term, options)?;
    let mut buf = Vec::with_capacity(size);
    buf.push(VERSION_MAGIC);
    enc_term(&mut buf, term, options)?;

    match options.compression_level() {
        Some(level) => {
            let payload = &buf[1..];
            let uncompressed_size =
                u32::try_from(payload.len()).map_err(|_| CodecError::TermTooLarge)?;
            let compressed = compress(payload, level)?;
            // version + tag + size
            if 6 + compressed.len() < buf.len() {
                let mut out = Vec::with_capacity(6 + compressed.len());
                out.push(VERSION_MAGIC);
                out.push(COMPRESSED);
                out.extend_from_slice(&uncompressed_size.to_be_bytes());
                out.extend_from_slice(&compressed);
                Ok(out)
            } else {
                Ok(buf)
            }
        }
        None => Ok(buf),
    }
}

/// Append the encoding of `term` (without version byte) to `buf`
pub(crate) fn enc_term(
    buf: &mut Vec<u8>,
    term: &Term,
    options: &EncodeOptions,
) -> Result<(), CodecError> {
    match term {
        Term::Atom(atom) => enc_atom(buf, atom, options),
        Term::Integer(value) => enc_integer(buf, value),
        Term::Float(value) => {
            if !value.is_finite() {
                return Err(CodecError::InvalidFloat);
            }
            buf.push(NEW_FLOAT_EXT);
            buf.extend_from_slice(&value.to_be_bytes());
            Ok(())
        }
        Term::Binary(data) => {
            buf.push(BINARY_EXT);
            put_len_u32(buf, data.len())?;
            buf.extend_from_slice(data);
            Ok(())
        }
        Term::BitBinary { data, bits } => {
            if data.is_empty() || !(1..=7).contains(bits) {
                return Err(CodecError::InvalidTerm(format!(
                    "bitstring of {} bytes cannot end in {} bits",
                    data.len(),
                    bits
                )));
            }
            buf.push(BIT_BINARY_EXT);
            put_len_u32(buf, data.len())?;
            buf.push(*bits);
            buf.extend_from_slice(data);
            Ok(())
        }
        Term::String(bytes) => enc_string(buf, bytes),
        Term::List(elements) => {
            if elements.is_empty() {
                buf.push(NIL_EXT);
                return Ok(());
            }
            buf.push(LIST_EXT);
            put_len_u32(buf, elements.len())?;
            for element in elements {
                enc_term(buf, element, options)?;
            }
            buf.push(NIL_EXT);
            Ok(())
        }
        Term::ImproperList { elements, tail } => {
            check_improper_list(elements, tail)?;
            buf.push(LIST_EXT);
            put_len_u32(buf, elements.len())?;
            for element in elements {
                enc_term(buf, element, options)?;
            }
            enc_term(buf, tail, options)
        }
        Term::Tuple(tuple) => {
            match u8::try_from(tuple.arity()) {
                Ok(arity) => {
                    buf.push(SMALL_TUPLE_EXT);
                    buf.push(arity);
                }
                Err(_) => {
                    buf.push(LARGE_TUPLE_EXT);
                    put_len_u32(buf, tuple.arity())?;
                }
            }
            for element in tuple {
                enc_term(buf, element, options)?;
            }
            Ok(())
        }
        Term::Map(map) => {
            buf.push(MAP_EXT);
            put_len_u32(buf, map.len())?;
            for (key, value) in map.iter() {
                enc_term(buf, key, options)?;
                enc_term(buf, value, options)?;
            }
            Ok(())
        }
        Term::Pid(pid) => enc_pid(buf, pid, options),
        Term::Port(port) => enc_port(buf, port, options),
        Term::Reference(reference) => enc_reference(buf, reference, options),
        Term::Export(export) => enc_export(buf, export, options),
        Term::Fun(fun) => enc_fun(buf, fun, options),
        Term::OldFun(fun) => enc_old_fun(buf, fun, options),
    }
}

/// Reject improper lists that have no single encoding
///
/// An empty prefix is just the tail, and a list-shaped tail would decode as
/// part of the list itself.
pub(crate) fn check_improper_list(elements: &[Term], tail: &Term) -> Result<(), CodecError> {
    if elements.is_empty() {
        return Err(CodecError::InvalidTerm("improper list without elements".to_string()));
    }
    match tail {
        Term::List(_) | Term::String(_) | Term::ImproperList { .. } => Err(CodecError::InvalidTerm(
            "improper list tail is a list".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Encode an atom
///
/// UTF-8 tags by default; Latin-1 tags with `legacy_atoms`. The small form is
/// used whenever the encoded name fits in 255 bytes.
pub fn enc_atom(buf: &mut Vec<u8>, atom: &Atom, options: &EncodeOptions) -> Result<(), CodecError> {
    if atom.char_count() > MAX_ATOM_CHARACTERS {
        return Err(CodecError::AtomTooLong);
    }
    if options.uses_legacy_atoms() {
        let bytes = atom.to_latin1().ok_or(CodecError::AtomNotLatin1)?;
        put_atom_bytes(buf, &bytes, SMALL_ATOM_EXT, ATOM_EXT)
    } else {
        put_atom_bytes(buf, atom.as_str().as_bytes(), SMALL_ATOM_UTF8_EXT, ATOM_UTF8_EXT)
    }
}

fn put_atom_bytes(
    buf: &mut Vec<u8>,
    bytes: &[u8],
    small_tag: u8,
    tag: u8,
) -> Result<(), CodecError> {
    match u8::try_from(bytes.len()) {
        Ok(len) => {
            buf.push(small_tag);
            buf.push(len);
        }
        Err(_) => {
            let len = u16::try_from(bytes.len()).map_err(|_| CodecError::AtomTooLong)?;
            buf.push(tag);
            buf.extend_from_slice(&len.to_be_bytes());
        }
    }
    buf.extend_from_slice(bytes);
    Ok(())
}

/// Encode an integer using the smallest tag that holds it
pub fn enc_integer(buf: &mut Vec<u8>, value: &BigNumber) -> Result<(), CodecError> {
    if let Some(byte) = value.to_u8() {
        buf.push(SMALL_INTEGER_EXT);
        buf.push(byte);
        return Ok(());
    }
    if let Some(int) = value.to_i32() {
        buf.push(INTEGER_EXT);
        buf.extend_from_slice(&int.to_be_bytes());
        return Ok(());
    }
    let (negative, magnitude) = value.to_sign_magnitude();
    match u8::try_from(magnitude.len()) {
        Ok(len) => {
            buf.push(SMALL_BIG_EXT);
            buf.push(len);
        }
        Err(_) => {
            buf.push(LARGE_BIG_EXT);
            put_len_u32(buf, magnitude.len())?;
        }
    }
    buf.push(u8::from(negative));
    buf.extend_from_slice(&magnitude);
    Ok(())
}

fn enc_string(buf: &mut Vec<u8>, bytes: &[u8]) -> Result<(), CodecError> {
    if bytes.len() <= MAX_STRING_EXT_LEN {
        buf.push(STRING_EXT);
        // Fits: checked against MAX_STRING_EXT_LEN above
        buf.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
        buf.extend_from_slice(bytes);
        return Ok(());
    }
    // Too long for STRING_EXT: a plain list of small integers
    buf.push(LIST_EXT);
    put_len_u32(buf, bytes.len())?;
    for &byte in bytes {
        buf.push(SMALL_INTEGER_EXT);
        buf.push(byte);
    }
    buf.push(NIL_EXT);
    Ok(())
}

/// Encode a PID as `NEW_PID_EXT`
///
/// Based on `enc_pid()` from external.c.
pub fn enc_pid(buf: &mut Vec<u8>, pid: &Pid, options: &EncodeOptions) -> Result<(), CodecError> {
    buf.push(NEW_PID_EXT);
    enc_atom(buf, &pid.node, options)?;
    buf.extend_from_slice(&pid.id.to_be_bytes());
    buf.extend_from_slice(&pid.serial.to_be_bytes());
    buf.extend_from_slice(&pid.creation.to_be_bytes());
    Ok(())
}

fn enc_port(buf: &mut Vec<u8>, port: &Port, options: &EncodeOptions) -> Result<(), CodecError> {
    match u32::try_from(port.id) {
        Ok(id) => {
            buf.push(NEW_PORT_EXT);
            enc_atom(buf, &port.node, options)?;
            buf.extend_from_slice(&id.to_be_bytes());
        }
        Err(_) => {
            buf.push(V4_PORT_EXT);
            enc_atom(buf, &port.node, options)?;
            buf.extend_from_slice(&port.id.to_be_bytes());
        }
    }
    buf.extend_from_slice(&port.creation.to_be_bytes());
    Ok(())
}

fn enc_reference(
    buf: &mut Vec<u8>,
    reference: &Reference,
    options: &EncodeOptions,
) -> Result<(), CodecError> {
    let len = u16::try_from(reference.ids.len()).map_err(|_| CodecError::TermTooLarge)?;
    buf.push(NEWER_REFERENCE_EXT);
    buf.extend_from_slice(&len.to_be_bytes());
    enc_atom(buf, &reference.node, options)?;
    buf.extend_from_slice(&reference.creation.to_be_bytes());
    for id in &reference.ids {
        buf.extend_from_slice(&id.to_be_bytes());
    }
    Ok(())
}

fn enc_export(
    buf: &mut Vec<u8>,
    export: &Export,
    options: &EncodeOptions,
) -> Result<(), CodecError> {
    buf.push(EXPORT_EXT);
    enc_atom(buf, &export.module, options)?;
    enc_atom(buf, &export.function, options)?;
    buf.push(SMALL_INTEGER_EXT);
    buf.push(export.arity);
    Ok(())
}

/// Encode a closure as `NEW_FUN_EXT`
///
/// The leading size field covers the whole encoding after the tag, so it is
/// patched in once the free variables have been written.
fn enc_fun(buf: &mut Vec<u8>, fun: &Fun, options: &EncodeOptions) -> Result<(), CodecError> {
    buf.push(NEW_FUN_EXT);
    let size_at = buf.len();
    buf.extend_from_slice(&[0; 4]);
    buf.push(fun.arity);
    buf.extend_from_slice(&fun.uniq);
    buf.extend_from_slice(&fun.index.to_be_bytes());
    put_len_u32(buf, fun.free_vars.len())?;
    enc_atom(buf, &fun.module, options)?;
    enc_u32_integer(buf, fun.old_index);
    enc_u32_integer(buf, fun.old_uniq);
    enc_pid(buf, &fun.pid, options)?;
    for var in &fun.free_vars {
        enc_term(buf, var, options)?;
    }
    let size = u32::try_from(buf.len() - size_at).map_err(|_| CodecError::TermTooLarge)?;
    buf[size_at..size_at + 4].copy_from_slice(&size.to_be_bytes());
    Ok(())
}

/// Encode a closure in the `FUN_EXT` layout it was decoded from
fn enc_old_fun(buf: &mut Vec<u8>, fun: &OldFun, options: &EncodeOptions) -> Result<(), CodecError> {
    buf.push(FUN_EXT);
    put_len_u32(buf, fun.free_vars.len())?;
    enc_pid(buf, &fun.pid, options)?;
    enc_atom(buf, &fun.module, options)?;
    enc_u32_integer(buf, fun.index);
    enc_u32_integer(buf, fun.uniq);
    for var in &fun.free_vars {
        enc_term(buf, var, options)?;
    }
    Ok(())
}

/// A 32-bit field carried as an integer term: `SMALL_INTEGER_EXT` or the raw
/// bits in `INTEGER_EXT`
fn enc_u32_integer(buf: &mut Vec<u8>, value: u32) {
    match u8::try_from(value) {
        Ok(byte) => {
            buf.push(SMALL_INTEGER_EXT);
            buf.push(byte);
        }
        Err(_) => {
            buf.push(INTEGER_EXT);
            buf.extend_from_slice(&value.to_be_bytes());
        }
    }
}

fn put_len_u32(buf: &mut Vec<u8>, len: usize) -> Result<(), CodecError> {
    let len = u32::try_from(len).map_err(|_| CodecError::TermTooLarge)?;
    buf.extend_from_slice(&len.to_be_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_terms::Map;

    fn enc(term: &Term) -> Vec<u8> {
        encode(term).unwrap()
    }

    #[test]
    fn test_enc_term_nil() {
        assert_eq!(enc(&Term::nil()), vec![131, 106]);
    }

    #[test]
    fn test_enc_integer_tags() {
        assert_eq!(enc(&Term::from(42)), vec![131, 97, 42]);
        assert_eq!(enc(&Term::from(255)), vec![131, 97, 255]);
        assert_eq!(enc(&Term::from(256)), vec![131, 98, 0, 0, 1, 0]);
        assert_eq!(enc(&Term::from(-1)), vec![131, 98, 255, 255, 255, 255]);
        assert_eq!(enc(&Term::from(2_147_483_648i64)), vec![131, 110, 4, 0, 0, 0, 0, 128]);
        assert_eq!(enc(&Term::from(-2_147_483_649i64)), vec![131, 110, 4, 1, 1, 0, 0, 128]);
    }

    #[test]
    fn test_enc_large_big() {
        let magnitude = vec![1u8; 300];
        let term = Term::Integer(BigNumber::from_sign_magnitude(true, &magnitude));
        let bytes = enc(&term);
        assert_eq!(&bytes[..7], &[131, 111, 0, 0, 1, 44, 1]);
        assert_eq!(bytes.len(), 7 + 300);
    }

    #[test]
    fn test_enc_float() {
        let bytes = enc(&Term::from(1.5));
        assert_eq!(bytes, vec![131, 70, 0x3F, 0xF8, 0, 0, 0, 0, 0, 0]);
        assert_eq!(encode(&Term::Float(f64::NAN)), Err(CodecError::InvalidFloat));
    }

    #[test]
    fn test_enc_atoms() {
        assert_eq!(enc(&Term::atom("ok")), vec![131, 119, 2, b'o', b'k']);
        let legacy = EncodeOptions::new().legacy_atoms(true);
        assert_eq!(encode_with(&Term::atom("ok"), &legacy).unwrap(), vec![131, 115, 2, b'o', b'k']);
        assert_eq!(
            encode_with(&Term::atom("caf\u{e9}"), &legacy).unwrap(),
            vec![131, 115, 4, b'c', b'a', b'f', 0xE9]
        );
        assert_eq!(encode_with(&Term::atom("\u{3bb}"), &legacy), Err(CodecError::AtomNotLatin1));
    }

    #[test]
    fn test_enc_long_atoms() {
        // 200 two-byte characters: over 255 bytes but within the character limit
        let name: String = std::iter::repeat('\u{e9}').take(200).collect();
        let bytes = enc(&Term::atom(&name));
        assert_eq!(&bytes[..4], &[131, 118, 1, 144]);

        let too_long: String = std::iter::repeat('a').take(256).collect();
        assert_eq!(encode(&Term::atom(&too_long)), Err(CodecError::AtomTooLong));
    }

    #[test]
    fn test_enc_tuple() {
        let term = Term::tuple(vec![Term::from(1), Term::from(2), Term::from(3)]);
        assert_eq!(enc(&term), vec![131, 104, 3, 97, 1, 97, 2, 97, 3]);

        let large = Term::tuple(vec![Term::nil(); 256]);
        let bytes = enc(&large);
        assert_eq!(&bytes[..6], &[131, 105, 0, 0, 1, 0]);
    }

    #[test]
    fn test_enc_lists_and_strings() {
        let list = Term::List(vec![Term::from(1), Term::atom("a")]);
        assert_eq!(enc(&list), vec![131, 108, 0, 0, 0, 2, 97, 1, 119, 1, b'a', 106]);
        assert_eq!(enc(&Term::from("hi")), vec![131, 107, 0, 2, b'h', b'i']);

        let long = Term::String(vec![b'x'; 65_536]);
        let bytes = enc(&long);
        assert_eq!(&bytes[..6], &[131, 108, 0, 1, 0, 0]);
        assert_eq!(&bytes[6..8], &[97, b'x']);
        assert_eq!(bytes.last(), Some(&106));
    }

    #[test]
    fn test_enc_improper_list() {
        let term = Term::ImproperList {
            elements: vec![Term::from(1)],
            tail: Box::new(Term::from(2)),
        };
        assert_eq!(enc(&term), vec![131, 108, 0, 0, 0, 1, 97, 1, 97, 2]);

        let nil_tail = Term::ImproperList {
            elements: vec![Term::from(1)],
            tail: Box::new(Term::nil()),
        };
        assert!(matches!(encode(&nil_tail), Err(CodecError::InvalidTerm(_))));
        let empty = Term::ImproperList { elements: vec![], tail: Box::new(Term::from(2)) };
        assert!(matches!(encode(&empty), Err(CodecError::InvalidTerm(_))));
    }

    #[test]
    fn test_enc_binaries() {
        assert_eq!(enc(&Term::binary(vec![1, 2])), vec![131, 109, 0, 0, 0, 2, 1, 2]);
        let bits = Term::BitBinary { data: vec![0xA0], bits: 3 };
        assert_eq!(enc(&bits), vec![131, 77, 0, 0, 0, 1, 3, 0xA0]);
        let full = Term::BitBinary { data: vec![0xA0], bits: 8 };
        assert!(matches!(encode(&full), Err(CodecError::InvalidTerm(_))));
    }

    #[test]
    fn test_enc_map() {
        let map = Map::from_pairs(vec![(Term::atom("k"), Term::from(1))]);
        assert_eq!(enc(&Term::Map(map)), vec![131, 116, 0, 0, 0, 1, 119, 1, b'k', 97, 1]);
    }

    #[test]
    fn test_enc_identifiers() {
        let pid = Pid { node: Atom::new("n"), id: 1, serial: 2, creation: 3 };
        assert_eq!(
            enc(&Term::Pid(pid)),
            vec![131, 88, 119, 1, b'n', 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3]
        );

        let port = Port { node: Atom::new("n"), id: 5, creation: 1 };
        assert_eq!(enc(&Term::Port(port))[1], NEW_PORT_EXT);
        let v4 = Port { node: Atom::new("n"), id: u64::from(u32::MAX) + 1, creation: 1 };
        assert_eq!(enc(&Term::Port(v4))[1], V4_PORT_EXT);

        let reference = Reference { node: Atom::new("n"), creation: 1, ids: vec![7, 8] };
        assert_eq!(
            enc(&Term::Reference(reference)),
            vec![131, 90, 0, 2, 119, 1, b'n', 0, 0, 0, 1, 0, 0, 0, 7, 0, 0, 0, 8]
        );

        let export = Export { module: Atom::new("m"), function: Atom::new("f"), arity: 2 };
        assert_eq!(enc(&Term::Export(export)), vec![131, 113, 119, 1, b'm', 119, 1, b'f', 97, 2]);
    }

    #[test]
    fn test_enc_fun_size_field() {
        let fun = Fun {
            arity: 1,
            uniq: [9; 16],
            index: 0,
            module: Atom::new("m"),
            old_index: 0,
            old_uniq: 300,
            pid: Pid { node: Atom::new("n"), id: 1, serial: 0, creation: 1 },
            free_vars: vec![Term::from(1)],
        };
        let bytes = enc(&Term::Fun(Box::new(fun)));
        assert_eq!(bytes[1], NEW_FUN_EXT);
        let size = u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]) as usize;
        assert_eq!(size, bytes.len() - 2);
    }

    #[test]
    fn test_enc_old_fun_layout() {
        let fun = OldFun {
            pid: Pid { node: Atom::new("n"), id: 5, serial: 0, creation: 1 },
            module: Atom::new("m"),
            index: 3,
            uniq: 70_000,
            free_vars: vec![],
        };
        assert_eq!(
            enc(&Term::OldFun(Box::new(fun))),
            vec![
                131, 117, 0, 0, 0, 0, 88, 119, 1, b'n', 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0, 1, 119,
                1, b'm', 97, 3, 98, 0, 1, 0x11, 0x70,
            ]
        );
    }

    #[test]
    fn test_compressed_only_when_smaller() {
        let options = EncodeOptions::new().compression(crate::CompressionLevel::Default);
        let small = encode_with(&Term::from(1), &options).unwrap();
        assert_eq!(small, vec![131, 97, 1]);

        let big = Term::binary(vec![0u8; 1000]);
        let bytes = encode_with(&big, &options).unwrap();
        assert_eq!(&bytes[..2], &[131, 80]);
        assert_eq!(&bytes[2..6], &1005u32.to_be_bytes());
        assert!(bytes.len() < 100);
    }
}
