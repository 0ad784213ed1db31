//! Decoding Module
//!
//! Provides core decoding functions for external term format.
//! Based on dec_term(), dec_atom(), dec_pid() and erts_decode_ext() from external.c
//!
//! The decoder walks the buffer with a bounds-checked cursor. Every length
//! field is checked against the bytes that remain before anything is read or
//! allocated, so hostile input fails with [`CodecError::Truncated`] instead of
//! panicking or reserving memory it does not have.

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

use crate::compression::decompress;
use crate::error::CodecError;
use crate::options::DecodeOptions;
use crate::tags::*;
use entities_terms::{
    Atom, BigNumber, Export, Fun, Map, OldFun, Pid, Port, Reference, Term, Tuple,
    MAX_ATOM_CHARACTERS,
};

/// Decode one term with the default options
///
/// Returns the term and the number of bytes consumed, version byte included.
/// Bytes after the term are left alone.
///
/// # Examples
///
/// ```rust
/// use entities_terms::Term;
/// use infrastructure_external_format::decode;
///
/// let (term, used) = decode(&[131, 97, 42, 0xFF]).unwrap();
/// assert_eq!(term, Term::from(42));
/// assert_eq!(used, 3);
/// ```
pub fn decode(data: &[u8]) -> Result<(Term, usize), CodecError> {
    decode_with(data, &DecodeOptions::default())
}

/// Decode one term from external format
///
/// Based on `erts_decode_ext()` from external.c. Checks the version magic
/// byte, inflates a `COMPRESSED` term if present, then decodes the term.
///
/// # Arguments
/// * `data` - The encoded bytes in ETF format
/// * `options` - Depth and inflation limits
///
/// # Returns
/// * `Ok((Term, usize))` - Decoded term and bytes consumed
/// * `Err(CodecError)` - Decoding error
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<(Term, usize), CodecError> {
    let (&version, rest) = data.split_first().ok_or(CodecError::Empty)?;
    if version != VERSION_MAGIC {
        return Err(CodecError::InvalidVersion(version));
    }

    if rest.first() == Some(&COMPRESSED) {
        let mut header = Decoder::new(&rest[1..], options);
        let size = header.read_u32()? as usize;
        if size > options.uncompressed_size_limit() {
            return Err(CodecError::Compression(format!(
                "uncompressed size {} exceeds limit {}",
                size,
                options.uncompressed_size_limit()
            )));
        }
        let (inflated, used) = decompress(&rest[5..], size)?;
        let mut decoder = Decoder::new(&inflated, options);
        let term = decoder.dec_term(0)?;
        if decoder.remaining() > 0 {
            return Err(CodecError::TrailingBytes(decoder.remaining()));
        }
        // version, tag, size, zlib stream
        return Ok((term, 1 + 1 + 4 + used));
    }

    let mut decoder = Decoder::new(rest, options);
    let term = decoder.dec_term(0)?;
    Ok((term, 1 + decoder.pos))
}

/// Decode a buffer that must hold exactly one term
///
/// Fails with [`CodecError::TrailingBytes`] when anything follows the term.
/// This is the form used for framed messages, where a frame carries one term.
pub fn decode_exact(data: &[u8]) -> Result<Term, CodecError> {
    decode_exact_with(data, &DecodeOptions::default())
}

/// [`decode_exact`] with explicit options
pub fn decode_exact_with(data: &[u8], options: &DecodeOptions) -> Result<Term, CodecError> {
    let (term, used) = decode_with(data, options)?;
    if used < data.len() {
        return Err(CodecError::TrailingBytes(data.len() - used));
    }
    Ok(term)
}

/// Cursor over an encoded term
struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(buf: &'a [u8], options: &DecodeOptions) -> Self {
        Self { buf, pos: 0, max_depth: options.depth_limit() }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if n > self.remaining() {
            return Err(CodecError::truncated(n, self.remaining()));
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take_array::<1>()?[0])
    }

    fn read_u16(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_be_bytes(self.take_array()?))
    }

    fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_be_bytes(self.take_array()?))
    }

    /// Capacity for `count` items of at least `min_size` bytes each, capped
    /// by what the buffer can actually hold
    fn capacity_for(&self, count: usize, min_size: usize) -> usize {
        count.min(self.remaining() / min_size.max(1))
    }

    /// Decode a term
    ///
    /// Based on `dec_term()` from external.c. `depth` counts the containers
    /// enclosing this term.
    fn dec_term(&mut self, depth: usize) -> Result<Term, CodecError> {
        let tag = self.read_u8()?;
        match tag {
            SMALL_INTEGER_EXT => Ok(Term::from(u32::from(self.read_u8()?))),
            INTEGER_EXT => Ok(Term::from(i32::from_be_bytes(self.take_array()?))),
            SMALL_BIG_EXT => {
                let len = usize::from(self.read_u8()?);
                self.dec_big(len)
            }
            LARGE_BIG_EXT => {
                let len = self.read_u32()? as usize;
                self.dec_big(len)
            }
            NEW_FLOAT_EXT => {
                let value = f64::from_be_bytes(self.take_array()?);
                if !value.is_finite() {
                    return Err(CodecError::InvalidFloat);
                }
                Ok(Term::Float(value))
            }
            FLOAT_EXT => self.dec_old_float(),
            ATOM_EXT | SMALL_ATOM_EXT | ATOM_UTF8_EXT | SMALL_ATOM_UTF8_EXT => {
                Ok(Term::Atom(self.dec_atom_body(tag)?))
            }
            SMALL_TUPLE_EXT => {
                let arity = usize::from(self.read_u8()?);
                self.dec_tuple(arity, depth)
            }
            LARGE_TUPLE_EXT => {
                let arity = self.read_u32()? as usize;
                self.dec_tuple(arity, depth)
            }
            NIL_EXT => Ok(Term::nil()),
            STRING_EXT => {
                let len = usize::from(self.read_u16()?);
                Ok(Term::String(self.take(len)?.to_vec()))
            }
            LIST_EXT => self.dec_list(depth),
            BINARY_EXT => {
                let len = self.read_u32()? as usize;
                Ok(Term::Binary(self.take(len)?.to_vec()))
            }
            BIT_BINARY_EXT => {
                let len = self.read_u32()? as usize;
                let bits = self.read_u8()?;
                if len == 0 || !(1..=8).contains(&bits) {
                    return Err(CodecError::InvalidTerm(format!(
                        "bitstring of {} bytes cannot end in {} bits",
                        len, bits
                    )));
                }
                let data = self.take(len)?.to_vec();
                if bits == 8 {
                    Ok(Term::Binary(data))
                } else {
                    Ok(Term::BitBinary { data, bits })
                }
            }
            MAP_EXT => self.dec_map(depth),
            PID_EXT | NEW_PID_EXT => Ok(Term::Pid(self.dec_pid_body(tag)?)),
            PORT_EXT | NEW_PORT_EXT | V4_PORT_EXT => Ok(Term::Port(self.dec_port_body(tag)?)),
            REFERENCE_EXT | NEW_REFERENCE_EXT | NEWER_REFERENCE_EXT => {
                Ok(Term::Reference(self.dec_reference_body(tag)?))
            }
            EXPORT_EXT => {
                let module = self.dec_atom()?;
                let function = self.dec_atom()?;
                let arity = self.dec_small_u32()?;
                let arity = u8::try_from(arity)
                    .map_err(|_| {
                        CodecError::InvalidTerm(format!("export arity {} out of range", arity))
                    })?;
                Ok(Term::Export(Export { module, function, arity }))
            }
            NEW_FUN_EXT => self.dec_fun(depth),
            FUN_EXT => self.dec_old_fun(depth),
            _ => Err(CodecError::UnsupportedTag(tag)),
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, CodecError> {
        let inner = depth + 1;
        if inner > self.max_depth {
            return Err(CodecError::TooDeep { max: self.max_depth });
        }
        Ok(inner)
    }

    fn dec_big(&mut self, len: usize) -> Result<Term, CodecError> {
        let sign = self.read_u8()?;
        if sign > 1 {
            return Err(CodecError::InvalidTerm(format!("invalid bignum sign byte {}", sign)));
        }
        let magnitude = self.take(len)?;
        Ok(Term::Integer(BigNumber::from_sign_magnitude(sign == 1, magnitude)))
    }

    /// `FLOAT_EXT`: 31 bytes of `printf("%.20e")` text, NUL padded
    fn dec_old_float(&mut self) -> Result<Term, CodecError> {
        let raw = self.take(31)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        let text = std::str::from_utf8(&raw[..end]).map_err(|_| CodecError::InvalidFloat)?;
        let value: f64 = text.trim().parse().map_err(|_| CodecError::InvalidFloat)?;
        if !value.is_finite() {
            return Err(CodecError::InvalidFloat);
        }
        Ok(Term::Float(value))
    }

    /// Decode an atom term, failing if the next term is not an atom
    fn dec_atom(&mut self) -> Result<Atom, CodecError> {
        let tag = self.read_u8()?;
        match tag {
            ATOM_EXT | SMALL_ATOM_EXT | ATOM_UTF8_EXT | SMALL_ATOM_UTF8_EXT => {
                self.dec_atom_body(tag)
            }
            LOCAL_EXT | ATOM_CACHE_REF => Err(CodecError::UnsupportedTag(tag)),
            _ => Err(CodecError::InvalidTerm(format!("expected atom, found tag {}", tag))),
        }
    }

    /// Based on `dec_atom()` from external.c
    fn dec_atom_body(&mut self, tag: u8) -> Result<Atom, CodecError> {
        let len = match tag {
            SMALL_ATOM_EXT | SMALL_ATOM_UTF8_EXT => usize::from(self.read_u8()?),
            _ => usize::from(self.read_u16()?),
        };
        let bytes = self.take(len)?;
        let atom = match tag {
            ATOM_EXT | SMALL_ATOM_EXT => Atom::from_latin1(bytes),
            _ => Atom::new(std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidAtom)?),
        };
        if atom.char_count() > MAX_ATOM_CHARACTERS {
            return Err(CodecError::AtomTooLong);
        }
        Ok(atom)
    }

    fn dec_tuple(&mut self, arity: usize, depth: usize) -> Result<Term, CodecError> {
        let inner = self.enter(depth)?;
        let mut elements = Vec::with_capacity(self.capacity_for(arity, 1));
        for _ in 0..arity {
            elements.push(self.dec_term(inner)?);
        }
        Ok(Term::Tuple(Tuple::new(elements)))
    }

    /// `LIST_EXT`: elements then a tail
    ///
    /// A nil tail gives a proper list. A tail that is itself a list is folded
    /// in, so a list has the same shape however it was split on the wire.
    fn dec_list(&mut self, depth: usize) -> Result<Term, CodecError> {
        let inner = self.enter(depth)?;
        let len = self.read_u32()? as usize;
        let mut elements = Vec::with_capacity(self.capacity_for(len, 1));
        for _ in 0..len {
            elements.push(self.dec_term(inner)?);
        }
        let tail = self.dec_term(inner)?;
        if elements.is_empty() {
            return Ok(tail);
        }
        Ok(match tail {
            Term::List(rest) => {
                elements.extend(rest);
                Term::List(elements)
            }
            Term::String(bytes) => {
                elements.extend(bytes.into_iter().map(|b| Term::from(u32::from(b))));
                Term::List(elements)
            }
            Term::ImproperList { elements: rest, tail } => {
                elements.extend(rest);
                Term::ImproperList { elements, tail }
            }
            tail => Term::ImproperList { elements, tail: Box::new(tail) },
        })
    }

    fn dec_map(&mut self, depth: usize) -> Result<Term, CodecError> {
        let inner = self.enter(depth)?;
        let arity = self.read_u32()? as usize;
        let mut pairs = Vec::with_capacity(self.capacity_for(arity, 2));
        for _ in 0..arity {
            let key = self.dec_term(inner)?;
            let value = self.dec_term(inner)?;
            pairs.push((key, value));
        }
        Map::from_distinct_pairs(pairs)
            .map(Term::Map)
            .map_err(|key| CodecError::InvalidTerm(format!("duplicate map key {}", key)))
    }

    /// Creation is one byte in the old tags and four in the new ones
    fn dec_creation(&mut self, wide: bool) -> Result<u32, CodecError> {
        if wide {
            self.read_u32()
        } else {
            Ok(u32::from(self.read_u8()?))
        }
    }

    /// Based on `dec_pid()` from external.c
    fn dec_pid_body(&mut self, tag: u8) -> Result<Pid, CodecError> {
        let node = self.dec_atom()?;
        let id = self.read_u32()?;
        let serial = self.read_u32()?;
        let creation = self.dec_creation(tag == NEW_PID_EXT)?;
        Ok(Pid { node, id, serial, creation })
    }

    fn dec_port_body(&mut self, tag: u8) -> Result<Port, CodecError> {
        let node = self.dec_atom()?;
        let id = if tag == V4_PORT_EXT {
            self.read_u64()?
        } else {
            u64::from(self.read_u32()?)
        };
        let creation = self.dec_creation(tag != PORT_EXT)?;
        Ok(Port { node, id, creation })
    }

    fn dec_reference_body(&mut self, tag: u8) -> Result<Reference, CodecError> {
        if tag == REFERENCE_EXT {
            let node = self.dec_atom()?;
            let id = self.read_u32()?;
            let creation = self.dec_creation(false)?;
            return Ok(Reference { node, creation, ids: vec![id] });
        }
        let len = usize::from(self.read_u16()?);
        let node = self.dec_atom()?;
        let creation = self.dec_creation(tag == NEWER_REFERENCE_EXT)?;
        let mut ids = Vec::with_capacity(self.capacity_for(len, 4));
        for _ in 0..len {
            ids.push(self.read_u32()?);
        }
        Ok(Reference { node, creation, ids })
    }

    /// An integer term that must fit in 32 bits
    ///
    /// `INTEGER_EXT` values are taken as raw bits, which is how 32-bit fields
    /// such as a fun's old uniq are carried.
    fn dec_small_u32(&mut self) -> Result<u32, CodecError> {
        let tag = self.read_u8()?;
        match tag {
            SMALL_INTEGER_EXT => Ok(u32::from(self.read_u8()?)),
            INTEGER_EXT => self.read_u32(),
            _ => Err(CodecError::InvalidTerm(format!("expected small integer, found tag {}", tag))),
        }
    }

    fn dec_pid(&mut self) -> Result<Pid, CodecError> {
        let tag = self.read_u8()?;
        match tag {
            PID_EXT | NEW_PID_EXT => self.dec_pid_body(tag),
            _ => Err(CodecError::InvalidTerm(format!("expected pid, found tag {}", tag))),
        }
    }

    /// `NEW_FUN_EXT`; the size field must cover exactly the bytes decoded
    fn dec_fun(&mut self, depth: usize) -> Result<Term, CodecError> {
        let inner = self.enter(depth)?;
        let start = self.pos;
        let size = self.read_u32()? as usize;
        if size < 4 || size - 4 > self.remaining() {
            return Err(CodecError::truncated(size.saturating_sub(4), self.remaining()));
        }
        let arity = self.read_u8()?;
        let uniq = self.take_array::<16>()?;
        let index = self.read_u32()?;
        let num_free = self.read_u32()? as usize;
        let module = self.dec_atom()?;
        let old_index = self.dec_small_u32()?;
        let old_uniq = self.dec_small_u32()?;
        let pid = self.dec_pid()?;
        let mut free_vars = Vec::with_capacity(self.capacity_for(num_free, 1));
        for _ in 0..num_free {
            free_vars.push(self.dec_term(inner)?);
        }
        if self.pos - start != size {
            return Err(CodecError::InvalidTerm(format!(
                "fun size field {} does not match encoded size {}",
                size,
                self.pos - start
            )));
        }
        Ok(Term::Fun(Box::new(Fun {
            arity,
            uniq,
            index,
            module,
            old_index,
            old_uniq,
            pid,
            free_vars,
        })))
    }

    /// `FUN_EXT`, the closure layout that predates `NEW_FUN_EXT`
    fn dec_old_fun(&mut self, depth: usize) -> Result<Term, CodecError> {
        let inner = self.enter(depth)?;
        let num_free = self.read_u32()? as usize;
        let pid = self.dec_pid()?;
        let module = self.dec_atom()?;
        let index = self.dec_small_u32()?;
        let uniq = self.dec_small_u32()?;
        let mut free_vars = Vec::with_capacity(self.capacity_for(num_free, 1));
        for _ in 0..num_free {
            free_vars.push(self.dec_term(inner)?);
        }
        Ok(Term::OldFun(Box::new(OldFun { pid, module, index, uniq, free_vars })))
    }
}
