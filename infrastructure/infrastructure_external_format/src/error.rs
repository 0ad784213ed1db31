//! Codec Errors
//!
//! One error type for every way encoding or decoding can fail.
//! Based on the encode/decode error codes in external.c

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

use thiserror::Error;

/// Errors raised while encoding or decoding external term format data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The input buffer was empty
    #[error("empty input")]
    Empty,
    /// The first byte was not the version magic 131
    #[error("invalid version byte {0}, expected 131")]
    InvalidVersion(u8),
    /// A tag this codec does not handle
    #[error("unsupported tag {0}")]
    UnsupportedTag(u8),
    /// The buffer ended mid-term, or a length field claims more bytes than remain
    #[error("truncated input: needed {needed} bytes, {available} available")]
    Truncated {
        /// Bytes required to continue
        needed: usize,
        /// Bytes left in the buffer
        available: usize,
    },
    /// Atom text was not valid in its declared encoding
    #[error("invalid atom encoding")]
    InvalidAtom,
    /// Atom longer than 255 characters
    #[error("atom exceeds 255 characters")]
    AtomTooLong,
    /// Atom cannot be written with the Latin-1 tags
    #[error("atom is not representable in Latin-1")]
    AtomNotLatin1,
    /// Old-style float text that does not parse
    #[error("invalid float")]
    InvalidFloat,
    /// Structurally invalid term
    #[error("invalid term: {0}")]
    InvalidTerm(String),
    /// Nesting deeper than the configured limit
    #[error("term nesting exceeds depth {max}")]
    TooDeep {
        /// Configured limit
        max: usize,
    },
    /// Bytes left over after a complete term
    #[error("{0} trailing bytes after term")]
    TrailingBytes(usize),
    /// zlib failure or a size mismatch in a compressed term
    #[error("compression error: {0}")]
    Compression(String),
    /// A length does not fit its wire field
    #[error("term too large to encode")]
    TermTooLarge,
}

impl CodecError {
    /// Truncation error for a read of `needed` bytes when `available` remain
    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        CodecError::Truncated { needed, available }
    }
}
