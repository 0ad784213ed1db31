//! Codec Options
//!
//! Knobs for [`encode_with`](crate::encode_with) and
//! [`decode_with`](crate::decode_with). The defaults produce and accept the
//! canonical encoding.

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

use crate::compression::CompressionLevel;

/// Default nesting limit for decoding
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default limit on the inflated size of a compressed term (64 MiB)
pub const DEFAULT_MAX_UNCOMPRESSED_SIZE: usize = 64 * 1024 * 1024;

/// Options for encoding
///
/// # Examples
///
/// ```rust
/// use infrastructure_external_format::{CompressionLevel, EncodeOptions};
///
/// let options = EncodeOptions::new()
///     .legacy_atoms(true)
///     .compression(CompressionLevel::BestSpeed);
/// assert!(options.uses_legacy_atoms());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    legacy_atoms: bool,
    compression: Option<CompressionLevel>,
}

impl EncodeOptions {
    /// Canonical encoding: UTF-8 atom tags, no compression
    pub fn new() -> Self {
        Self::default()
    }

    /// Write atoms with the Latin-1 `SMALL_ATOM_EXT`/`ATOM_EXT` tags
    ///
    /// Older gateways only decode these. Atoms outside Latin-1 then fail to
    /// encode with [`CodecError::AtomNotLatin1`](crate::CodecError::AtomNotLatin1).
    pub fn legacy_atoms(mut self, enabled: bool) -> Self {
        self.legacy_atoms = enabled;
        self
    }

    /// Compress the encoded term with zlib at `level` when that makes it smaller
    pub fn compression(mut self, level: CompressionLevel) -> Self {
        self.compression = Some(level);
        self
    }

    /// Whether atoms use the Latin-1 tags
    pub fn uses_legacy_atoms(&self) -> bool {
        self.legacy_atoms
    }

    /// The compression level, if compression is enabled
    pub fn compression_level(&self) -> Option<CompressionLevel> {
        self.compression
    }
}

/// Options for decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    max_depth: usize,
    max_uncompressed_size: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_uncompressed_size: DEFAULT_MAX_UNCOMPRESSED_SIZE,
        }
    }
}

impl DecodeOptions {
    /// Default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Deepest nesting of tuples, lists, maps and funs accepted
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Largest inflated size accepted for a compressed term
    pub fn max_uncompressed_size(mut self, size: usize) -> Self {
        self.max_uncompressed_size = size;
        self
    }

    /// Nesting limit
    pub fn depth_limit(&self) -> usize {
        self.max_depth
    }

    /// Inflated size limit
    pub fn uncompressed_size_limit(&self) -> usize {
        self.max_uncompressed_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let encode = EncodeOptions::default();
        assert!(!encode.uses_legacy_atoms());
        assert_eq!(encode.compression_level(), None);

        let decode = DecodeOptions::default();
        assert_eq!(decode.depth_limit(), 512);
        assert_eq!(decode.uncompressed_size_limit(), 64 * 1024 * 1024);
    }

    #[test]
    fn test_builders() {
        let decode = DecodeOptions::new().max_depth(8).max_uncompressed_size(1024);
        assert_eq!(decode.depth_limit(), 8);
        assert_eq!(decode.uncompressed_size_limit(), 1024);
    }
}
