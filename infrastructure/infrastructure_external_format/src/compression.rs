//! Compression Module
//!
//! zlib wrapping of encoded terms, the `COMPRESSED` (tag 80) form produced by
//! `term_to_binary(Term, [compressed])`: `131, 80, UncompressedSize:32, ZlibData`.
//! Uses the `flate2` crate.
//!
//! Based on `erts/emulator/beam/erl_zlib.c`

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

use crate::error::CodecError;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compression level enumeration matching zlib levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// No compression (0)
    None = 0,
    /// Best speed (1)
    BestSpeed = 1,
    /// Default compression (6)
    Default = 6,
    /// Best compression (9)
    BestCompression = 9,
}

impl From<CompressionLevel> for Compression {
    fn from(level: CompressionLevel) -> Self {
        Compression::new(level as u32)
    }
}

impl From<u32> for CompressionLevel {
    fn from(level: u32) -> Self {
        match level {
            0 => CompressionLevel::None,
            1..=3 => CompressionLevel::BestSpeed,
            4..=7 => CompressionLevel::Default,
            _ => CompressionLevel::BestCompression,
        }
    }
}

/// Deflate `data` into a zlib stream
pub fn compress(data: &[u8], level: CompressionLevel) -> Result<Vec<u8>, CodecError> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 16), level.into());
    encoder
        .write_all(data)
        .map_err(|e| CodecError::Compression(format!("write error: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| CodecError::Compression(format!("finish error: {}", e)))
}

/// Inflate a zlib stream that must produce exactly `expected_size` bytes
///
/// Returns the inflated bytes and the number of compressed bytes consumed, so
/// the caller can continue after the stream.
pub fn decompress(data: &[u8], expected_size: usize) -> Result<(Vec<u8>, usize), CodecError> {
    let mut decoder = ZlibDecoder::new(data);
    let mut output = Vec::with_capacity(expected_size.min(data.len().saturating_mul(4)));
    // Read one byte past the declared size to detect streams that inflate larger
    let limit = u64::try_from(expected_size)
        .map_err(|_| CodecError::TermTooLarge)?
        .saturating_add(1);
    (&mut decoder)
        .take(limit)
        .read_to_end(&mut output)
        .map_err(|e| CodecError::Compression(format!("inflate error: {}", e)))?;
    if output.len() != expected_size {
        return Err(CodecError::Compression(format!(
            "uncompressed size mismatch: declared {}, got {}",
            expected_size,
            output.len()
        )));
    }
    let consumed = usize::try_from(decoder.total_in()).map_err(|_| CodecError::TermTooLarge)?;
    Ok((output, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_decompress() {
        let data = vec![7u8; 4096];
        let compressed = compress(&data, CompressionLevel::Default).unwrap();
        assert!(compressed.len() < data.len());
        let (inflated, consumed) = decompress(&compressed, data.len()).unwrap();
        assert_eq!(inflated, data);
        assert_eq!(consumed, compressed.len());
    }

    #[test]
    fn test_decompress_size_mismatch() {
        let compressed = compress(b"hello world", CompressionLevel::BestSpeed).unwrap();
        assert!(matches!(decompress(&compressed, 5), Err(CodecError::Compression(_))));
        assert!(matches!(decompress(&compressed, 50), Err(CodecError::Compression(_))));
    }

    #[test]
    fn test_decompress_garbage() {
        assert!(matches!(decompress(&[1, 2, 3, 4], 10), Err(CodecError::Compression(_))));
    }

    #[test]
    fn test_level_from_u32() {
        assert_eq!(CompressionLevel::from(0), CompressionLevel::None);
        assert_eq!(CompressionLevel::from(6), CompressionLevel::Default);
        assert_eq!(CompressionLevel::from(12), CompressionLevel::BestCompression);
    }
}
