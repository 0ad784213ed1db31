//! Infrastructure Layer: External Term Format
//!
//! Provides external term format (ETF) encoding and decoding of the terms
//! defined in `entities_terms`. This is the byte format of
//! `erlang:term_to_binary/1` and `erlang:binary_to_term/1`, and the payload
//! format of every gateway frame.
//!
//! ## Overview
//!
//! Encoded data starts with the version magic byte (131) followed by one
//! tagged term. The encoder always emits the canonical encoding; the decoder
//! also accepts the older tags a peer may still send (Latin-1 atoms, old
//! pids/ports/references, text floats) and `COMPRESSED` terms.
//!
//! ## Modules
//!
//! - **[`encoding`](encoding/index.html)**: `encode`, `encode_with` and the
//!   per-type encoders
//! - **[`decoding`](decoding/index.html)**: `decode`, `decode_with`,
//!   `decode_exact`
//! - **[`size_calculation`](size_calculation/index.html)**: exact encoded size
//! - **[`compression`](compression/index.html)**: zlib for tag 80
//! - **[`tags`](tags/index.html)**: tag byte constants
//!
//! ## Examples
//!
//! ```rust
//! use entities_terms::Term;
//! use infrastructure_external_format::{decode_exact, encode};
//!
//! let message = Term::tuple(vec![
//!     Term::atom("register_with_group"),
//!     Term::atom("time_server"),
//! ]);
//! let bytes = encode(&message).unwrap();
//! assert_eq!(decode_exact(&bytes).unwrap(), message);
//! ```
//!
//! The functions are pure: no I/O and no logging.

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

pub mod compression;
pub mod decoding;
pub mod encoding;
pub mod error;
pub mod options;
pub mod size_calculation;
pub mod tags;

pub use compression::CompressionLevel;
pub use decoding::{decode, decode_exact, decode_exact_with, decode_with};
pub use encoding::{encode, encode_with};
pub use error::CodecError;
pub use options::{DecodeOptions, EncodeOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_UNCOMPRESSED_SIZE};
pub use size_calculation::encoded_size;
pub use tags::VERSION_MAGIC;
