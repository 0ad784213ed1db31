//! Tag Constants
//!
//! Tag bytes of the external term format.
//! These match the constants defined in erts/emulator/beam/external.h

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

/// External term format version magic byte
pub const VERSION_MAGIC: u8 = 131;

/// New float (IEEE 754, 8 bytes)
pub const NEW_FLOAT_EXT: u8 = 70;
/// Bitstring
pub const BIT_BINARY_EXT: u8 = 77;
/// Zlib-compressed term
pub const COMPRESSED: u8 = 80;
/// Atom cache reference (distribution header only)
pub const ATOM_CACHE_REF: u8 = 82;
/// PID (32-bit creation)
pub const NEW_PID_EXT: u8 = 88;
/// Port (32-bit id and creation)
pub const NEW_PORT_EXT: u8 = 89;
/// Reference (32-bit creation)
pub const NEWER_REFERENCE_EXT: u8 = 90;
/// Small integer (0-255)
pub const SMALL_INTEGER_EXT: u8 = 97;
/// Integer (32-bit signed)
pub const INTEGER_EXT: u8 = 98;
/// Float (old format, 31 bytes of text)
pub const FLOAT_EXT: u8 = 99;
/// Atom (Latin-1, 2-byte length)
pub const ATOM_EXT: u8 = 100;
/// Reference (oldest format)
pub const REFERENCE_EXT: u8 = 101;
/// Port (8-bit creation)
pub const PORT_EXT: u8 = 102;
/// PID (8-bit creation)
pub const PID_EXT: u8 = 103;
/// Small tuple (arity <= 255)
pub const SMALL_TUPLE_EXT: u8 = 104;
/// Large tuple
pub const LARGE_TUPLE_EXT: u8 = 105;
/// Nil (empty list)
pub const NIL_EXT: u8 = 106;
/// List of bytes
pub const STRING_EXT: u8 = 107;
/// List
pub const LIST_EXT: u8 = 108;
/// Binary
pub const BINARY_EXT: u8 = 109;
/// Small big integer (<= 255 magnitude bytes)
pub const SMALL_BIG_EXT: u8 = 110;
/// Large big integer
pub const LARGE_BIG_EXT: u8 = 111;
/// Closure
pub const NEW_FUN_EXT: u8 = 112;
/// External function
pub const EXPORT_EXT: u8 = 113;
/// Reference (8-bit creation)
pub const NEW_REFERENCE_EXT: u8 = 114;
/// Small atom (Latin-1)
pub const SMALL_ATOM_EXT: u8 = 115;
/// Map
pub const MAP_EXT: u8 = 116;
/// Closure (old format)
pub const FUN_EXT: u8 = 117;
/// Atom UTF-8
pub const ATOM_UTF8_EXT: u8 = 118;
/// Small atom UTF-8
pub const SMALL_ATOM_UTF8_EXT: u8 = 119;
/// Port (64-bit id)
pub const V4_PORT_EXT: u8 = 120;
/// Locally encoded term
pub const LOCAL_EXT: u8 = 121;

/// Maximum value for INTEGER_EXT (2^31 - 1)
pub const INTEGER_EXT_MAX: i64 = 2_147_483_647;
/// Minimum value for INTEGER_EXT (-2^31)
pub const INTEGER_EXT_MIN: i64 = -2_147_483_648;

/// Longest byte list STRING_EXT can carry
pub const MAX_STRING_EXT_LEN: usize = 65_535;
