//! Codec Facades
//!
//! Term to bytes and back, without a session.

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

pub use infrastructure_external_format::{
    decode, decode_exact, decode_exact_with, decode_with, encode, encode_with, encoded_size,
};

#[cfg(test)]
mod tests {
    use super::*;
    use entities_terms::Term;
    use infrastructure_external_format::{CodecError, EncodeOptions};

    #[test]
    fn test_encode_decode() {
        let term = Term::tuple(vec![Term::atom("response"), Term::from("12:00")]);
        let bytes = encode(&term).unwrap();
        assert_eq!(encoded_size(&term, &EncodeOptions::default()).unwrap(), bytes.len());
        assert_eq!(decode_exact(&bytes).unwrap(), term);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = encode(&Term::atom("ok")).unwrap();
        bytes.push(0);
        assert_eq!(decode_exact(&bytes), Err(CodecError::TrailingBytes(1)));
    }
}
