//! Big Number Operations
//!
//! Provides arbitrary precision integers for the `Integer` term variant.
//! Based on big.c
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! The external term format stores big integers as a sign byte followed by the
//! magnitude in little-endian byte order, so besides the usual conversions this
//! module converts to and from that (sign, magnitude) pair.

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

use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::base::num::logic::traits::SignificantBits;
use malachite::{Integer, Natural};
use std::fmt;

/// Big number representation using malachite's Integer
///
/// Small values and huge values share one representation, so an integer term
/// compares equal to another integer term exactly when the numbers are equal,
/// whichever wire tag each was decoded from.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Build a number from a sign flag and little-endian magnitude bytes
    ///
    /// # Arguments
    /// * `negative` - Whether the number is negative
    /// * `magnitude` - Absolute value, least significant byte first
    ///
    /// # Returns
    /// The number. An empty or all-zero magnitude yields zero regardless of sign.
    pub fn from_sign_magnitude(negative: bool, magnitude: &[u8]) -> Self {
        // Every u8 is a valid base-256 digit, so the conversion cannot fail
        let abs = Natural::from_power_of_2_digits_asc(8, magnitude.iter().copied())
            .unwrap_or_default();
        Self {
            value: Integer::from_sign_and_abs(!negative, abs),
        }
    }

    /// Split the number into a sign flag and little-endian magnitude bytes
    ///
    /// The magnitude has no trailing (most significant) zero bytes; zero yields
    /// an empty magnitude.
    pub fn to_sign_magnitude(&self) -> (bool, Vec<u8>) {
        let magnitude: Vec<u8> = self.value.unsigned_abs_ref().to_power_of_2_digits_asc(8);
        (self.is_negative(), magnitude)
    }

    /// Number of bytes in the little-endian magnitude
    pub fn magnitude_len(&self) -> usize {
        let bits = self.value.unsigned_abs_ref().significant_bits();
        usize::try_from(bits.div_ceil(8)).unwrap_or(usize::MAX)
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to i32
    ///
    /// Returns None if the value is out of range
    pub fn to_i32(&self) -> Option<i32> {
        i32::try_from(&self.value).ok()
    }

    /// Convert to u32
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u32(&self) -> Option<u32> {
        u32::try_from(&self.value).ok()
    }

    /// Convert to u8
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u8(&self) -> Option<u8> {
        u8::try_from(&self.value).ok()
    }

    /// Check if the number is negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl fmt::Debug for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNumber({})", self.value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_conversions() {
        let big = BigNumber::from_i64(12345);
        assert_eq!(big.to_i64(), Some(12345));
        assert_eq!(big.to_i32(), Some(12345));
        assert_eq!(big.to_u32(), Some(12345));
        assert_eq!(big.to_u8(), None);

        let neg = BigNumber::from_i64(-7);
        assert!(neg.is_negative());
        assert_eq!(neg.to_u32(), None);
        assert_eq!(neg.to_i32(), Some(-7));
    }

    #[test]
    fn test_sign_magnitude_of_zero() {
        let zero = BigNumber::from_i64(0);
        assert!(zero.is_zero());
        assert_eq!(zero.to_sign_magnitude(), (false, vec![]));
        assert_eq!(zero.magnitude_len(), 0);
        assert_eq!(BigNumber::from_sign_magnitude(true, &[]), zero);
    }

    #[test]
    fn test_sign_magnitude_little_endian() {
        let value = BigNumber::from_i64(0x0102_0304);
        assert_eq!(value.to_sign_magnitude(), (false, vec![4, 3, 2, 1]));
        assert_eq!(value.magnitude_len(), 4);

        let negative = BigNumber::from_i64(-256);
        assert_eq!(negative.to_sign_magnitude(), (true, vec![0, 1]));
        assert_eq!(BigNumber::from_sign_magnitude(true, &[0, 1]), negative);
    }

    #[test]
    fn test_beyond_i64() {
        let bigger = BigNumber::from_sign_magnitude(false, &[0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert!(bigger > BigNumber::from_u64(u64::MAX));
        assert_eq!(bigger.to_i64(), None);
        let (negative, magnitude) = bigger.to_sign_magnitude();
        assert!(!negative);
        assert_eq!(magnitude, vec![0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(BigNumber::from_sign_magnitude(false, &magnitude), bigger);
    }

    #[test]
    fn test_i64_min_round_trip() {
        let min = BigNumber::from_i64(i64::MIN);
        let (negative, magnitude) = min.to_sign_magnitude();
        assert!(negative);
        assert_eq!(magnitude, vec![0, 0, 0, 0, 0, 0, 0, 0x80]);
        let back = BigNumber::from_sign_magnitude(negative, &magnitude);
        assert_eq!(back.to_i64(), Some(i64::MIN));
    }

    #[test]
    fn test_trailing_zero_bytes_are_dropped() {
        let value = BigNumber::from_sign_magnitude(false, &[7, 0, 0, 0]);
        assert_eq!(value.to_i64(), Some(7));
        assert_eq!(value.to_sign_magnitude(), (false, vec![7]));
        assert_eq!(value.magnitude_len(), 1);
    }

    #[test]
    fn test_large_magnitude_converts_in_linear_time() {
        let magnitude: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8 + 1).collect();
        let started = std::time::Instant::now();
        let value = BigNumber::from_sign_magnitude(true, &magnitude);
        assert_eq!(value.magnitude_len(), magnitude.len());
        assert_eq!(value.to_sign_magnitude(), (true, magnitude));
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(BigNumber::from_i64(-42).to_string(), "-42");
        assert_eq!(format!("{:?}", BigNumber::from_i64(3)), "BigNumber(3)");
    }
}
