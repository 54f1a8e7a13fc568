// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The magic constants `P_w = Odd((e - 2) * 2^w)` and `Q_w = Odd((phi - 1) * 2^w)` used to
//! seed the key schedule.
//!
//! The standard widths (16, 32 and 64) use the published values directly. The experimental
//! widths (8 and 128) are derived from 128-bit binary expansions of `e - 2` and `phi - 1`.

use crate::error::RC5Error;
use crate::word::{Width, Word};

/// Fractional part of `e`, `(e - 2) * 2^128` truncated.
const E_MINUS_TWO: u128 = 0xB7E1_5162_8AED_2A6A_BF71_5880_9CF4_F3C7;
/// Fractional part of the golden ratio, `(phi - 1) * 2^128` truncated.
const PHI_MINUS_ONE: u128 = 0x9E37_79B9_7F4A_7C15_F39C_C060_5CED_C834;

/// The `(P_w, Q_w)` pair for one word width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicConstants<W> {
    pub p: W,
    pub q: W,
}

impl MagicConstants<u128> {
    /// Constants for `width`, zero-extended to `u128`.
    pub const fn for_width(width: Width) -> Self {
        match width {
            Width::W16 => MagicConstants {
                p: 0xB7E1,
                q: 0x9E37,
            },
            Width::W32 => MagicConstants {
                p: 0xB7E1_5163,
                q: 0x9E37_79B9,
            },
            Width::W64 => MagicConstants {
                p: 0xB7E1_5162_8AED_2A6B,
                q: 0x9E37_79B9_7F4A_7C15,
            },
            Width::W8 | Width::W128 => Self::derive(width),
        }
    }

    /// Derives the constants from the high-precision expansions.
    ///
    /// The top `w` bits of an expansion round to the nearest odd integer by setting the
    /// low bit: an odd prefix is already nearest, an even one is always closer to `+1`.
    pub const fn derive(width: Width) -> Self {
        MagicConstants {
            p: odd_prefix(E_MINUS_TWO, width.bits()),
            q: odd_prefix(PHI_MINUS_ONE, width.bits()),
        }
    }
}

impl<W: Word> MagicConstants<W> {
    /// Constants for the word type `W`.
    pub fn of() -> Self {
        let wide = MagicConstants::<u128>::for_width(W::WIDTH);
        MagicConstants {
            p: W::truncate(wide.p),
            q: W::truncate(wide.q),
        }
    }
}

const fn odd_prefix(expansion: u128, bits: usize) -> u128 {
    (expansion >> (128 - bits)) | 1
}

/// Looks up the constants for a width given in bits.
///
/// # Examples
///
/// ```
/// use rc5_family::magic_constants;
///
/// let magic = magic_constants(32).unwrap();
/// assert_eq!(magic.p, 0xB7E15163);
/// assert_eq!(magic.q, 0x9E3779B9);
/// assert!(magic_constants(24).is_err());
/// ```
pub fn magic_constants(bits: usize) -> Result<MagicConstants<u128>, RC5Error> {
    Ok(MagicConstants::<u128>::for_width(Width::try_from(bits)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_matches_table_for_standard_widths() {
        for width in [Width::W16, Width::W32, Width::W64] {
            assert_eq!(
                MagicConstants::<u128>::derive(width),
                MagicConstants::<u128>::for_width(width),
                "width {width}"
            );
        }
    }

    #[test]
    fn byte_constants() {
        let magic = MagicConstants::<u8>::of();
        assert_eq!(magic.p, 0xB7);
        assert_eq!(magic.q, 0x9F);
    }

    #[test]
    fn wide_constants() {
        let magic = MagicConstants::<u128>::of();
        assert_eq!(magic.p, 0xB7E151628AED2A6ABF7158809CF4F3C7);
        assert_eq!(magic.q, 0x9E3779B97F4A7C15F39CC0605CEDC835);
    }

    #[test]
    fn constants_are_odd_and_fit() {
        for width in Width::ALL {
            let magic = MagicConstants::<u128>::for_width(width);
            assert_eq!(magic.p & 1, 1);
            assert_eq!(magic.q & 1, 1);
            assert!(width.fits(magic.p));
            assert!(width.fits(magic.q));
        }
    }

    #[test]
    fn unsupported_width() {
        assert_eq!(magic_constants(0), Err(RC5Error::UnsupportedWidth(0)));
        assert_eq!(magic_constants(48), Err(RC5Error::UnsupportedWidth(48)));
    }
}
