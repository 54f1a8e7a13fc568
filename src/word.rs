// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Word-width generic arithmetic: modular addition and subtraction, rotation by a
//! data-dependent amount, and little-endian conversion between bytes and words.
//!
//! Every supported width maps to a native unsigned type, so the arithmetic is always
//! carried out at the exact bit width of the word and never on a wider type with masking.

use crate::error::RC5Error;

/// The word widths RC5 is defined for here, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    W128,
}

impl Width {
    /// All supported widths, narrowest first.
    pub const ALL: [Width; 5] = [Width::W8, Width::W16, Width::W32, Width::W64, Width::W128];

    /// The word width `w` in bits.
    pub const fn bits(self) -> usize {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
            Width::W128 => 128,
        }
    }

    /// The word width in bytes.
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Returns `true` if `value` is representable in `w` bits.
    pub const fn fits(self, value: u128) -> bool {
        match self {
            Width::W128 => true,
            _ => value >> self.bits() == 0,
        }
    }

    /// Passes `value` through if it is representable in `w` bits.
    pub fn check(self, value: u128) -> Result<u128, RC5Error> {
        if self.fits(value) {
            Ok(value)
        } else {
            Err(RC5Error::MismatchedWidth {
                value,
                width: self.bits(),
            })
        }
    }
}

impl TryFrom<usize> for Width {
    type Error = RC5Error;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Width::ALL
            .into_iter()
            .find(|width| width.bits() == bits)
            .ok_or(RC5Error::UnsupportedWidth(bits))
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// A fixed width unsigned integer the cipher operates on.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`. Addition and subtraction wrap
/// modulo `2^w`; rotations take their amount modulo `w`.
pub trait Word:
    num_traits::Unsigned
    + num_traits::WrappingAdd
    + num_traits::WrappingSub
    + std::ops::BitXor<Self, Output = Self>
    + Copy
    + Eq
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    const WIDTH: Width;
    const BYTES: usize;

    /// Rotates left by `amount mod w`.
    fn rotl(self, amount: Self) -> Self;
    /// Rotates right by `amount mod w`.
    fn rotr(self, amount: Self) -> Self;

    /// The `[u8; Self::BYTES]` array holding one word.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn from_le(bytes: Self::Bytes) -> Self;
    fn to_le(self) -> Self::Bytes;

    /// Reads a word from exactly `Self::BYTES` little-endian bytes, or `None` if `bytes`
    /// has any other length.
    fn from_le_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::BYTES {
            return None;
        }
        let mut buf = <Self::Bytes as Default>::default();
        buf.as_mut().copy_from_slice(bytes);
        Some(Self::from_le(buf))
    }

    /// Zero-extends the word to `u128`.
    fn widen(self) -> u128;
    /// Narrows `value` to this word type, or `None` if it has bits above `w`.
    fn narrow(value: u128) -> Option<Self>;
    /// Keeps the low `w` bits of `value`.
    fn truncate(value: u128) -> Self;
}

macro_rules! impl_word {
    ($($t:ty => $width:expr),* $(,)?) => {
        $(
            impl Word for $t {
                const WIDTH: Width = $width;
                const BYTES: usize = std::mem::size_of::<$t>();

                #[inline]
                fn rotl(self, amount: Self) -> Self {
                    self.rotate_left(rotation_amount::<$t>(u128::from(amount)))
                }

                #[inline]
                fn rotr(self, amount: Self) -> Self {
                    self.rotate_right(rotation_amount::<$t>(u128::from(amount)))
                }

                type Bytes = [u8; std::mem::size_of::<$t>()];

                #[inline]
                fn from_le(bytes: Self::Bytes) -> Self {
                    <$t>::from_le_bytes(bytes)
                }

                #[inline]
                fn to_le(self) -> Self::Bytes {
                    self.to_le_bytes()
                }

                #[inline]
                fn widen(self) -> u128 {
                    u128::from(self)
                }

                #[inline]
                fn narrow(value: u128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline]
                fn truncate(value: u128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_word!(
    u8 => Width::W8,
    u16 => Width::W16,
    u32 => Width::W32,
    u64 => Width::W64,
    u128 => Width::W128,
);

fn rotation_amount<T>(x: u128) -> u32 {
    (x % (std::mem::size_of::<T>() * 8) as u128) as u32
}

/// `(x + y) mod 2^w`
#[inline]
pub fn add<W: Word>(x: W, y: W) -> W {
    x.wrapping_add(&y)
}

/// `(x - y) mod 2^w`
#[inline]
pub fn sub<W: Word>(x: W, y: W) -> W {
    x.wrapping_sub(&y)
}

/// Rotates `x` left by `amount mod w`.
#[inline]
pub fn rotl<W: Word>(x: W, amount: W) -> W {
    x.rotl(amount)
}

/// Rotates `x` right by `amount mod w`.
#[inline]
pub fn rotr<W: Word>(x: W, amount: W) -> W {
    x.rotr(amount)
}

/// Interprets `bytes` as a sequence of little-endian words.
///
/// Fails with [RC5Error::Length] if the length is not a multiple of the word size.
///
/// # Examples
///
/// ```
/// use rc5_family::bytes_to_words;
///
/// let words = bytes_to_words::<u16>(&[0x01, 0x02, 0x03, 0x04]).unwrap();
/// assert_eq!(words, [0x0201, 0x0403]);
/// ```
pub fn bytes_to_words<W: Word>(bytes: &[u8]) -> Result<Vec<W>, RC5Error> {
    let length_error = || RC5Error::Length {
        len: bytes.len(),
        word_bytes: W::BYTES,
    };
    if bytes.len() % W::BYTES != 0 {
        return Err(length_error());
    }

    bytes
        .chunks_exact(W::BYTES)
        .map(|chunk| W::from_le_slice(chunk).ok_or_else(length_error))
        .collect()
}

/// Serializes `words` as consecutive little-endian byte groups.
pub fn words_to_bytes<W: Word>(words: &[W]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * W::BYTES);
    for word in words {
        bytes.extend_from_slice(word.to_le().as_ref());
    }
    bytes
}
