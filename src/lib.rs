// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! This library provides a word-size generic implementation of the RC5 block cipher family
//!
//! The RC5 block cipher is a symmetric-key block cipher designed by Ron Rivest in 1994.
//! It is parameterized as RC5-w/r/b: the word width `w` (here 8, 16, 32, 64 or 128 bits),
//! the number of rounds `r` (0 to 255) and the key length `b` in bytes (0 to 255).
//! A block is two words, so the block size is `2w` bits.
//!
//! All arithmetic is written once against the [Word] trait and instantiated for the
//! native unsigned type of each width. The compile-time API is [RC5], [expand_key],
//! [encrypt] and [decrypt]; when the width is only known at runtime use [derive_schedule],
//! [encrypt_block] and [decrypt_block], or [new_rc5_dyn] for a boxed [RC5Algo].
//!
//! Only the raw block primitive is provided. Modes of operation and padding are left to
//! the caller.
//!

mod cipher;
mod control_block;
mod dynamic;
mod error;
mod key_schedule;
mod magic;
mod word;

pub use crate::cipher::*;
pub use crate::control_block::*;
pub use crate::dynamic::*;
pub use crate::error::*;
pub use crate::key_schedule::{expand_key, expanded_len, ExpandedKey, MAX_KEY_BYTES, MAX_ROUNDS};
pub use crate::magic::*;
pub use crate::word::*;
