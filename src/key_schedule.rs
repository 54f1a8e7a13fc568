// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Expansion of a secret key into the `2(r + 1)` word table used by every block operation.
//!
use crate::error::{ParameterError, RC5Error};
use crate::magic::MagicConstants;
use crate::word::*;
use std::cmp::max;

/// Largest supported round count.
pub const MAX_ROUNDS: usize = 255;
/// Largest supported secret key length in bytes.
pub const MAX_KEY_BYTES: usize = 255;

/// Number of words in the expanded key for `rounds` rounds.
pub const fn expanded_len(rounds: usize) -> usize {
    2 * (rounds + 1)
}

/// The expanded ("working") key `S[0..2r+1]`.
///
/// Derived once from the secret key and then only read, so a single instance can be
/// shared between threads and reused for any number of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedKey<W> {
    words: Box<[W]>,
}

impl<W: Word> ExpandedKey<W> {
    /// Expands `key` for `rounds` rounds. See [expand_key].
    pub fn new(key: &[u8], rounds: usize) -> Result<ExpandedKey<W>, RC5Error> {
        expand_key(key, rounds)
    }

    /// Wraps an already expanded table, checking it has `2(rounds + 1)` words.
    pub fn from_words(words: Vec<W>, rounds: usize) -> Result<ExpandedKey<W>, RC5Error> {
        check_rounds(rounds)?;
        let expected = expanded_len(rounds);
        if words.len() != expected {
            return Err(RC5Error::InvalidExpandedKey {
                expected,
                actual: words.len(),
            });
        }

        Ok(ExpandedKey {
            words: words.into_boxed_slice(),
        })
    }

    /// The round count `r` this table was expanded for.
    pub fn rounds(&self) -> usize {
        self.words.len() / 2 - 1
    }

    pub fn words(&self) -> &[W] {
        &self.words
    }
}

/// Expands the secret `key` into the working key for `rounds` rounds of RC5-w, where `w`
/// is the bit width of `W`.
///
/// The result is a pure function of its inputs. The key only enters through its padded
/// word array `L`, so two keys give the same table exactly when they give the same `L`. An
/// empty key is `L = [0]`, which makes it equivalent to any all-zero key of at most one
/// word, e.g. 16 zero bytes for RC5-128.
///
/// # Examples
///
/// ```
/// use rc5_family::expand_key;
///
/// let key = expand_key::<u32>(b"my secret key", 12).unwrap();
/// assert_eq!(key.words().len(), 26);
/// assert_eq!(key.rounds(), 12);
/// ```
pub fn expand_key<W: Word>(key: &[u8], rounds: usize) -> Result<ExpandedKey<W>, RC5Error> {
    check_key_size(key.len())?;
    check_rounds(rounds)?;

    let (s_arr, l_arr) = init_sl_arrays::<W>(key, rounds)?;

    Ok(ExpandedKey {
        words: mix_sl_arrays(s_arr, l_arr),
    })
}

pub(crate) fn check_key_size(len: usize) -> Result<(), ParameterError> {
    if len > MAX_KEY_BYTES {
        return Err(ParameterError::KeySize(len));
    }
    Ok(())
}

pub(crate) fn check_rounds(rounds: usize) -> Result<(), ParameterError> {
    if rounds > MAX_ROUNDS {
        return Err(ParameterError::Rounds(rounds));
    }
    Ok(())
}

fn init_sl_arrays<W: Word>(key: &[u8], rounds: usize) -> Result<(Box<[W]>, Box<[W]>), RC5Error> {
    let MagicConstants { p, q } = MagicConstants::<W>::of();

    let s = std::iter::successors(Some(p), |x| Some(add(*x, q))).take(expanded_len(rounds));

    let l = if key.is_empty() {
        vec![W::zero()]
    } else {
        let padding_size = (W::BYTES - (key.len() % W::BYTES)) % W::BYTES;
        let mut padded = key.to_vec();
        padded.resize(key.len() + padding_size, 0);
        bytes_to_words(&padded)?
    };

    Ok((s.collect(), l.into_boxed_slice()))
}

fn mix_sl_arrays<W: Word>(mut s_arr: Box<[W]>, mut l_arr: Box<[W]>) -> Box<[W]> {
    let total_count = 3 * max(s_arr.len(), l_arr.len());
    let three = W::truncate(3);

    let mut a = W::zero();
    let mut b = W::zero();
    let indices = (0..s_arr.len()).cycle().zip((0..l_arr.len()).cycle());
    for (i, j) in indices.take(total_count) {
        // A = S[i] = (S[i] + A + B) <<< 3
        a = rotl(add(add(s_arr[i], a), b), three);
        s_arr[i] = a;
        // B = L[j] = (L[j] + A + B) <<< (A + B)
        let ab = add(a, b);
        b = rotl(add(l_arr[j], ab), ab);
        l_arr[j] = b;
    }

    s_arr
}
