// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Runtime width entry points.
//!
//! Words travel as `u128` regardless of `w` and are checked against `w` before they reach
//! the cipher, which then runs on the native word type for that width.

use crate::cipher::*;
use crate::error::RC5Error;
use crate::key_schedule::*;
use crate::word::{Width, Word};

macro_rules! with_word_type {
    ($width:expr, $w:ident => $body:expr) => {
        match $width {
            Width::W8 => {
                type $w = u8;
                $body
            }
            Width::W16 => {
                type $w = u16;
                $body
            }
            Width::W32 => {
                type $w = u32;
                $body
            }
            Width::W64 => {
                type $w = u64;
                $body
            }
            Width::W128 => {
                type $w = u128;
                $body
            }
        }
    };
}

/// Expands `secret_key` for RC5-`width`/`rounds`, returning the table zero-extended to `u128`.
///
/// # Examples
///
/// ```
/// use rc5_family::{derive_schedule, Width};
///
/// let schedule = derive_schedule(b"secret", Width::W16, 8).unwrap();
/// assert_eq!(schedule.len(), 18);
/// assert!(schedule.iter().all(|word| *word <= 0xFFFF));
/// ```
pub fn derive_schedule(
    secret_key: &[u8],
    width: Width,
    rounds: usize,
) -> Result<Vec<u128>, RC5Error> {
    with_word_type!(width, W => {
        let key = expand_key::<W>(secret_key, rounds)?;
        Ok(key.words().iter().map(|word| word.widen()).collect())
    })
}

/// Encrypts `block` with a schedule produced by [derive_schedule].
///
/// Fails with [RC5Error::InvalidExpandedKey] if `key` does not hold `2(rounds + 1)` words and
/// with [RC5Error::MismatchedWidth] if any block or key word has bits above `w`.
///
/// # Examples
///
/// ```
/// use rc5_family::{decrypt_block, derive_schedule, encrypt_block, Width};
///
/// let key = derive_schedule(&[0; 16], Width::W32, 12).unwrap();
/// let ct = encrypt_block((0, 0), &key, Width::W32, 12).unwrap();
/// assert_eq!(ct, (0xEEDBA521, 0x6D8F4B15));
/// assert_eq!(decrypt_block(ct, &key, Width::W32, 12), Ok((0, 0)));
/// ```
pub fn encrypt_block(
    block: (u128, u128),
    key: &[u128],
    width: Width,
    rounds: usize,
) -> Result<(u128, u128), RC5Error> {
    with_word_type!(width, W => transform::<W>(block, key, rounds, encrypt))
}

/// Decrypts `block` with a schedule produced by [derive_schedule].
pub fn decrypt_block(
    block: (u128, u128),
    key: &[u128],
    width: Width,
    rounds: usize,
) -> Result<(u128, u128), RC5Error> {
    with_word_type!(width, W => transform::<W>(block, key, rounds, decrypt))
}

fn transform<W: Word>(
    block: (u128, u128),
    key: &[u128],
    rounds: usize,
    op: fn(Block<W>, &ExpandedKey<W>) -> Block<W>,
) -> Result<(u128, u128), RC5Error> {
    check_rounds(rounds)?;
    let expected = expanded_len(rounds);
    if key.len() != expected {
        return Err(RC5Error::InvalidExpandedKey {
            expected,
            actual: key.len(),
        });
    }

    let words = key
        .iter()
        .map(|&word| narrow::<W>(word))
        .collect::<Result<Vec<W>, _>>()?;
    let key = ExpandedKey::from_words(words, rounds)?;
    let block = Block {
        a: narrow::<W>(block.0)?,
        b: narrow::<W>(block.1)?,
    };

    let out = op(block, &key);
    Ok((out.a.widen(), out.b.widen()))
}

fn narrow<W: Word>(value: u128) -> Result<W, RC5Error> {
    W::WIDTH.check(value).map(W::truncate)
}

/// Constructs a new [RC5] encryption algorithm instance with a word width chosen at runtime.
///
/// # Arguments
///
/// * width - The bit width of the words (8, 16, 32, 64 or 128).
/// * rounds - The number of rounds of encryption to be performed by the algorithm.
/// * key - A slice of bytes representing the key to be used for encryption.
///
/// # Examples
///
/// ```
/// use rc5_family::{new_rc5_dyn, RC5Algo};
///
/// let key = b"my secret key";
/// let algo = new_rc5_dyn(32, 12, key).unwrap();
/// let pt_org = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
/// let mut pt = pt_org.clone();
/// let ct = algo.encrypt(&mut pt).unwrap();
/// assert_ne!(pt_org, *ct);
/// let decrypted = algo.decrypt(ct).unwrap();
/// assert_eq!(pt_org, *decrypted);
/// ```
pub fn new_rc5_dyn(
    width: usize,
    rounds: usize,
    key: &[u8],
) -> Result<Box<dyn RC5Algo + Send + Sync>, RC5Error> {
    with_word_type!(Width::try_from(width)?, W => {
        Ok(Box::new(RC5::<W>::new(key, rounds)?))
    })
}
