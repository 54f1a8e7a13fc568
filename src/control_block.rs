// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The RC5 control block `[version, w, r, b, key...]` describing a full cipher setup.
//!
use crate::cipher::RC5Algo;
use crate::dynamic::new_rc5_dyn;
use crate::error::{ControlBlockError, ParameterError, RC5Error};
use crate::key_schedule::{check_key_size, check_rounds};
use crate::word::Width;

/// The only control block version defined for RC5.
pub const CONTROL_BLOCK_VERSION: u8 = 0x10;

const HEADER_LEN: usize = 4;

/// Constructs a new [crate::RC5] encryption algorithm instance from an RC5 control block
///
/// # Arguments
///
/// * control_block - The control block bytes, minimum length 4
///
/// # Examples
///
/// ```
/// use rc5_family::{new_rc5_dyn_from_control_block, RC5Algo};
///
/// let control_block = [
///     0x10, 0x20, 0x0C, 0x0A, 0x20, 0x33, 0x7D, 0x83, 0x05, 0x5F, 0x62, 0x51, 0xBB, 0x09
/// ];
/// let algo = new_rc5_dyn_from_control_block(&control_block).unwrap();
/// let pt_org = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
/// let mut pt = pt_org.clone();
/// let ct = algo.encrypt(&mut pt).unwrap();
/// assert_ne!(pt_org, *ct);
/// let decrypted = algo.decrypt(ct).unwrap();
/// assert_eq!(pt_org, *decrypted);
/// ```
pub fn new_rc5_dyn_from_control_block(
    control_block: &[u8],
) -> Result<Box<dyn RC5Algo + Send + Sync>, ControlBlockError> {
    if control_block.len() < HEADER_LEN {
        return Err(ControlBlockError::InvalidLength(control_block.len()));
    }

    let (header, key) = control_block.split_at(HEADER_LEN);
    let (version, width, rounds, key_len) = (header[0], header[1], header[2], header[3]);

    if version != CONTROL_BLOCK_VERSION {
        return Err(ControlBlockError::UnsupportedVersion(version));
    }

    if key_len as usize != key.len() {
        return Err(ControlBlockError::KeyLengthMismatch {
            declared: key_len,
            actual: key.len(),
        });
    }

    Ok(new_rc5_dyn(width as usize, rounds as usize, key)?)
}

/// Serializes a cipher setup into a control block.
///
/// # Examples
///
/// ```
/// use rc5_family::{encode_control_block, Width};
///
/// let block = encode_control_block(Width::W32, 12, &[0xAA, 0xBB]).unwrap();
/// assert_eq!(block, [0x10, 0x20, 0x0C, 0x02, 0xAA, 0xBB]);
/// ```
pub fn encode_control_block(width: Width, rounds: usize, key: &[u8]) -> Result<Vec<u8>, RC5Error> {
    check_rounds(rounds)?;
    check_key_size(key.len())?;

    debug_assert!(width.bits() <= u8::MAX as usize);
    let width = width.bits() as u8;
    let rounds = u8::try_from(rounds).map_err(|_| ParameterError::Rounds(rounds))?;
    let key_len = u8::try_from(key.len()).map_err(|_| ParameterError::KeySize(key.len()))?;

    let mut block = Vec::with_capacity(HEADER_LEN + key.len());
    block.extend_from_slice(&[CONTROL_BLOCK_VERSION, width, rounds, key_len]);
    block.extend_from_slice(key);
    Ok(block)
}
