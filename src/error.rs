// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Error types returned by key expansion, block operations and control block parsing.
//!

/// Which cipher parameter was out of its supported range.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("invalid key size: `{0}`; supported range is [0, 255]")]
    KeySize(usize),
    #[error("invalid round count: `{0}`; supported range is [0, 255]")]
    Rounds(usize),
}

/// The `RC5Error` enum represents every failure the cipher core can report.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RC5Error {
    #[error("unsupported width `{0}`; supported widths are: {{8, 16, 32, 64, 128}}")]
    UnsupportedWidth(usize),
    #[error(transparent)]
    InvalidParameters(#[from] ParameterError),
    #[error("byte length `{len}` is not a multiple of the word size `{word_bytes}`")]
    Length { len: usize, word_bytes: usize },
    #[error("invalid block size `{actual}`; expected a `{expected}` byte block")]
    InvalidBlockSize { expected: usize, actual: usize },
    #[error("word `{value:#x}` does not fit in `{width}` bits")]
    MismatchedWidth { value: u128, width: usize },
    #[error("expanded key has `{actual}` words; expected `{expected}` for the given rounds")]
    InvalidExpandedKey { expected: usize, actual: usize },
}

/// The `ControlBlockError` enum represents the possible errors that can occur while
/// building a cipher from an RC5 control block.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlBlockError {
    #[error("invalid control block length `{0}`; should be at least 4 bytes long")]
    InvalidLength(usize),
    #[error("unsupported rc5 algorithm version `{0:#x}`; the only supported version is 0x10")]
    UnsupportedVersion(u8),
    #[error("specified key length `{declared}` does not correspond to the provided key `{actual}`")]
    KeyLengthMismatch { declared: u8, actual: usize },
    #[error(transparent)]
    Cipher(#[from] RC5Error),
}
