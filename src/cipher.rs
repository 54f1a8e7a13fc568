// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! The RC5 round function and its inverse, on words and on little-endian byte blocks.
//!
use crate::error::RC5Error;
use crate::key_schedule::ExpandedKey;
use crate::word::*;

/// One plaintext or ciphertext block: the two words `(A, B)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block<W> {
    pub a: W,
    pub b: W,
}

impl<W> From<(W, W)> for Block<W> {
    fn from((a, b): (W, W)) -> Self {
        Block { a, b }
    }
}

impl<W> From<Block<W>> for (W, W) {
    fn from(block: Block<W>) -> Self {
        (block.a, block.b)
    }
}

impl<W: Word> Block<W> {
    /// Reads a block from `2 * W::BYTES` bytes, `A` first.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Block<W>, RC5Error> {
        check_block_size::<W>(bytes.len())?;

        let (a_bytes, b_bytes) = bytes.split_at(W::BYTES);
        match (W::from_le_slice(a_bytes), W::from_le_slice(b_bytes)) {
            (Some(a), Some(b)) => Ok(Block { a, b }),
            _ => Err(block_size_error::<W>(bytes.len())),
        }
    }

    /// Writes the block into `2 * W::BYTES` bytes, `A` first.
    pub fn write_le_bytes(self, bytes: &mut [u8]) -> Result<(), RC5Error> {
        check_block_size::<W>(bytes.len())?;

        for (chunk, word) in bytes.chunks_exact_mut(W::BYTES).zip([self.a, self.b]) {
            chunk.copy_from_slice(word.to_le().as_ref());
        }
        Ok(())
    }
}

fn block_size_error<W: Word>(actual: usize) -> RC5Error {
    RC5Error::InvalidBlockSize {
        expected: 2 * W::BYTES,
        actual,
    }
}

fn check_block_size<W: Word>(len: usize) -> Result<(), RC5Error> {
    if len != 2 * W::BYTES {
        return Err(block_size_error::<W>(len));
    }
    Ok(())
}

/// Encrypts one block with `key`.
pub fn encrypt<W: Word>(block: Block<W>, key: &ExpandedKey<W>) -> Block<W> {
    let s = key.words();
    let mut a = add(block.a, s[0]);
    let mut b = add(block.b, s[1]);

    for round_keys in s[2..].chunks_exact(2) {
        // A = ((A ^ B) <<< B) + S[2i]
        a = add(rotl(a ^ b, b), round_keys[0]);
        // B = ((B ^ A) <<< A) + S[2i + 1]
        b = add(rotl(b ^ a, a), round_keys[1]);
    }

    Block { a, b }
}

/// Decrypts one block with `key`; the exact inverse of [encrypt].
pub fn decrypt<W: Word>(block: Block<W>, key: &ExpandedKey<W>) -> Block<W> {
    let s = key.words();
    let mut a = block.a;
    let mut b = block.b;

    for round_keys in s[2..].chunks_exact(2).rev() {
        // B = ((B - S[2i + 1]) >>> A) ^ A
        b = rotr(sub(b, round_keys[1]), a) ^ a;
        // A = ((A - S[2i]) >>> B) ^ B
        a = rotr(sub(a, round_keys[0]), b) ^ b;
    }

    Block {
        a: sub(a, s[0]),
        b: sub(b, s[1]),
    }
}

/// The RC5 struct represents an instance of the RC5 block cipher algorithm.
///
/// The `RC5` struct owns the expanded key and provides methods for encrypting and
/// decrypting individual words and byte blocks. `RC5<u32>` is RC5-32, `RC5<u16>` is
/// RC5-16 and so on.
#[derive(Debug, Clone)]
pub struct RC5<W> {
    key: ExpandedKey<W>,
}

impl<W: Word> RC5<W> {
    /// Creates a new RC5 instance with the given key and number of rounds.
    ///
    /// The `key` parameter is a slice of at most 255 bytes representing the secret key used
    /// to encrypt and decrypt the data. The `rounds` parameter specifies the number of
    /// rounds, between 0 and 255 (typically 12, 16, or 20).
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_family::RC5;
    ///
    /// let key = b"my secret key";
    /// let rc5 = RC5::<u32>::new(key, 12);
    /// assert!(rc5.is_ok());
    /// ```
    pub fn new(key: &[u8], rounds: usize) -> Result<RC5<W>, RC5Error> {
        Ok(RC5 {
            key: ExpandedKey::new(key, rounds)?,
        })
    }

    pub fn from_expanded_key(key: ExpandedKey<W>) -> RC5<W> {
        RC5 { key }
    }

    pub fn expanded_key(&self) -> &ExpandedKey<W> {
        &self.key
    }

    /// Encrypts the two-word block represented by the references `a` and `b`.
    ///
    /// The encrypted values are written back to the same references.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_family::{RC5, RC5Error};
    ///
    /// # fn main() -> Result<(), RC5Error> {
    /// let key = b"my secret key";
    /// let rc5 = RC5::<u32>::new(key, 12)?;
    ///
    /// let mut a = 0x12345678;
    /// let mut b = 0x9ABCDEF0;
    ///
    /// rc5.encrypt_words(&mut a, &mut b);
    ///
    /// assert_eq!(a, 0x92F4D0C5);
    /// assert_eq!(b, 0xEB0088E3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_words(&self, a: &mut W, b: &mut W) {
        let block = encrypt(Block { a: *a, b: *b }, &self.key);
        *a = block.a;
        *b = block.b;
    }

    /// Decrypts the two-word block represented by the references `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_family::{RC5, RC5Error};
    ///
    /// # fn main() -> Result<(), RC5Error> {
    /// let key = b"my secret key";
    /// let rc5 = RC5::<u32>::new(key, 12)?;
    ///
    /// let mut a = 0x92F4D0C5;
    /// let mut b = 0xEB0088E3;
    ///
    /// rc5.decrypt_words(&mut a, &mut b);
    ///
    /// assert_eq!(a, 0x12345678);
    /// assert_eq!(b, 0x9ABCDEF0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn decrypt_words(&self, a: &mut W, b: &mut W) {
        let block = decrypt(Block { a: *a, b: *b }, &self.key);
        *a = block.a;
        *b = block.b;
    }

    /// Encrypts one `2 * w / 8` byte block in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use rc5_family::{RC5, RC5Error};
    ///
    /// # fn main() -> Result<(), RC5Error> {
    /// let key = b"my secret key";
    /// let rc5 = RC5::<u32>::new(key, 12)?;
    ///
    /// let mut block = [0x78, 0x56, 0x34, 0x12, 0xF0, 0xDE, 0xBC, 0x9A];
    /// rc5.encrypt_block(&mut block)?;
    ///
    /// assert_eq!(block, [0xC5, 0xD0, 0xF4, 0x92, 0xE3, 0x88, 0x00, 0xEB]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encrypt_block(&self, bytes: &mut [u8]) -> Result<(), RC5Error> {
        encrypt(Block::from_le_bytes(bytes)?, &self.key).write_le_bytes(bytes)
    }

    /// Decrypts one `2 * w / 8` byte block in place.
    pub fn decrypt_block(&self, bytes: &mut [u8]) -> Result<(), RC5Error> {
        decrypt(Block::from_le_bytes(bytes)?, &self.key).write_le_bytes(bytes)
    }
}

/// The `RC5Algo` trait provides methods for encrypting and decrypting data using
/// the RC5 block cipher algorithm. This trait is useful when the RC5 algorithm needs
/// to be constructed with a word width that is determined at runtime.
pub trait RC5Algo {
    /// Encrypts the given block of bytes in place.
    ///
    /// Returns a reference to the encrypted bytes on success, or an
    /// [RC5Error::InvalidBlockSize] if the slice is not exactly one block.
    fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC5Error>;
    /// Decrypts the given block of bytes in place.
    fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC5Error>;
    fn width(&self) -> Width;
    fn rounds(&self) -> usize;

    /// Block size in bytes.
    fn block_size(&self) -> usize {
        2 * self.width().bytes()
    }
}

impl<W: Word> RC5Algo for RC5<W> {
    fn encrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC5Error> {
        self.encrypt_block(bytes)?;
        Ok(bytes)
    }

    fn decrypt<'a>(&self, bytes: &'a mut [u8]) -> Result<&'a mut [u8], RC5Error> {
        self.decrypt_block(bytes)?;
        Ok(bytes)
    }

    fn width(&self) -> Width {
        W::WIDTH
    }

    fn rounds(&self) -> usize {
        self.key.rounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rounds_only_whitens() {
        let key = expand_key_u32(b"zero rounds", 0);
        let s = key.words();
        let block = Block {
            a: 0x33221100u32,
            b: 0x77665544,
        };
        let res = encrypt(block, &key);
        assert_eq!(
            res,
            Block {
                a: block.a.wrapping_add(s[0]),
                b: block.b.wrapping_add(s[1]),
            }
        );
        assert_eq!(decrypt(res, &key), block);
    }

    fn expand_key_u32(key: &[u8], rounds: usize) -> ExpandedKey<u32> {
        ExpandedKey::new(key, rounds).unwrap()
    }

    #[test]
    fn invalid_block_size_encrypt() {
        let rc5 = RC5::<u16>::new(&[1, 2, 3, 4], 12).unwrap();
        let mut pt = [0; 6];
        let res = RC5Algo::encrypt(&rc5, &mut pt);

        assert!(matches!(
            res,
            Err(RC5Error::InvalidBlockSize {
                expected: 4,
                actual: 6
            })
        ));
    }

    #[test]
    fn invalid_block_size_decrypt() {
        let rc5 = RC5::<u64>::new(&[1, 2, 3, 4], 12).unwrap();
        let mut ct = [0; 8];
        let res = RC5Algo::decrypt(&rc5, &mut ct);

        assert!(matches!(
            res,
            Err(RC5Error::InvalidBlockSize {
                expected: 16,
                actual: 8
            })
        ));
    }

    #[test]
    fn block_bytes_in_place() {
        let mut bytes = [0x00, 0x11, 0x22, 0x33];
        let block = Block::<u16>::from_le_bytes(&bytes).unwrap();
        assert_eq!(block, Block { a: 0x1100, b: 0x3322 });

        Block { a: 0xBEEFu16, b: 0xCAFE }
            .write_le_bytes(&mut bytes)
            .unwrap();
        assert_eq!(bytes, [0xEF, 0xBE, 0xFE, 0xCA]);
    }

    #[test]
    fn block_bytes_wrong_size() {
        assert_eq!(
            Block::<u32>::from_le_bytes(&[0; 7]),
            Err(RC5Error::InvalidBlockSize {
                expected: 8,
                actual: 7
            })
        );
        let mut short = [0u8; 3];
        assert_eq!(
            Block { a: 1u16, b: 2 }.write_le_bytes(&mut short),
            Err(RC5Error::InvalidBlockSize {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(short, [0; 3]);
    }

    #[test]
    fn block_tuple_conversion() {
        let block: Block<u8> = (1, 2).into();
        assert_eq!(block, Block { a: 1, b: 2 });
        assert_eq!(<(u8, u8)>::from(block), (1, 2));
    }

    #[test]
    fn encode_zero_key_zero_block() {
        let key = [0; 16];
        let mut pt = [0; 8];
        let ct = [0x21, 0xA5, 0xDB, 0xEE, 0x15, 0x4B, 0x8F, 0x6D];
        let rc5 = RC5::<u32>::new(&key, 12).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&ct[..], &res[..]);
    }

    #[test]
    fn encode_chained_paper_vector() {
        let key = [
            0x91, 0x5F, 0x46, 0x19, 0xBE, 0x41, 0xB2, 0x51, 0x63, 0x55, 0xA5, 0x01, 0x10, 0xA9,
            0xCE, 0x91,
        ];
        let mut pt = [0x21, 0xA5, 0xDB, 0xEE, 0x15, 0x4B, 0x8F, 0x6D];
        let ct = [0xF7, 0xC0, 0x13, 0xAC, 0x5B, 0x2B, 0x89, 0x52];
        let rc5 = RC5::<u32>::new(&key, 12).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&ct[..], &res[..]);
    }

    #[test]
    fn encode_a() {
        let key = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
            0x0E, 0x0F,
        ];
        let mut pt = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];
        let ct = [0x2D, 0xDC, 0x14, 0x9B, 0xCF, 0x08, 0x8B, 0x9E];
        let rc5 = RC5::<u32>::new(&key, 12).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&ct[..], &res[..]);
    }

    #[test]
    fn encode_b() {
        let key = [
            0x2B, 0xD6, 0x45, 0x9F, 0x82, 0xC5, 0xB3, 0x00, 0x95, 0x2C, 0x49, 0x10, 0x48, 0x81,
            0xFF, 0x48,
        ];
        let mut pt = [0xEA, 0x02, 0x47, 0x14, 0xAD, 0x5C, 0x4D, 0x84];
        let ct = [0x11, 0xE4, 0x3B, 0x86, 0xD2, 0x31, 0xEA, 0x64];
        let rc5 = RC5::<u32>::new(&key, 12).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&ct[..], &res[..]);
    }

    #[test]
    fn decode_a() {
        let key = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
            0x0E, 0x0F,
        ];
        let pt = [0x96, 0x95, 0x0D, 0xDA, 0x65, 0x4A, 0x3D, 0x62];
        let mut ct = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77];
        let rc5 = RC5::<u32>::new(&key, 12).unwrap();
        let res = RC5Algo::decrypt(&rc5, &mut ct).unwrap();
        assert_eq!(&pt[..], &res[..]);
    }

    #[test]
    fn decode_b() {
        let key = [
            0x2B, 0xD6, 0x45, 0x9F, 0x82, 0xC5, 0xB3, 0x00, 0x95, 0x2C, 0x49, 0x10, 0x48, 0x81,
            0xFF, 0x48,
        ];
        let pt = [0x63, 0x8B, 0x3A, 0x5E, 0xF7, 0x2B, 0x66, 0x3F];
        let mut ct = [0xEA, 0x02, 0x47, 0x14, 0xAD, 0x5C, 0x4D, 0x84];
        let rc5 = RC5::<u32>::new(&key, 12).unwrap();
        let res = RC5Algo::decrypt(&rc5, &mut ct).unwrap();
        assert_eq!(&pt[..], &res[..]);
    }

    #[test]
    fn encode_8_12_4() {
        let key = [0x00, 0x01, 0x02, 0x03];
        let mut pt = [0x00, 0x01];
        let ct = [0x21, 0x2A];
        let rc5 = RC5::<u8>::new(&key, 12).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&ct[..], &res[..]);
    }

    #[test]
    fn decode_8_12_4() {
        let key = [0x00, 0x01, 0x02, 0x03];
        let pt = [0x00, 0x01];
        let mut ct = [0x21, 0x2A];
        let rc5 = RC5::<u8>::new(&key, 12).unwrap();
        let res = RC5Algo::decrypt(&rc5, &mut ct).unwrap();
        assert_eq!(&pt[..], &res[..]);
    }

    #[test]
    fn encode_16_16_8() {
        let key = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut pt = [0x00, 0x01, 0x02, 0x03];
        let ct = [0x23, 0xA8, 0xD7, 0x2E];
        let rc5 = RC5::<u16>::new(&key, 16).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&ct[..], &res[..]);
    }

    #[test]
    fn decode_16_16_8() {
        let key = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let pt = [0x00, 0x01, 0x02, 0x03];
        let mut ct = [0x23, 0xA8, 0xD7, 0x2E];
        let rc5 = RC5::<u16>::new(&key, 16).unwrap();
        let res = RC5Algo::decrypt(&rc5, &mut ct).unwrap();
        assert_eq!(&pt[..], &res[..]);
    }

    #[test]
    fn encode_32_20_16() {
        let key: Vec<u8> = (0x00..0x10).collect();
        let mut pt = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let ct = [0x2A, 0x0E, 0xDC, 0x0E, 0x94, 0x31, 0xFF, 0x73];
        let rc5 = RC5::<u32>::new(&key, 20).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&ct[..], &res[..]);
    }

    #[test]
    fn decode_32_20_16() {
        let key: Vec<u8> = (0x00..0x10).collect();
        let pt = [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut ct = [0x2A, 0x0E, 0xDC, 0x0E, 0x94, 0x31, 0xFF, 0x73];
        let rc5 = RC5::<u32>::new(&key, 20).unwrap();
        let res = RC5Algo::decrypt(&rc5, &mut ct).unwrap();
        assert_eq!(&pt[..], &res[..]);
    }

    #[test]
    fn encode_64_24_24() {
        let key: Vec<u8> = (0x00..0x18).collect();
        let mut pt: Vec<u8> = (0x00..0x10).collect();
        let ct = [
            0xA4, 0x67, 0x72, 0x82, 0x0E, 0xDB, 0xCE, 0x02, 0x35, 0xAB, 0xEA, 0x32, 0xAE, 0x71,
            0x78, 0xDA,
        ];
        let rc5 = RC5::<u64>::new(&key, 24).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&ct[..], &res[..]);
    }

    #[test]
    fn decode_64_24_24() {
        let key: Vec<u8> = (0x00..0x18).collect();
        let pt: Vec<u8> = (0x00..0x10).collect();
        let mut ct = [
            0xA4, 0x67, 0x72, 0x82, 0x0E, 0xDB, 0xCE, 0x02, 0x35, 0xAB, 0xEA, 0x32, 0xAE, 0x71,
            0x78, 0xDA,
        ];
        let rc5 = RC5::<u64>::new(&key, 24).unwrap();
        let res = RC5Algo::decrypt(&rc5, &mut ct).unwrap();
        assert_eq!(&pt[..], &res[..]);
    }

    const CT_128_28_32: [u8; 32] = [
        0xEC, 0xA5, 0x91, 0x09, 0x21, 0xA4, 0xF4, 0xCF, 0xDD, 0x7A, 0xD7, 0xAD, 0x20, 0xA1, 0xFC,
        0xBA, 0x06, 0x8E, 0xC7, 0xA7, 0xCD, 0x75, 0x2D, 0x68, 0xFE, 0x91, 0x4B, 0x7F, 0xE1, 0x80,
        0xB4, 0x40,
    ];

    #[test]
    fn encode_128_28_32() {
        let key: Vec<u8> = (0x00..0x20).collect();
        let mut pt: Vec<u8> = (0x00..0x20).collect();
        let rc5 = RC5::<u128>::new(&key, 28).unwrap();
        let res = RC5Algo::encrypt(&rc5, &mut pt).unwrap();
        assert_eq!(&CT_128_28_32[..], &res[..]);
    }

    #[test]
    fn decode_128_28_32() {
        let key: Vec<u8> = (0x00..0x20).collect();
        let pt: Vec<u8> = (0x00..0x20).collect();
        let mut ct = CT_128_28_32;
        let rc5 = RC5::<u128>::new(&key, 28).unwrap();
        let res = RC5Algo::decrypt(&rc5, &mut ct).unwrap();
        assert_eq!(&pt[..], &res[..]);
    }

    #[test]
    fn algo_metadata() {
        let rc5 = RC5::<u64>::new(b"key", 16).unwrap();
        assert_eq!(rc5.width(), Width::W64);
        assert_eq!(rc5.rounds(), 16);
        assert_eq!(rc5.block_size(), 16);
    }
}
