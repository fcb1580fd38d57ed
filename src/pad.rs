use core::iter::FusedIterator;
use core::slice::ChunksExact;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use byte_tools::write_u64_le;
use log::debug;

use crate::compress::Block;
use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::Error;

/// Number of bytes [`pad`] produces for a message of `len` bytes.
///
/// Always a positive multiple of 64 and at least `len + 9`, or `None` when
/// that length does not fit in a `usize`.
pub const fn padded_len(len: usize) -> Option<usize> {
    let needed = match len.checked_add(1 + LENGTH_FIELD_LEN) {
        Some(needed) => needed,
        None => return None,
    };
    match needed % BLOCK_LEN {
        0 => Some(needed),
        rem => needed.checked_add(BLOCK_LEN - rem),
    }
}

/// Pad `message` to a whole number of blocks.
///
/// Appends `0x80`, zero bytes up to 56 mod 64, and the message length in
/// bits modulo 2^64 as a little-endian `u64`.
#[cfg(feature = "alloc")]
pub fn pad(message: &[u8]) -> Vec<u8> {
    let (body, tail) = split_tail(message);
    let tail = Tail::new(tail, bit_len(message.len() as u64));

    // a slice is at most isize::MAX bytes, so the padded length always fits
    let mut padded = Vec::with_capacity(padded_len(message.len()).unwrap_or(message.len()));
    padded.extend_from_slice(body);
    padded.extend_from_slice(tail.as_bytes());
    padded
}

/// Split a padded message into its blocks.
///
/// Fails with [`Error::UnalignedInput`] if `padded` is not a whole number of
/// 64-byte blocks, which [`pad`] never produces.
pub fn blocks(padded: &[u8]) -> Result<Blocks<'_>, Error> {
    if padded.len() % BLOCK_LEN != 0 {
        debug!("rejecting {} bytes of unaligned padded input", padded.len());
        return Err(Error::UnalignedInput { len: padded.len() });
    }
    Ok(Blocks::new(padded))
}

/// Lazy iterator over the blocks of a padded message.
///
/// Cloning yields an independent iterator positioned at the same block.
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Blocks<'a> {
    // callers guarantee `bytes.len() % BLOCK_LEN == 0`
    pub(crate) fn new(bytes: &'a [u8]) -> Blocks<'a> {
        Blocks { chunks: bytes.chunks_exact(BLOCK_LEN) }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.chunks.next().map(Block::from_chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.chunks.size_hint() }
}

impl<'a> ExactSizeIterator for Blocks<'a> {}

impl<'a> FusedIterator for Blocks<'a> {}

/// Message length in bits; the RFC keeps only the low 64 bits.
pub(crate) fn bit_len(byte_len: u64) -> u64 { byte_len.wrapping_mul(8) }

/// Split `message` into its whole blocks and the partial block after them.
pub(crate) fn split_tail(message: &[u8]) -> (&[u8], &[u8]) {
    message.split_at(message.len() - message.len() % BLOCK_LEN)
}

/// The final one or two padded blocks of a message, built on the stack.
pub(crate) struct Tail {
    buffer: [u8; 2 * BLOCK_LEN],
    len: usize,
}

impl Tail {
    /// `rest` is the partial block left over after all whole blocks.
    pub(crate) fn new(rest: &[u8], bit_len: u64) -> Tail {
        debug_assert!(rest.len() < BLOCK_LEN);

        let mut buffer = [0u8; 2 * BLOCK_LEN];
        buffer[..rest.len()].copy_from_slice(rest);
        buffer[rest.len()] = 0x80;

        let len = if rest.len() < BLOCK_LEN - LENGTH_FIELD_LEN {
            BLOCK_LEN
        } else {
            2 * BLOCK_LEN
        };
        write_u64_le(&mut buffer[len - LENGTH_FIELD_LEN..len], bit_len);

        Tail { buffer, len }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] { &self.buffer[..self.len] }

    pub(crate) fn blocks(&self) -> Blocks<'_> { Blocks::new(self.as_bytes()) }
}
