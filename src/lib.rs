//! An implementation of the [MD5][1] message digest, as specified by
//! [RFC 1321][2].
//!
//! # Usage
//!
//! Hash a whole message at once:
//!
//! ```rust
//! use hex_literal::hex;
//!
//! let digest = md5::md5(b"message digest");
//! assert_eq!(digest, hex!("f96b697d7cb7938d525a2f31aaf161d0"));
//! ```
//!
//! Or feed it in pieces through the [`Digest`] trait:
//!
//! ```rust
//! use hex_literal::hex;
//! use md5::{Digest, Md5};
//!
//! let mut hasher = Md5::new();
//! hasher.update(b"message ");
//! hasher.update(b"digest");
//! assert_eq!(hasher.finalize()[..], hex!("f96b697d7cb7938d525a2f31aaf161d0"));
//! ```
//!
//! The block-level pieces ([`pad`], [`blocks`], [`compress`], [`finalize`])
//! are public as well, for callers that drive the compression themselves.
//!
//! MD5 is broken as a cryptographic hash: collisions are cheap to produce.
//! Use it for interoperability and checksums only.
//!
//! [1]: https://en.wikipedia.org/wiki/MD5
//! [2]: https://tools.ietf.org/html/rfc1321

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use core::fmt;

use digest::block_buffer::Eager;
use digest::core_api::{
    AlgorithmName, Block as CoreBlock, BlockSizeUser, Buffer, BufferKindUser,
    CoreWrapper, FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
};
use digest::typenum::{Unsigned, U16, U64};
use digest::{HashMarker, Output};
use log::trace;

mod compress;
mod consts;
mod error;
mod pad;

pub use compress::{compress, finalize, Block, State};
pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use error::Error;
#[cfg(feature = "alloc")]
pub use pad::pad;
pub use pad::{blocks, padded_len, Blocks};

use pad::{bit_len, split_tail, Tail};

/// Compute the MD5 digest of `message`.
///
/// Whole blocks are compressed straight out of `message`; only the final
/// padded block or two are copied.
pub fn md5(message: &[u8]) -> [u8; DIGEST_LEN] {
    let (body, rest) = split_tail(message);
    let tail = Tail::new(rest, bit_len(message.len() as u64));

    let body = Blocks::new(body);
    let block_count = body.len() + tail.blocks().len();
    let state = body
        .chain(tail.blocks())
        .fold(State::INITIAL, |state, block| compress(state, &block));

    trace!("md5: {} bytes in {} blocks", message.len(), block_count);
    finalize(state)
}

/// Core MD5 hasher state, driven one block at a time by [`CoreWrapper`].
#[derive(Clone)]
pub struct Md5Core {
    block_len: u64,
    state: State,
}

impl HashMarker for Md5Core {}

impl BlockSizeUser for Md5Core {
    type BlockSize = U64;
}

impl BufferKindUser for Md5Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Md5Core {
    type OutputSize = U16;
}

impl UpdateCore for Md5Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[CoreBlock<Self>]) {
        // The length field is defined modulo 2^64, so wrapping is correct.
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        self.state = blocks
            .iter()
            .map(Block::from)
            .fold(self.state, |state, block| compress(state, &block));
    }
}

impl FixedOutputCore for Md5Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let byte_len = self
            .block_len
            .wrapping_mul(Self::BlockSize::U64)
            .wrapping_add(buffer.get_pos() as u64);
        trace!("md5: finalizing {} streamed bytes", byte_len);

        let mut state = self.state;
        buffer.len64_padding_le(bit_len(byte_len), |block| {
            state = compress(state, &Block::from(block))
        });
        out.copy_from_slice(&finalize(state));
    }
}

impl Default for Md5Core {
    #[inline]
    fn default() -> Self {
        Md5Core {
            block_len: 0,
            state: State::INITIAL,
        }
    }
}

impl Reset for Md5Core {
    #[inline]
    fn reset(&mut self) { *self = Default::default(); }
}

impl AlgorithmName for Md5Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md5")
    }
}

impl fmt::Debug for Md5Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md5Core { ... }")
    }
}

/// The MD5 hasher, accepting input in arbitrary pieces.
pub type Md5 = CoreWrapper<Md5Core>;
