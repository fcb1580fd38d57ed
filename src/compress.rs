use core::convert::TryFrom;

use byte_tools::{read_u32v_le, write_u32v_le};
use generic_array::typenum::U64;
use generic_array::GenericArray;

use crate::consts::{self, BLOCK_LEN, DIGEST_LEN, K, SHIFT};
use crate::Error;

/// The four chaining registers of an MD5 computation.
///
/// A `State` is a plain value: [`compress`] consumes one and returns its
/// successor, so the value after any block can be kept as a checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    /// Register A, the first four digest bytes.
    pub a: u32,
    /// Register B.
    pub b: u32,
    /// Register C.
    pub c: u32,
    /// Register D, the last four digest bytes.
    pub d: u32,
}

impl State {
    /// Register values every computation starts from.
    pub const INITIAL: State = State {
        a: consts::S0,
        b: consts::S1,
        c: consts::S2,
        d: consts::S3,
    };
}

impl Default for State {
    fn default() -> Self { State::INITIAL }
}

/// One 512-bit block, decoded into sixteen little-endian words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block([u32; 16]);

impl Block {
    /// Decode a block from exactly 64 bytes.
    pub fn new(bytes: &[u8; BLOCK_LEN]) -> Block { Block::from_chunk(bytes) }

    /// The message words `M[0..16]` of this block.
    pub fn words(&self) -> &[u32; 16] { &self.0 }

    // `chunk` must be exactly one block long
    pub(crate) fn from_chunk(chunk: &[u8]) -> Block {
        let mut words = [0u32; 16];
        read_u32v_le(&mut words, chunk);
        Block(words)
    }
}

impl<'a> TryFrom<&'a [u8]> for Block {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Block, Error> {
        if bytes.len() != BLOCK_LEN {
            return Err(Error::BlockLength { len: bytes.len() });
        }
        Ok(Block::from_chunk(bytes))
    }
}

impl<'a> From<&'a GenericArray<u8, U64>> for Block {
    fn from(bytes: &'a GenericArray<u8, U64>) -> Block {
        Block::from_chunk(bytes.as_slice())
    }
}

/// Run the 64 MD5 rounds of `block` over `state` and return the next state.
pub fn compress(state: State, block: &Block) -> State {
    fn f(u: u32, v: u32, w: u32) -> u32 { (u & v) | (!u & w) }

    fn g(u: u32, v: u32, w: u32) -> u32 { (u & w) | (v & !w) }

    fn h(u: u32, v: u32, w: u32) -> u32 { u ^ v ^ w }

    fn i(u: u32, v: u32, w: u32) -> u32 { v ^ (u | !w) }

    let data = block.words();

    let mut a = state.a;
    let mut b = state.b;
    let mut c = state.c;
    let mut d = state.d;

    for round in 0..64 {
        let (mix, index) = match round / 16 {
            0 => (f(b, c, d), round),
            1 => (g(b, c, d), (5 * round + 1) % 16),
            2 => (h(b, c, d), (3 * round + 5) % 16),
            _ => (i(b, c, d), (7 * round) % 16),
        };

        let rotated = a
            .wrapping_add(mix)
            .wrapping_add(K[round])
            .wrapping_add(data[index])
            .rotate_left(SHIFT[round]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    State {
        a: state.a.wrapping_add(a),
        b: state.b.wrapping_add(b),
        c: state.c.wrapping_add(c),
        d: state.d.wrapping_add(d),
    }
}

/// Serialize `state` as the 16-byte digest: A, B, C, D, each little-endian.
pub fn finalize(state: State) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    write_u32v_le(&mut out, &[state.a, state.b, state.c, state.d]);
    out
}
