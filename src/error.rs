use core::fmt;

/// Errors raised when block-level input breaks the 64-byte framing.
///
/// Hashing a message with [`md5`](crate::md5) or [`Md5`](crate::Md5) never
/// produces one of these; they only surface when [`blocks`](crate::blocks) or
/// [`Block`](crate::Block) are driven directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Padded input whose length is not a multiple of the block size.
    UnalignedInput {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// A block built from a slice that is not exactly one block long.
    BlockLength {
        /// Length of the rejected slice in bytes.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::UnalignedInput { len } => write!(
                f,
                "padded input of {} bytes is not a multiple of the 64-byte block size",
                len
            ),
            Error::BlockLength { len } => {
                write!(f, "block must be exactly 64 bytes, got {}", len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
