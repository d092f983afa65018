use thiserror::Error;

use crate::varint::MAX_VARINT_LEN;

/// Result type alias using the crate [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while decoding or assembling a multihash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
  /// The input does not parse as base58 or as a varint-framed multihash.
  #[error("malformed input: {0}")]
  MalformedInput(Malformed),

  /// The input parses, but its fields do not describe a valid multihash.
  #[error("invalid multihash: {0}")]
  InvalidMultihash(Invalid),
}

/// Why an input could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Malformed {
  #[error("string contains characters outside the base58btc alphabet")]
  InvalidBase58,

  #[error("input ended inside the multihash header")]
  Truncated,

  #[error("varint did not terminate within {} bytes", MAX_VARINT_LEN)]
  VarintOverflow,

  #[error("varint is not minimally encoded")]
  NonMinimalVarint,

  #[error("declared digest length {declared} but {actual} bytes follow the header")]
  LengthMismatch { declared: u64, actual: usize },
}

/// Why a set of fields does not form a multihash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Invalid {
  #[error("size {size} does not match digest length {actual}")]
  SizeMismatch { size: u64, actual: usize },

  #[error("hash function code {0:#x} does not fit in 63 bits")]
  CodeTooLarge(u64),

  #[error("hash function code is empty")]
  EmptyCode,

  #[error("hash function code has {0} significant bytes, at most 8 are allowed")]
  CodeBytesTooLong(usize),

  #[error("hash function code {0:#x} does not fit the fixed-width field")]
  CodeOutOfRange(u64),

  #[error("digest is {actual} bytes, the fixed-width field holds {expected}")]
  DigestWidth { expected: usize, actual: usize },
}

impl From<Malformed> for Error {
  fn from(e: Malformed) -> Self { Error::MalformedInput(e) }
}

impl From<Invalid> for Error {
  fn from(e: Invalid) -> Self { Error::InvalidMultihash(e) }
}
