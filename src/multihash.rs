//! The multihash value type.
//!
//! Wire form: `varint(code) || varint(digest length) || digest`. CIDv0 is this
//! byte string in base58btc.

use alloc::string::String;
use sp_std::{
  convert::TryFrom,
  fmt,
  str::FromStr,
  vec::Vec,
};

use crate::{
  base58,
  code::Code,
  error::{
    Error,
    Invalid,
    Malformed,
    Result,
  },
  varint::{
    decode_varint,
    write_varint,
    MAX_VARINT_LEN,
    MAX_VARINT_VALUE,
  },
};

/// A self-describing digest: a hash function code and the digest it produced.
///
/// The digest length is always `digest().len()`; every constructor checks
/// that the declared length agrees before a value is built.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multihash {
  code: u64,
  digest: Vec<u8>,
}

impl Multihash {
  /// Wraps a digest produced by the hash function `code`.
  ///
  /// # Errors
  ///
  /// Returns `InvalidMultihash(CodeTooLarge)` if `code` does not fit in 63
  /// bits.
  pub fn wrap(code: u64, digest: &[u8]) -> Result<Self> {
    if code > MAX_VARINT_VALUE {
      return Err(Invalid::CodeTooLarge(code).into());
    }
    Ok(Multihash { code, digest: digest.to_vec() })
  }

  /// Like [`Multihash::wrap`], with an explicit digest length.
  ///
  /// # Errors
  ///
  /// Returns `InvalidMultihash(SizeMismatch)` if `size` is not the length of
  /// `digest`, and `InvalidMultihash(CodeTooLarge)` as for `wrap`.
  pub fn new(code: u64, digest: &[u8], size: u64) -> Result<Self> {
    if digest.len() as u64 != size {
      log::debug!(
        "rejecting multihash: size {} but digest is {} bytes",
        size,
        digest.len()
      );
      return Err(Invalid::SizeMismatch { size, actual: digest.len() }.into());
    }
    Self::wrap(code, digest)
  }

  /// The hash function code.
  pub fn hash_function(&self) -> u64 { self.code }

  /// The hash function, if it is one of the well-known codes.
  pub fn known_code(&self) -> Option<Code> { Code::try_from(self.code).ok() }

  pub fn digest(&self) -> &[u8] { &self.digest }

  /// The digest length in bytes.
  pub fn size(&self) -> u64 { self.digest.len() as u64 }

  /// Parses the binary wire form.
  ///
  /// # Errors
  ///
  /// Returns `MalformedInput` if a varint is truncated, unterminated or not
  /// minimal, or if the bytes after the header are not exactly the declared
  /// digest length.
  pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
    let (code, code_len) = decode_varint(bytes, 0)?;
    let (size, size_len) = decode_varint(bytes, code_len)?;
    let digest = &bytes[code_len + size_len..];
    if digest.len() as u64 != size {
      log::debug!(
        "rejecting multihash {:#x}: declared {} digest bytes, found {}",
        code,
        size,
        digest.len()
      );
      return Err(
        Malformed::LengthMismatch { declared: size, actual: digest.len() }
          .into(),
      );
    }
    log::trace!("decoded multihash {:#x} with {} digest bytes", code, size);
    Ok(Multihash { code, digest: digest.to_vec() })
  }

  /// Serializes to the binary wire form.
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut bytes =
      Vec::with_capacity(2 * MAX_VARINT_LEN + self.digest.len());
    // Both values are at most MAX_VARINT_VALUE: the code is checked on
    // construction and no digest reaches 2^63 bytes.
    let _ = write_varint(self.code, &mut bytes);
    let _ = write_varint(self.size(), &mut bytes);
    bytes.extend_from_slice(&self.digest);
    bytes
  }

  /// Parses a base58btc multihash string, e.g. a CIDv0.
  ///
  /// # Errors
  ///
  /// Returns `MalformedInput(InvalidBase58)` for characters outside the
  /// base58 alphabet, otherwise fails as [`Multihash::from_bytes`].
  pub fn from_base58(s: &str) -> Result<Self> {
    Self::from_bytes(&base58::decode(s)?)
  }

  /// Renders the base58btc string.
  pub fn to_base58(&self) -> String { base58::encode(&self.to_bytes()) }
}

impl fmt::Debug for Multihash {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut s = f.debug_struct("Multihash");
    match self.known_code() {
      Some(code) => s.field("code", &code.name()),
      None => s.field("code", &format_args!("{:#x}", self.code)),
    };
    s.field("size", &self.size()).field("digest", &self.digest).finish()
  }
}

impl fmt::Display for Multihash {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.to_base58())
  }
}

impl FromStr for Multihash {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::from_base58(s) }
}

impl TryFrom<&[u8]> for Multihash {
  type Error = Error;

  fn try_from(bytes: &[u8]) -> Result<Self> { Self::from_bytes(bytes) }
}

impl TryFrom<Vec<u8>> for Multihash {
  type Error = Error;

  fn try_from(bytes: Vec<u8>) -> Result<Self> { Self::from_bytes(&bytes) }
}

impl From<Multihash> for Vec<u8> {
  fn from(mh: Multihash) -> Self { mh.to_bytes() }
}

/// Decodes a base58btc multihash string.
///
/// # Errors
///
/// See [`Multihash::from_base58`].
pub fn decode(cid: &str) -> Result<Multihash> { Multihash::from_base58(cid) }

/// Encodes a multihash as a base58btc string.
pub fn encode(mh: &Multihash) -> String { mh.to_base58() }
