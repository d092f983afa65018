//! Splitting a multihash into separately stored fields.
//!
//! Storage that cannot hold a single length-framed blob (a contract struct,
//! a database row) keeps the hash function, the digest and the size as
//! independent values. [`StructFields`] is the variable-width split;
//! [`FixedFields`] is the `bytes2` / `bytes32` / `uint8` layout used for
//! sha2-256 CIDv0 hashes.

use byteorder::{
  BigEndian,
  ByteOrder,
};
use sp_std::{
  convert::TryFrom,
  vec::Vec,
};

use crate::{
  error::{
    Error,
    Invalid,
    Result,
  },
  multihash::Multihash,
};

/// Width of the digest field in [`FixedFields`].
pub const FIXED_DIGEST_LEN: usize = 32;

/// A multihash with its framing stripped.
///
/// `hash_function` holds the code as big-endian bytes, not as a varint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-codec", derive(serde::Serialize, serde::Deserialize))]
pub struct StructFields {
  pub hash_function: Vec<u8>,
  pub digest: Vec<u8>,
  pub size: u64,
}

/// Splits `mh` into its code bytes, digest bytes and size.
///
/// The code is written in the fewest big-endian bytes that hold it, and always
/// in at least one byte.
pub fn to_struct_fields(mh: &Multihash) -> StructFields {
  let mut be = [0u8; 8];
  BigEndian::write_u64(&mut be, mh.hash_function());
  let skip = be[..7].iter().take_while(|b| **b == 0).count();
  StructFields {
    hash_function: be[skip..].to_vec(),
    digest: mh.digest().to_vec(),
    size: mh.size(),
  }
}

/// Reassembles a multihash from its stored fields.
///
/// Leading zero bytes in `hash_function` are ignored, so a code stored in a
/// wider field than it needs reads back unchanged.
///
/// # Errors
///
/// Returns `InvalidMultihash` with
/// - `SizeMismatch` if `size` is not the length of `digest`,
/// - `EmptyCode` if `hash_function` is empty,
/// - `CodeBytesTooLong` if it has more than eight significant bytes,
/// - `CodeTooLarge` if the code does not fit in 63 bits.
pub fn from_struct_fields(
  hash_function: &[u8],
  digest: &[u8],
  size: u64,
) -> Result<Multihash> {
  if digest.len() as u64 != size {
    log::debug!(
      "rejecting struct fields: size {} but digest is {} bytes",
      size,
      digest.len()
    );
    return Err(Invalid::SizeMismatch { size, actual: digest.len() }.into());
  }
  let code = read_code(hash_function)?;
  Multihash::wrap(code, digest)
}

fn read_code(bytes: &[u8]) -> Result<u64> {
  if bytes.is_empty() {
    return Err(Invalid::EmptyCode.into());
  }
  let skip = bytes.iter().take_while(|b| **b == 0).count();
  let significant = &bytes[skip..];
  match significant.len() {
    0 => Ok(0),
    n if n > 8 => Err(Invalid::CodeBytesTooLong(n).into()),
    n => Ok(BigEndian::read_uint(significant, n)),
  }
}

impl From<&Multihash> for StructFields {
  fn from(mh: &Multihash) -> Self { to_struct_fields(mh) }
}

impl TryFrom<StructFields> for Multihash {
  type Error = Error;

  fn try_from(fields: StructFields) -> Result<Self> {
    from_struct_fields(&fields.hash_function, &fields.digest, fields.size)
  }
}

impl TryFrom<&StructFields> for Multihash {
  type Error = Error;

  fn try_from(fields: &StructFields) -> Result<Self> {
    from_struct_fields(&fields.hash_function, &fields.digest, fields.size)
  }
}

/// The fixed-width contract layout: `bytes2` code, `bytes32` digest, `uint8`
/// size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-codec", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
  feature = "scale-codec",
  derive(parity_scale_codec::Encode, parity_scale_codec::Decode)
)]
pub struct FixedFields {
  pub hash_function: [u8; 2],
  pub digest: [u8; FIXED_DIGEST_LEN],
  pub size: u8,
}

impl TryFrom<&Multihash> for FixedFields {
  type Error = Error;

  /// # Errors
  ///
  /// Returns `InvalidMultihash(CodeOutOfRange)` if the code needs more than two
  /// bytes and `InvalidMultihash(DigestWidth)` unless the digest is exactly 32
  /// bytes.
  fn try_from(mh: &Multihash) -> Result<Self> {
    let code = u16::try_from(mh.hash_function())
      .map_err(|_| Invalid::CodeOutOfRange(mh.hash_function()))?;
    let digest = <[u8; FIXED_DIGEST_LEN]>::try_from(mh.digest()).map_err(|_| {
      Invalid::DigestWidth {
        expected: FIXED_DIGEST_LEN,
        actual: mh.digest().len(),
      }
    })?;
    let mut hash_function = [0u8; 2];
    BigEndian::write_u16(&mut hash_function, code);
    Ok(FixedFields { hash_function, digest, size: FIXED_DIGEST_LEN as u8 })
  }
}

impl TryFrom<FixedFields> for Multihash {
  type Error = Error;

  /// # Errors
  ///
  /// Returns `InvalidMultihash(SizeMismatch)` unless `size` is 32.
  fn try_from(fields: FixedFields) -> Result<Self> {
    Multihash::new(
      u64::from(BigEndian::read_u16(&fields.hash_function)),
      &fields.digest,
      u64::from(fields.size),
    )
  }
}
