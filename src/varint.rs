//! Unsigned LEB128 varints, as framed by multiformats.
//!
//! Seven bits per byte, least significant group first, with the high bit set on
//! every byte but the last. Multiformats caps varints at nine bytes, which
//! leaves 63 bits of payload.

use sp_std::vec::Vec;
use unsigned_varint::{
  decode,
  encode,
};

use crate::error::{
  Invalid,
  Malformed,
  Result,
};

/// Longest varint accepted in either direction.
pub const MAX_VARINT_LEN: usize = 9;

/// Largest value that encodes within [`MAX_VARINT_LEN`] bytes.
pub const MAX_VARINT_VALUE: u64 = (1 << 63) - 1;

/// Encodes `n` as a varint.
///
/// # Errors
///
/// Returns `InvalidMultihash(CodeTooLarge)` if `n` exceeds
/// [`MAX_VARINT_VALUE`].
pub fn encode_varint(n: u64) -> Result<Vec<u8>> {
  let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
  write_varint(n, &mut buf)?;
  Ok(buf)
}

/// Appends the varint encoding of `n` to `out`.
///
/// # Errors
///
/// Same as [`encode_varint`].
pub fn write_varint(n: u64, out: &mut Vec<u8>) -> Result<()> {
  if n > MAX_VARINT_VALUE {
    return Err(Invalid::CodeTooLarge(n).into());
  }
  let mut buf = encode::u64_buffer();
  out.extend_from_slice(encode::u64(n, &mut buf));
  Ok(())
}

/// Reads a varint starting at `offset` and returns its value together with
/// the number of bytes it occupied.
///
/// # Errors
///
/// Returns `MalformedInput` with
/// - `Truncated` if the input ends before the terminating byte (or `offset` is
///   past the end),
/// - `VarintOverflow` if no terminating byte appears within
///   [`MAX_VARINT_LEN`] bytes,
/// - `NonMinimalVarint` if the encoding carries a redundant trailing zero
///   group.
pub fn decode_varint(bytes: &[u8], offset: usize) -> Result<(u64, usize)> {
  let input = bytes.get(offset..).ok_or(Malformed::Truncated)?;
  let window = &input[..input.len().min(MAX_VARINT_LEN)];
  let len = match window.iter().position(|b| decode::is_last(*b)) {
    Some(i) => i + 1,
    None if window.len() == MAX_VARINT_LEN => {
      return Err(Malformed::VarintOverflow.into())
    }
    None => return Err(Malformed::Truncated.into()),
  };
  let framed = &window[..len];
  if len > 1 && framed[len - 1] == 0 {
    return Err(Malformed::NonMinimalVarint.into());
  }
  match decode::u64(framed) {
    Ok((n, _)) => Ok((n, len)),
    Err(decode::Error::Insufficient) => Err(Malformed::Truncated.into()),
    Err(_) => Err(Malformed::VarintOverflow.into()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;

  #[test]
  fn single_byte_values() {
    assert_eq!(encode_varint(0).unwrap(), vec![0x00]);
    assert_eq!(encode_varint(0x12).unwrap(), vec![0x12]);
    assert_eq!(encode_varint(0x7f).unwrap(), vec![0x7f]);
    assert_eq!(decode_varint(&[0x20], 0).unwrap(), (0x20, 1));
  }

  #[test]
  fn multi_byte_values() {
    assert_eq!(encode_varint(0x80).unwrap(), vec![0x80, 0x01]);
    assert_eq!(encode_varint(300).unwrap(), vec![0xac, 0x02]);
    // blake2b-256
    assert_eq!(encode_varint(0xb220).unwrap(), vec![0xa0, 0xe4, 0x02]);
    assert_eq!(decode_varint(&[0xa0, 0xe4, 0x02, 0x20], 0).unwrap(), (
      0xb220, 3
    ));
  }

  #[test]
  fn reads_at_offset() {
    let bytes = [0x12, 0xac, 0x02, 0xff];
    assert_eq!(decode_varint(&bytes, 1).unwrap(), (300, 2));
    assert_eq!(
      decode_varint(&bytes, 4),
      Err(Error::MalformedInput(Malformed::Truncated))
    );
    assert_eq!(
      decode_varint(&bytes, 9),
      Err(Error::MalformedInput(Malformed::Truncated))
    );
  }

  #[test]
  fn largest_value_fits_the_cap() {
    let bytes = encode_varint(MAX_VARINT_VALUE).unwrap();
    assert_eq!(bytes.len(), MAX_VARINT_LEN);
    assert_eq!(decode_varint(&bytes, 0).unwrap(), (
      MAX_VARINT_VALUE,
      MAX_VARINT_LEN
    ));
    assert_eq!(
      encode_varint(MAX_VARINT_VALUE + 1),
      Err(Error::InvalidMultihash(Invalid::CodeTooLarge(1 << 63)))
    );
  }

  #[test]
  fn unterminated_varint_is_rejected() {
    let bytes = [0xff; 16];
    assert_eq!(
      decode_varint(&bytes, 0),
      Err(Error::MalformedInput(Malformed::VarintOverflow))
    );
    // exactly nine continuation bytes followed by a terminator is still too
    // long
    let mut ten = vec![0x80; 9];
    ten.push(0x01);
    assert_eq!(
      decode_varint(&ten, 0),
      Err(Error::MalformedInput(Malformed::VarintOverflow))
    );
  }

  #[test]
  fn truncated_varint_is_rejected() {
    assert_eq!(
      decode_varint(&[], 0),
      Err(Error::MalformedInput(Malformed::Truncated))
    );
    assert_eq!(
      decode_varint(&[0x80, 0x80], 0),
      Err(Error::MalformedInput(Malformed::Truncated))
    );
  }

  #[test]
  fn non_minimal_varint_is_rejected() {
    assert_eq!(
      decode_varint(&[0x92, 0x00], 0),
      Err(Error::MalformedInput(Malformed::NonMinimalVarint))
    );
    assert_eq!(
      decode_varint(&[0x80, 0x00], 0),
      Err(Error::MalformedInput(Malformed::NonMinimalVarint))
    );
  }

  #[quickcheck]
  fn varint_identity(n: u64) -> bool {
    let n = n & MAX_VARINT_VALUE;
    match encode_varint(n) {
      Ok(bytes) => decode_varint(&bytes, 0) == Ok((n, bytes.len())),
      Err(_) => false,
    }
  }
}
