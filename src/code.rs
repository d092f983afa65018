use sp_std::convert::TryFrom;

/// A hash function code with no entry in [`Code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedCode(pub u64);

/// Well-known multihash function codes.
///
/// Decoding never requires a code to appear here; this table only names the
/// common ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Code {
  Identity,
  Sha1,
  Sha2_256,
  Sha2_512,
  Sha3_512,
  Sha3_384,
  Sha3_256,
  Sha3_224,
  Keccak256,
  Blake3,
  Blake2b256,
  Blake2b512,
}

impl Code {
  /// The multicodec table name.
  pub fn name(self) -> &'static str {
    match self {
      Code::Identity => "identity",
      Code::Sha1 => "sha1",
      Code::Sha2_256 => "sha2-256",
      Code::Sha2_512 => "sha2-512",
      Code::Sha3_512 => "sha3-512",
      Code::Sha3_384 => "sha3-384",
      Code::Sha3_256 => "sha3-256",
      Code::Sha3_224 => "sha3-224",
      Code::Keccak256 => "keccak-256",
      Code::Blake3 => "blake3",
      Code::Blake2b256 => "blake2b-256",
      Code::Blake2b512 => "blake2b-512",
    }
  }

  /// Default digest length in bytes. `None` for `identity`, whose digest is
  /// the content itself.
  pub fn digest_len(self) -> Option<usize> {
    match self {
      Code::Identity => None,
      Code::Sha1 => Some(20),
      Code::Sha3_224 => Some(28),
      Code::Sha2_256
      | Code::Sha3_256
      | Code::Keccak256
      | Code::Blake3
      | Code::Blake2b256 => Some(32),
      Code::Sha3_384 => Some(48),
      Code::Sha2_512 | Code::Sha3_512 | Code::Blake2b512 => Some(64),
    }
  }
}

impl From<Code> for u64 {
  fn from(code: Code) -> Self {
    match code {
      Code::Identity => 0x00,
      Code::Sha1 => 0x11,
      Code::Sha2_256 => 0x12,
      Code::Sha2_512 => 0x13,
      Code::Sha3_512 => 0x14,
      Code::Sha3_384 => 0x15,
      Code::Sha3_256 => 0x16,
      Code::Sha3_224 => 0x17,
      Code::Keccak256 => 0x1b,
      Code::Blake3 => 0x1e,
      Code::Blake2b256 => 0xb220,
      Code::Blake2b512 => 0xb240,
    }
  }
}

impl TryFrom<u64> for Code {
  type Error = UnsupportedCode;

  fn try_from(code: u64) -> core::result::Result<Self, Self::Error> {
    match code {
      0x00 => Ok(Code::Identity),
      0x11 => Ok(Code::Sha1),
      0x12 => Ok(Code::Sha2_256),
      0x13 => Ok(Code::Sha2_512),
      0x14 => Ok(Code::Sha3_512),
      0x15 => Ok(Code::Sha3_384),
      0x16 => Ok(Code::Sha3_256),
      0x17 => Ok(Code::Sha3_224),
      0x1b => Ok(Code::Keccak256),
      0x1e => Ok(Code::Blake3),
      0xb220 => Ok(Code::Blake2b256),
      0xb240 => Ok(Code::Blake2b512),
      other => Err(UnsupportedCode(other)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const ALL: [Code; 12] = [
    Code::Identity,
    Code::Sha1,
    Code::Sha2_256,
    Code::Sha2_512,
    Code::Sha3_512,
    Code::Sha3_384,
    Code::Sha3_256,
    Code::Sha3_224,
    Code::Keccak256,
    Code::Blake3,
    Code::Blake2b256,
    Code::Blake2b512,
  ];

  #[test]
  fn table_is_consistent() {
    for code in ALL {
      assert_eq!(Code::try_from(u64::from(code)), Ok(code), "{}", code.name());
    }
  }

  #[test]
  fn unknown_codes_are_reported() {
    assert_eq!(Code::try_from(0x99), Err(UnsupportedCode(0x99)));
  }

  #[test]
  fn sha2_256_is_0x12() {
    assert_eq!(u64::from(Code::Sha2_256), 0x12);
    assert_eq!(Code::Sha2_256.digest_len(), Some(32));
  }
}
