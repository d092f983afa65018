//! # ipfs-multihash
//!
//! Encoding and decoding of [multihash](https://github.com/multiformats/multihash)
//! identifiers between their base58btc text form (IPFS CIDv0, e.g.
//! `QmTJd6JnxTGrLgJqLfnhMHXaytrSaBHvos4ECeVTvqwHdi`) and a structured form of
//! hash function code, digest bytes and digest length.
//!
//! ```
//! use ipfs_multihash::{decode, encode, from_struct_fields, to_struct_fields};
//!
//! let mh = decode("QmTJd6JnxTGrLgJqLfnhMHXaytrSaBHvos4ECeVTvqwHdi").unwrap();
//! assert_eq!(mh.hash_function(), 0x12);
//! assert_eq!(mh.size(), 32);
//!
//! let fields = to_struct_fields(&mh);
//! let back = from_struct_fields(&fields.hash_function, &fields.digest, fields.size).unwrap();
//! assert_eq!(encode(&back), "QmTJd6JnxTGrLgJqLfnhMHXaytrSaBHvos4ECeVTvqwHdi");
//! ```
#![deny(
  clippy::missing_errors_doc,
  clippy::missing_panics_doc,
  clippy::missing_safety_doc
)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
#[cfg(test)]
extern crate rand;

#[cfg(any(test, feature = "arb"))]
mod arb;
pub mod base58;
pub mod code;
pub mod error;
pub mod fields;
pub mod multihash;
#[cfg(feature = "serde-codec")]
mod serde;
pub mod varint;

pub use code::{
  Code,
  UnsupportedCode,
};
pub use error::{
  Error,
  Invalid,
  Malformed,
  Result,
};
pub use fields::{
  from_struct_fields,
  to_struct_fields,
  FixedFields,
  StructFields,
};
pub use multihash::{
  decode,
  encode,
  Multihash,
};
pub use varint::{
  decode_varint,
  encode_varint,
};

#[cfg(test)]
pub mod tests {
  use super::*;

  /// The CIDv0 of a sha2-256 digest.
  pub const CID_V0: &str = "QmTJd6JnxTGrLgJqLfnhMHXaytrSaBHvos4ECeVTvqwHdi";

  pub const CID_V0_DIGEST: [u8; 32] = [
    73, 197, 113, 196, 240, 65, 205, 146, 12, 137, 174, 231, 110, 152, 122, 213,
    137, 129, 35, 3, 24, 171, 244, 195, 151, 160, 208, 0, 39, 253, 35, 161,
  ];

  #[test]
  fn struct_path_reproduces_the_string() {
    let mh = decode(CID_V0).unwrap();
    let StructFields { hash_function, digest, size } = to_struct_fields(&mh);
    let rebuilt = from_struct_fields(&hash_function, &digest, size).unwrap();
    assert_eq!(rebuilt, mh);
    assert_eq!(encode(&rebuilt), CID_V0);
  }

  #[test]
  fn both_paths_agree_on_the_fields() {
    let from_string = decode(CID_V0).unwrap();
    let from_fields = from_struct_fields(&[0x12], &CID_V0_DIGEST, 32).unwrap();
    assert_eq!(from_string, from_fields);
    assert_eq!(from_string.known_code(), Some(Code::Sha2_256));
  }

  #[test]
  fn errors_are_distinguishable() {
    match decode("Qm0") {
      Err(Error::MalformedInput(Malformed::InvalidBase58)) => {}
      other => panic!("unexpected {:?}", other),
    }
    match from_struct_fields(&[0x12], &CID_V0_DIGEST, 33) {
      Err(Error::InvalidMultihash(Invalid::SizeMismatch { .. })) => {}
      other => panic!("unexpected {:?}", other),
    }
  }

  #[quickcheck]
  fn every_path_agrees(mh: Multihash) -> bool {
    let fields = to_struct_fields(&mh);
    let via_fields =
      from_struct_fields(&fields.hash_function, &fields.digest, fields.size);
    let via_string = decode(&encode(&mh));
    via_fields.is_ok() && via_fields == via_string
  }
}
