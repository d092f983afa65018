//! Base58 with the Bitcoin alphabet, the text form of CIDv0.
//!
//! The string carries no multibase prefix.

use alloc::string::String;
use multibase::Base;
use sp_std::vec::Vec;

use crate::error::{
  Malformed,
  Result,
};

/// The Bitcoin base58 alphabet. `0`, `O`, `I` and `l` are excluded.
pub const ALPHABET: &str =
  "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub fn encode(bytes: &[u8]) -> String { Base::Base58Btc.encode(bytes) }

/// Decodes a base58btc string into bytes.
///
/// # Errors
///
/// Returns `MalformedInput(InvalidBase58)` if `s` contains a character
/// outside [`ALPHABET`].
pub fn decode(s: &str) -> Result<Vec<u8>> {
  if let Some(c) = s.chars().find(|c| !ALPHABET.contains(*c)) {
    log::debug!("rejecting base58 input: {:?} is not in the alphabet", c);
    return Err(Malformed::InvalidBase58.into());
  }
  Base::Base58Btc.decode(s).map_err(|e| {
    log::debug!("rejecting base58 input: {}", e);
    Malformed::InvalidBase58.into()
  })
}
