//! Multihashes serialize as their base58btc string.

use alloc::string::String;
use core::fmt;
use serde::{
  de,
  Deserialize,
  Deserializer,
  Serialize,
  Serializer,
};

use crate::multihash::Multihash;

impl Serialize for Multihash {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_base58())
  }
}

struct Base58Visitor;

impl<'de> de::Visitor<'de> for Base58Visitor {
  type Value = Multihash;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a base58btc multihash string")
  }

  fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
    Multihash::from_base58(v).map_err(E::custom)
  }

  fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
    self.visit_str(&v)
  }
}

impl<'de> Deserialize<'de> for Multihash {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_str(Base58Visitor)
  }
}
