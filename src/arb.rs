use quickcheck::{
  Arbitrary,
  Gen,
};
use rand::Rng;
use sp_std::{
  boxed::Box,
  vec::Vec,
};

use crate::{
  code::Code,
  multihash::Multihash,
  varint::MAX_VARINT_VALUE,
};

const KNOWN: [Code; 6] = [
  Code::Identity,
  Code::Sha1,
  Code::Sha2_256,
  Code::Sha3_512,
  Code::Blake3,
  Code::Blake2b256,
];

impl Arbitrary for Multihash {
  fn arbitrary(g: &mut Gen) -> Self {
    let mut rng = rand::thread_rng();
    // Mostly well-known codes with their usual digest length, with some
    // arbitrary codes and lengths to reach multi-byte varints.
    let (code, len) = if rng.gen_ratio(2, 3) {
      let code = *g.choose(&KNOWN).unwrap_or(&Code::Sha2_256);
      (u64::from(code), code.digest_len().unwrap_or_else(|| rng.gen_range(0..64)))
    }
    else {
      let bits = rng.gen_range(0..63);
      (u64::arbitrary(g) & (MAX_VARINT_VALUE >> bits), rng.gen_range(0..300))
    };
    let digest: Vec<u8> = (0..len).map(|_| u8::arbitrary(g)).collect();
    Multihash::wrap(code, &digest)
      .unwrap_or_else(|_| unreachable!("arbitrary code fits in 63 bits"))
  }

  fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
    let code = self.hash_function();
    let digest = self.digest().to_vec();
    Box::new(
      digest
        .shrink()
        .filter_map(move |d| Multihash::wrap(code, &d).ok()),
    )
  }
}
