use std::hash::Hasher;

use siphasher::sip::SipHasher;

/// SipHash-2-4 under fixed zero keys: identical across processes and releases,
/// unlike `std`'s randomly keyed hasher.
pub(crate) fn stable_hash(bytes: &[u8]) -> u64 {
  let mut hasher = SipHasher::new();
  hasher.write(bytes);
  hasher.finish()
}
