//! Identity hashing for item keys.
//!
//! Uses FNV-1a over the little-endian bytes of the item's [`ItemId`]. The
//! hash depends only on identity, never on item contents, and is stable
//! across runs so bucket layouts are reproducible in tests.

use gridstow_core::ItemId;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Hash an item identity.
#[inline]
pub fn identity_hash(id: ItemId) -> u64 {
    let mut hash = FNV_OFFSET;
    for &b in &id.get().to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}
