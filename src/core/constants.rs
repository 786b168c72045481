/*!
Constants for the hash registry.

The verification corpus is a versioned protocol: every compiled-in
verification value is defined relative to it, so none of these may change
without bumping [`VERIFY_PROTOCOL_VERSION`] and recomputing the catalog.
*/

/// Version of the self-test corpus and folding schedule
pub const VERIFY_PROTOCOL_VERSION: u32 = 1;

/// Number of keys hashed by the self-test; key `i` is the bytes `0..i`
pub const VERIFY_KEY_COUNT: usize = 256;

/// Seed used when hashing key `i` is `VERIFY_SEED_BASE - i`
pub const VERIFY_SEED_BASE: u64 = 256;

/// Seed used for the final pass over the concatenated digests
pub const VERIFY_FINAL_SEED: u64 = 0;

/// Smallest digest width a descriptor may declare, in bits
pub const MIN_HASH_BITS: u32 = 32;

/// Column widths for the hash listing
pub mod listing {
    /// Width of the name column
    pub const NAME_WIDTH: usize = 25;

    /// Width of the bit-count column
    pub const BITS_WIDTH: usize = 4;

    /// Width of the type column
    pub const TYPE_WIDTH: usize = 6;
}
