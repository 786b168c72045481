/*!
Hash descriptors.

A [`HashDescriptor`] is the immutable, self-describing record for one hash
algorithm variant: identity, capability flags, digest width, entry points,
optional init/seed/seed-fix hooks, and the expected verification values.

The hash function contract: given input bytes, a [`SeedState`] and an output
buffer, write exactly `bits / 8` bytes. The result must depend only on the
input, the seed state and any state established by `init`.
*/

pub mod endian;
pub mod flags;
pub mod seed;

use std::fmt;

use crate::core::constants::MIN_HASH_BITS;
use crate::core::error::{descriptor_err, Result};

pub use endian::{host_is_little_endian, ByteOrder, Endianness};
pub use flags::{HashFlags, ImplFlags, License};
pub use seed::SeedState;

/// Hash entry point
pub type HashFn = fn(input: &[u8], seed: &SeedState, out: &mut [u8]);

/// One-time setup; `false` makes the descriptor unusable for this run
pub type InitFn = fn() -> bool;

/// Derives seed state from a 64-bit seed
pub type SeedFn = fn(seed: u64) -> SeedState;

/// Maps a requested seed away from known-weak values
pub type SeedFixFn = fn(descriptor: &HashDescriptor, seed: u64) -> u64;

/// Whether seed fix-ups are applied when deriving seed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Apply the descriptor's seed fix (or bad-seed exclusion)
    AllowFix,
    /// Use the seed exactly as given
    Forced,
}

/// Immutable description of one hash algorithm variant
pub struct HashDescriptor {
    name: String,
    family: String,
    description: String,
    hash_flags: HashFlags,
    impl_flags: ImplFlags,
    bits: u32,
    verification_le: u32,
    verification_be: u32,
    native: HashFn,
    byteswapped: HashFn,
    init: Option<InitFn>,
    seed: Option<SeedFn>,
    seed_fix: Option<SeedFixFn>,
    bad_seeds: Vec<u64>,
    sort_order: u32,
}

impl HashDescriptor {
    /// Start building a descriptor
    pub fn builder(name: impl Into<String>, family: impl Into<String>) -> HashDescriptorBuilder {
        HashDescriptorBuilder::new(name.into(), family.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hash_flags(&self) -> HashFlags {
        self.hash_flags
    }

    pub fn impl_flags(&self) -> ImplFlags {
        self.impl_flags
    }

    /// Digest width in bits
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Digest width in bytes
    pub fn hash_bytes(&self) -> usize {
        (self.bits / 8) as usize
    }

    pub fn sort_order(&self) -> u32 {
        self.sort_order
    }

    pub fn bad_seeds(&self) -> &[u64] {
        &self.bad_seeds
    }

    pub fn is_mock(&self) -> bool {
        self.hash_flags.contains(HashFlags::MOCK)
    }

    pub fn is_crypto(&self) -> bool {
        self.hash_flags.contains(HashFlags::CRYPTOGRAPHIC)
    }

    /// Declares one canonical output regardless of host byte order
    pub fn is_endian_defined(&self) -> bool {
        self.hash_flags.contains(HashFlags::ENDIAN_INDEPENDENT)
    }

    /// Both framings share one entry point
    pub fn is_canonical_both(&self) -> bool {
        self.impl_flags.contains(ImplFlags::CANONICAL_BOTH)
    }

    /// True when `native` and `byteswapped` are the same callable
    pub fn same_callable(&self) -> bool {
        std::ptr::fn_addr_eq(self.native, self.byteswapped)
    }

    /// Expected self-test value for a little- or big-endian framing.
    ///
    /// Other selections are resolved against the host first. Zero means the
    /// value is not known yet.
    pub fn verification(&self, endian: Endianness) -> u32 {
        let little = match endian {
            Endianness::Little => true,
            Endianness::Big => false,
            other => {
                (other.resolve(self.impl_flags) == ByteOrder::Native) == host_is_little_endian()
            }
        };
        if little {
            self.verification_le
        } else {
            self.verification_be
        }
    }

    pub fn verification_le(&self) -> u32 {
        self.verification_le
    }

    pub fn verification_be(&self) -> u32 {
        self.verification_be
    }

    /// Entry point for a byte order
    pub fn entry(&self, order: ByteOrder) -> HashFn {
        match order {
            ByteOrder::Native => self.native,
            ByteOrder::Swapped => self.byteswapped,
        }
    }

    /// Entry point producing the requested framing on this host
    pub fn hash_fn(&self, endian: Endianness) -> HashFn {
        self.entry(endian.resolve(self.impl_flags))
    }

    /// Hash `input` into the first `bits / 8` bytes of `out`.
    ///
    /// Panics if `out` is shorter than the digest.
    pub fn hash(&self, input: &[u8], seed: &SeedState, endian: Endianness, out: &mut [u8]) {
        let n = self.hash_bytes();
        (self.hash_fn(endian))(input, seed, &mut out[..n]);
    }

    /// Run the init hook. Descriptors without one always succeed.
    pub fn init(&self) -> bool {
        self.init.map_or(true, |f| f())
    }

    pub fn has_init(&self) -> bool {
        self.init.is_some()
    }

    pub fn has_seed_fn(&self) -> bool {
        self.seed.is_some()
    }

    pub fn is_bad_seed(&self, seed: u64) -> bool {
        self.bad_seeds.contains(&seed)
    }

    /// Apply seed width and weak-seed corrections
    pub fn fixed_seed(&self, seed: u64) -> u64 {
        let mask = if self.hash_flags.contains(HashFlags::SMALL_SEED) {
            0xffff_ffff
        } else {
            u64::MAX
        };
        let mut seed = seed & mask;
        if let Some(fix) = self.seed_fix {
            return fix(self, seed);
        }
        // Stepping stays inside the seed width
        while self.is_bad_seed(seed) {
            seed = seed.wrapping_add(1) & mask;
        }
        seed
    }

    /// Derive the seed state to pass into hash calls
    pub fn seed(&self, seed: u64, mode: SeedMode) -> SeedState {
        let seed = match mode {
            SeedMode::AllowFix => self.fixed_seed(seed),
            SeedMode::Forced => seed,
        };
        match self.seed {
            Some(f) => f(seed),
            None => SeedState::from_seed(seed),
        }
    }
}

impl fmt::Debug for HashDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashDescriptor")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("bits", &self.bits)
            .field("hash_flags", &self.hash_flags)
            .field("impl_flags", &self.impl_flags)
            .field("verification_le", &format_args!("{:#010x}", self.verification_le))
            .field("verification_be", &format_args!("{:#010x}", self.verification_be))
            .field("sort_order", &self.sort_order)
            .finish_non_exhaustive()
    }
}

/// Builder for [`HashDescriptor`]; validation happens in [`build`](Self::build)
#[derive(Clone)]
pub struct HashDescriptorBuilder {
    name: String,
    family: String,
    description: String,
    hash_flags: HashFlags,
    impl_flags: ImplFlags,
    bits: u32,
    verification_le: u32,
    verification_be: u32,
    native: Option<HashFn>,
    byteswapped: Option<HashFn>,
    init: Option<InitFn>,
    seed: Option<SeedFn>,
    seed_fix: Option<SeedFixFn>,
    bad_seeds: Vec<u64>,
    sort_order: u32,
}

impl HashDescriptorBuilder {
    fn new(name: String, family: String) -> Self {
        Self {
            name,
            family,
            description: String::new(),
            hash_flags: HashFlags::NONE,
            impl_flags: ImplFlags::NONE,
            bits: 0,
            verification_le: 0,
            verification_be: 0,
            native: None,
            byteswapped: None,
            init: None,
            seed: None,
            seed_fix: None,
            bad_seeds: Vec::new(),
            sort_order: 0,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn hash_flags(mut self, flags: HashFlags) -> Self {
        self.hash_flags = flags;
        self
    }

    pub fn impl_flags(mut self, flags: ImplFlags) -> Self {
        self.impl_flags = flags;
        self
    }

    pub fn bits(mut self, bits: u32) -> Self {
        self.bits = bits;
        self
    }

    /// Expected self-test values for the LE and BE framings (0 = unknown)
    pub fn verification(mut self, le: u32, be: u32) -> Self {
        self.verification_le = le;
        self.verification_be = be;
        self
    }

    /// One entry point serving both byte orders
    pub fn hash_fn(mut self, f: HashFn) -> Self {
        self.native = Some(f);
        self.byteswapped = Some(f);
        self
    }

    /// Separate native and byte-swapped entry points
    pub fn hash_fns(mut self, native: HashFn, byteswapped: HashFn) -> Self {
        self.native = Some(native);
        self.byteswapped = Some(byteswapped);
        self
    }

    pub fn init_fn(mut self, f: InitFn) -> Self {
        self.init = Some(f);
        self
    }

    pub fn seed_fn(mut self, f: SeedFn) -> Self {
        self.seed = Some(f);
        self
    }

    pub fn seed_fix_fn(mut self, f: SeedFixFn) -> Self {
        self.seed_fix = Some(f);
        self
    }

    pub fn bad_seeds(mut self, seeds: &[u64]) -> Self {
        self.bad_seeds = seeds.to_vec();
        self
    }

    pub fn sort_order(mut self, order: u32) -> Self {
        self.sort_order = order;
        self
    }

    /// Validate and freeze the descriptor
    pub fn build(self) -> Result<HashDescriptor> {
        if self.name.is_empty() {
            return descriptor_err(self.name, "name is empty");
        }
        if !self.name.is_ascii() {
            return descriptor_err(self.name, "names must be ASCII");
        }
        if self.name.contains('_') {
            return descriptor_err(self.name, "names use dashes, not underscores");
        }
        if self.name.chars().any(char::is_whitespace) {
            return descriptor_err(self.name, "name contains whitespace");
        }
        if self.bits < MIN_HASH_BITS || self.bits % 8 != 0 {
            let reason = format!("bits must be a multiple of 8 and at least {}, got {}", MIN_HASH_BITS, self.bits);
            return descriptor_err(self.name, reason);
        }
        let (native, byteswapped) = match (self.native, self.byteswapped) {
            (Some(n), Some(b)) => (n, b),
            _ => return descriptor_err(self.name, "no hash entry point"),
        };
        if self.impl_flags.contains(ImplFlags::CANONICAL_BOTH) && !std::ptr::fn_addr_eq(native, byteswapped) {
            return descriptor_err(self.name, "CANONICAL_BOTH requires one shared entry point");
        }

        Ok(HashDescriptor {
            name: self.name,
            family: self.family,
            description: self.description,
            hash_flags: self.hash_flags,
            impl_flags: self.impl_flags,
            bits: self.bits,
            verification_le: self.verification_le,
            verification_be: self.verification_be,
            native,
            byteswapped,
            init: self.init,
            seed: self.seed,
            seed_fix: self.seed_fix,
            bad_seeds: self.bad_seeds,
            sort_order: self.sort_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;

    fn sum32(input: &[u8], seed: &SeedState, out: &mut [u8], order: ByteOrder) {
        let h = input
            .iter()
            .fold(seed.seed() as u32, |h, &b| h.wrapping_add(b as u32));
        order.put32(h, out, 0);
    }

    fn sum32_native(input: &[u8], seed: &SeedState, out: &mut [u8]) {
        sum32(input, seed, out, ByteOrder::Native)
    }

    fn sum32_bswap(input: &[u8], seed: &SeedState, out: &mut [u8]) {
        sum32(input, seed, out, ByteOrder::Swapped)
    }

    fn base() -> HashDescriptorBuilder {
        HashDescriptor::builder("test-sum-32", "test")
            .bits(32)
            .hash_fns(sum32_native, sum32_bswap)
    }

    fn reason_of(result: Result<HashDescriptor>) -> String {
        match result {
            Err(Error::InvalidDescriptor { reason, .. }) => reason,
            other => panic!("Expected InvalidDescriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_build_and_predicates() {
        let d = base()
            .hash_flags(HashFlags::MOCK | HashFlags::SMALL_SEED)
            .impl_flags(ImplFlags::CANONICAL_LE)
            .build()
            .unwrap();
        assert!(d.is_mock());
        assert!(!d.is_crypto());
        assert!(!d.is_endian_defined());
        assert!(!d.same_callable());
        assert_eq!(d.hash_bytes(), 4);
        assert!(d.init());
    }

    #[test]
    fn test_rejects_bad_names_and_widths() {
        assert!(reason_of(HashDescriptor::builder("", "t").bits(32).hash_fn(sum32_native).build()).contains("empty"));
        assert!(reason_of(base().bits(32).build_renamed("test_sum")).contains("underscores"));
        assert!(reason_of(base().bits(33).build()).contains("multiple of 8"));
        assert!(reason_of(base().bits(16).build()).contains("at least 32"));
        assert!(reason_of(HashDescriptor::builder("x", "t").bits(32).build()).contains("entry point"));
    }

    #[test]
    fn test_rejects_non_ascii_names() {
        assert!(reason_of(base().build_renamed("Ärger-32")).contains("ASCII"));
        assert!(reason_of(base().build_renamed("ärger-32")).contains("ASCII"));
        assert!(base().build_renamed("Arger-32").is_ok());
    }

    #[test]
    fn test_canonical_both_requires_shared_entry() {
        let err = base().impl_flags(ImplFlags::CANONICAL_BOTH).build();
        assert!(reason_of(err).contains("CANONICAL_BOTH"));

        let d = HashDescriptor::builder("test-sum-shared", "test")
            .bits(32)
            .impl_flags(ImplFlags::CANONICAL_BOTH)
            .hash_fn(sum32_native)
            .build()
            .unwrap();
        assert!(d.same_callable());
    }

    #[test]
    fn test_hash_selects_framing() {
        let d = base().build().unwrap();
        let seed = SeedState::from_seed(1);
        let mut le = [0u8; 4];
        let mut be = [0u8; 4];
        d.hash(b"ab", &seed, Endianness::Little, &mut le);
        d.hash(b"ab", &seed, Endianness::Big, &mut be);
        assert_eq!(le, (1u32 + 97 + 98).to_le_bytes());
        assert_eq!(be, (1u32 + 97 + 98).to_be_bytes());
    }

    #[test]
    fn test_verification_by_framing() {
        let d = base().verification(0x1111_1111, 0x2222_2222).build().unwrap();
        assert_eq!(d.verification(Endianness::Little), 0x1111_1111);
        assert_eq!(d.verification(Endianness::Big), 0x2222_2222);
        let native = if host_is_little_endian() { 0x1111_1111 } else { 0x2222_2222 };
        assert_eq!(d.verification(Endianness::Native), native);
    }

    #[test]
    fn test_small_seed_masks_and_bad_seeds_are_skipped() {
        let d = base()
            .hash_flags(HashFlags::SMALL_SEED)
            .bad_seeds(&[5, 6])
            .build()
            .unwrap();
        assert_eq!(d.fixed_seed(0x1_0000_0004), 4);
        assert_eq!(d.fixed_seed(5), 7);
        assert_eq!(d.seed(5, SeedMode::AllowFix).seed(), 7);
        assert_eq!(d.seed(5, SeedMode::Forced).seed(), 5);
    }

    #[test]
    fn test_small_seed_stepping_wraps_within_32_bits() {
        let d = base()
            .hash_flags(HashFlags::SMALL_SEED)
            .bad_seeds(&[0xffff_ffff, 0])
            .build()
            .unwrap();
        assert_eq!(d.fixed_seed(0xffff_ffff), 1);
        assert_eq!(d.fixed_seed(0x1_ffff_ffff), 1);
        assert_eq!(d.fixed_seed(0x1_0000_0005), 5);

        let wide = base().bad_seeds(&[0xffff_ffff]).build().unwrap();
        assert_eq!(wide.fixed_seed(0xffff_ffff), 0x1_0000_0000);
    }

    #[test]
    fn test_seed_fix_overrides_bad_seed_list() {
        fn never_zero(_: &HashDescriptor, seed: u64) -> u64 {
            if seed == 0 { 0xdead } else { seed }
        }
        let d = base().bad_seeds(&[1]).seed_fix_fn(never_zero).build().unwrap();
        assert_eq!(d.fixed_seed(0), 0xdead);
        assert_eq!(d.fixed_seed(1), 1);
    }

    #[test]
    fn test_seed_hook_produces_state() {
        fn expand(seed: u64) -> SeedState {
            SeedState::with_state(seed, [seed, !seed])
        }
        let d = base().seed_fn(expand).build().unwrap();
        let state = d.seed(3, SeedMode::AllowFix);
        assert_eq!(state.state::<[u64; 2]>(), Some(&[3, !3]));
    }

    impl HashDescriptorBuilder {
        fn build_renamed(mut self, name: &str) -> Result<HashDescriptor> {
            self.name = name.to_string();
            self.build()
        }
    }
}
