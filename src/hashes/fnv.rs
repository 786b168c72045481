/*!
FNV-1a, 32- and 64-bit.

The seed is XORed into the offset basis, so a seed equal to the basis zeroes
the starting state and every all-zero key hashes to 0. That seed is fixed up.
*/

use crate::core::descriptor::{ByteOrder, HashDescriptor, HashFlags, ImplFlags, SeedState};
use crate::core::error::Result;

const FNV32_OFFSET: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;
const FNV64_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01b3;

#[inline(always)]
fn fnv1a_32(input: &[u8], seed: &SeedState, out: &mut [u8], order: ByteOrder) {
    let mut h = FNV32_OFFSET ^ seed.seed() as u32;
    for &b in input {
        h ^= b as u32;
        h = h.wrapping_mul(FNV32_PRIME);
    }
    order.put32(h, out, 0);
}

#[inline(always)]
fn fnv1a_64(input: &[u8], seed: &SeedState, out: &mut [u8], order: ByteOrder) {
    let mut h = FNV64_OFFSET ^ seed.seed();
    for &b in input {
        h ^= b as u64;
        h = h.wrapping_mul(FNV64_PRIME);
    }
    order.put64(h, out, 0);
}

fn fnv1a_32_native(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    fnv1a_32(input, seed, out, ByteOrder::Native)
}

fn fnv1a_32_bswap(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    fnv1a_32(input, seed, out, ByteOrder::Swapped)
}

fn fnv1a_64_native(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    fnv1a_64(input, seed, out, ByteOrder::Native)
}

fn fnv1a_64_bswap(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    fnv1a_64(input, seed, out, ByteOrder::Swapped)
}

// Seeds equal to the offset basis zero the state
fn fnv32_seed_fix(_: &HashDescriptor, seed: u64) -> u64 {
    if seed as u32 == FNV32_OFFSET { seed + 1 } else { seed }
}

fn fnv64_seed_fix(_: &HashDescriptor, seed: u64) -> u64 {
    if seed == FNV64_OFFSET { seed + 1 } else { seed }
}

/// FNV descriptors
pub fn descriptors() -> Result<Vec<HashDescriptor>> {
    Ok(vec![
        HashDescriptor::builder("FNV-1a-32", "FNV")
            .description("Fowler-Noll-Vo hash, 32-bit, xor-then-multiply")
            .hash_flags(HashFlags::SMALL_SEED)
            .impl_flags(ImplFlags::CANONICAL_LE | ImplFlags::MULTIPLY | ImplFlags::LICENSE_PUBLIC_DOMAIN)
            .bits(32)
            .verification(0xE3CB_BE91, 0x656F_95A0)
            .hash_fns(fnv1a_32_native, fnv1a_32_bswap)
            .seed_fix_fn(fnv32_seed_fix)
            .bad_seeds(&[FNV32_OFFSET as u64])
            .build()?,
        HashDescriptor::builder("FNV-1a-64", "FNV")
            .description("Fowler-Noll-Vo hash, 64-bit, xor-then-multiply")
            .impl_flags(ImplFlags::CANONICAL_LE | ImplFlags::MULTIPLY | ImplFlags::LICENSE_PUBLIC_DOMAIN)
            .bits(64)
            .verification(0x1034_55FC, 0x4B03_2B63)
            .hash_fns(fnv1a_64_native, fnv1a_64_bswap)
            .seed_fix_fn(fnv64_seed_fix)
            .bad_seeds(&[FNV64_OFFSET])
            .build()?,
    ])
}
