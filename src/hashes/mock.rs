/*!
Mock hashes.

Baselines for measuring harness overhead. None of these is a usable hash.
*/

use crate::core::descriptor::{ByteOrder, HashDescriptor, HashFlags, ImplFlags, SeedState};
use crate::core::error::Result;

fn donothing(_input: &[u8], _seed: &SeedState, out: &mut [u8]) {
    out.fill(0);
}

#[inline(always)]
fn sumhash32(input: &[u8], seed: &SeedState, out: &mut [u8], order: ByteOrder) {
    let h = input
        .iter()
        .fold(seed.seed() as u32, |h, &b| h.wrapping_add(b as u32));
    order.put32(h, out, 0);
}

fn sumhash32_native(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    sumhash32(input, seed, out, ByteOrder::Native)
}

fn sumhash32_bswap(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    sumhash32(input, seed, out, ByteOrder::Swapped)
}

/// Mock descriptors
pub fn descriptors() -> Result<Vec<HashDescriptor>> {
    let mut out = Vec::new();
    for (i, bits) in [32u32, 64, 128, 256].into_iter().enumerate() {
        out.push(
            HashDescriptor::builder(format!("donothing-{}", bits), "donothing")
                .description(format!("Do-Nothing function (measure call overhead, {}-bit)", bits))
                .hash_flags(HashFlags::MOCK | HashFlags::NO_SEED | HashFlags::ENDIAN_INDEPENDENT)
                .impl_flags(ImplFlags::CANONICAL_BOTH | ImplFlags::LICENSE_PUBLIC_DOMAIN)
                .bits(bits)
                .verification(0x0000_0000, 0x0000_0000)
                .hash_fn(donothing)
                .sort_order(i as u32)
                .build()?,
        );
    }
    out.push(
        HashDescriptor::builder("sumhash-32", "sumhash")
            .description("Sum all bytes into the seed (32-bit)")
            .hash_flags(HashFlags::MOCK | HashFlags::SMALL_SEED)
            .impl_flags(ImplFlags::CANONICAL_LE | ImplFlags::SANITY_FAILS | ImplFlags::LICENSE_PUBLIC_DOMAIN)
            .bits(32)
            .verification(0x0000_A9AC, 0xACA9_0000)
            .hash_fns(sumhash32_native, sumhash32_bswap)
            .sort_order(10)
            .build()?,
    );
    Ok(out)
}
