/*!
SHA-2 family via the `sha2` crate.

The digest is a byte string, so both framings share one entry point. The
seed is absorbed first as eight little-endian bytes.
*/

use sha2::{Digest, Sha224, Sha256};

use crate::core::descriptor::{HashDescriptor, HashFlags, ImplFlags, SeedState};
use crate::core::error::Result;

fn seeded_digest<D: Digest>(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    let mut hasher = D::new();
    hasher.update(seed.seed().to_le_bytes());
    hasher.update(input);
    let digest = hasher.finalize();
    let n = out.len().min(digest.len());
    out[..n].copy_from_slice(&digest[..n]);
}

fn sha224(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    seeded_digest::<Sha224>(input, seed, out)
}

fn sha256(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    seeded_digest::<Sha256>(input, seed, out)
}

/// SHA-2 descriptors
pub fn descriptors() -> Result<Vec<HashDescriptor>> {
    let flags = HashFlags::CRYPTOGRAPHIC | HashFlags::ENDIAN_INDEPENDENT;
    let impl_flags = ImplFlags::CANONICAL_BOTH
        | ImplFlags::INCREMENTAL
        | ImplFlags::ROTATE
        | ImplFlags::LICENSE_MIT;
    Ok(vec![
        HashDescriptor::builder("SHA-2-224", "SHA-2")
            .description("SHA-224, seed prefixed")
            .hash_flags(flags)
            .impl_flags(impl_flags)
            .bits(224)
            .verification(0xB75D_8620, 0xB75D_8620)
            .hash_fn(sha224)
            .build()?,
        HashDescriptor::builder("SHA-2-256", "SHA-2")
            .description("SHA-256, seed prefixed")
            .hash_flags(flags)
            .impl_flags(impl_flags)
            .bits(256)
            .verification(0x5241_5400, 0x5241_5400)
            .hash_fn(sha256)
            .build()?,
    ])
}
