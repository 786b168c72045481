/*!
Self-test computation.

The corpus is protocol version [`VERIFY_PROTOCOL_VERSION`]: key `i` is the
bytes `0, 1, .., i-1` hashed with seed `256 - i`, for `i` in `0..256`. The
digests are concatenated and hashed once more with seed 0, and the first four
bytes of that digest, read little-endian, are the verification value.
*/

use byteorder::{ByteOrder as _, LittleEndian};
use log::{debug, warn};

use crate::core::config::VerifyConfig;
use crate::core::constants::{
    VERIFY_FINAL_SEED, VERIFY_KEY_COUNT, VERIFY_PROTOCOL_VERSION, VERIFY_SEED_BASE,
};
use crate::core::descriptor::{Endianness, HashDescriptor, HashFn, SeedMode};
use crate::core::error::{Error, Result};

use super::outcome::{FramingResult, HashVerification, VerifyOutcome};

/// Compare an expected value with a computed one
pub fn compare_verification(expected: u32, actual: u32) -> VerifyOutcome {
    if expected == actual {
        if actual != 0 {
            VerifyOutcome::Pass
        } else {
            VerifyOutcome::Insecure
        }
    } else if expected == 0 {
        VerifyOutcome::Skip
    } else {
        VerifyOutcome::Fail { expected }
    }
}

fn checksum(descriptor: &HashDescriptor, hash: HashFn) -> u32 {
    let n = descriptor.hash_bytes();
    let mut key = [0u8; VERIFY_KEY_COUNT];
    let mut hashes = vec![0u8; n * VERIFY_KEY_COUNT];
    let mut total = vec![0u8; n];

    for (i, out) in hashes.chunks_exact_mut(n).enumerate() {
        key[i] = i as u8;
        let seed = descriptor.seed(VERIFY_SEED_BASE - i as u64, SeedMode::AllowFix);
        hash(&key[..i], &seed, out);
    }

    let seed = descriptor.seed(VERIFY_FINAL_SEED, SeedMode::AllowFix);
    hash(&hashes, &seed, &mut total);

    LittleEndian::read_u32(&total[..4])
}

/// Run the self-test corpus through one framing of a descriptor.
///
/// Runs `init` first; a failing init yields [`Error::InitFailed`].
pub fn computed_verify(descriptor: &HashDescriptor, endian: Endianness) -> Result<u32> {
    if !descriptor.init() {
        return Err(Error::InitFailed {
            name: descriptor.name().to_string(),
        });
    }
    Ok(checksum(descriptor, descriptor.hash_fn(endian)))
}

/// Verify one descriptor under every framing in `config`
pub fn verify_hash(descriptor: &HashDescriptor, config: &VerifyConfig) -> HashVerification {
    let name = descriptor.name().to_string();
    if !descriptor.init() {
        warn!("Hash {} failed to initialize; skipping verification", name);
        return HashVerification::InitFailed { name };
    }

    let framings = config
        .endians
        .iter()
        .map(|&endian| {
            let expected = descriptor.verification(endian);
            let actual = checksum(descriptor, descriptor.hash_fn(endian));
            let outcome = compare_verification(expected, actual);
            debug!(
                "v{} {} {} 0x{:08X}: {}",
                VERIFY_PROTOCOL_VERSION,
                name,
                endian.tag(),
                actual,
                outcome.message()
            );
            if let VerifyOutcome::Fail { expected } = outcome {
                warn!(
                    "Hash {} {} verification 0x{:08X} does not match expected 0x{:08X}",
                    name,
                    endian.tag(),
                    actual,
                    expected
                );
            }
            FramingResult {
                endian,
                expected,
                actual,
                outcome,
            }
        })
        .collect();

    HashVerification::Checked { name, framings }
}

/// Verify many descriptors; results keep the input order.
///
/// With the `rayon` feature and `config.parallel` set, descriptors are
/// verified concurrently.
pub fn verify_descriptors(descriptors: &[HashDescriptor], config: &VerifyConfig) -> Vec<HashVerification> {
    #[cfg(feature = "rayon")]
    {
        if config.parallel {
            use rayon::prelude::*;
            return descriptors
                .par_iter()
                .map(|d| verify_hash(d, config))
                .collect();
        }
    }
    descriptors.iter().map(|d| verify_hash(d, config)).collect()
}
