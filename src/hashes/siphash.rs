/*!
SipHash-2-4, 64-bit output.

The 64-bit seed becomes key `(seed, 0)`. The seed hook expands it into the
initial state vector once, and every hash call starts from that vector. Full
message words are read with the entry point's byte order; the tail block is
always packed little-endian.
*/

use crate::core::descriptor::{ByteOrder, HashDescriptor, HashFlags, ImplFlags, SeedState};
use crate::core::error::Result;

/// Initial state derived from the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipKey {
    v: [u64; 4],
}

impl SipKey {
    pub fn new(k0: u64, k1: u64) -> Self {
        Self {
            v: [
                k0 ^ 0x736f_6d65_7073_6575,
                k1 ^ 0x646f_7261_6e64_6f6d,
                k0 ^ 0x6c79_6765_6e65_7261,
                k1 ^ 0x7465_6462_7974_6573,
            ],
        }
    }
}

#[inline(always)]
fn sip_round(v: &mut [u64; 4]) {
    v[0] = v[0].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(13);
    v[1] ^= v[0];
    v[0] = v[0].rotate_left(32);
    v[2] = v[2].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(16);
    v[3] ^= v[2];
    v[0] = v[0].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(21);
    v[3] ^= v[0];
    v[2] = v[2].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(17);
    v[1] ^= v[2];
    v[2] = v[2].rotate_left(32);
}

fn sip24(key: &SipKey, input: &[u8], order: ByteOrder) -> u64 {
    let mut v = key.v;
    let tail_start = input.len() - input.len() % 8;

    for offset in (0..tail_start).step_by(8) {
        let m = order.get64(input, offset);
        v[3] ^= m;
        sip_round(&mut v);
        sip_round(&mut v);
        v[0] ^= m;
    }

    let mut b = (input.len() as u64 & 0xff) << 56;
    for (i, &byte) in input[tail_start..].iter().enumerate() {
        b |= (byte as u64) << (8 * i);
    }
    v[3] ^= b;
    sip_round(&mut v);
    sip_round(&mut v);
    v[0] ^= b;

    v[2] ^= 0xff;
    for _ in 0..4 {
        sip_round(&mut v);
    }
    v[0] ^ v[1] ^ v[2] ^ v[3]
}

fn siphash_seed(seed: u64) -> SeedState {
    SeedState::with_state(seed, SipKey::new(seed, 0))
}

#[inline(always)]
fn siphash(input: &[u8], seed: &SeedState, out: &mut [u8], order: ByteOrder) {
    let h = match seed.state::<SipKey>() {
        Some(key) => sip24(key, input, order),
        None => sip24(&SipKey::new(seed.seed(), 0), input, order),
    };
    order.put64(h, out, 0);
}

fn siphash_native(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    siphash(input, seed, out, ByteOrder::Native)
}

fn siphash_bswap(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    siphash(input, seed, out, ByteOrder::Swapped)
}

/// SipHash descriptors
pub fn descriptors() -> Result<Vec<HashDescriptor>> {
    Ok(vec![
        HashDescriptor::builder("SipHash-2-4", "SipHash")
            .description("SipHash 2-4, 64-bit key from the seed")
            .hash_flags(HashFlags::NONE)
            .impl_flags(ImplFlags::CANONICAL_LE | ImplFlags::ROTATE | ImplFlags::LICENSE_PUBLIC_DOMAIN)
            .bits(64)
            .verification(0x57B6_61ED, 0x01B6_34D0)
            .hash_fns(siphash_native, siphash_bswap)
            .seed_fn(siphash_seed)
            .build()?,
    ])
}
