/*!
CRC-32 (IEEE 802.3, reflected polynomial 0xEDB88320), table driven.

The seed replaces the all-ones initial register, complemented, so seed 0
gives the standard CRC-32.
*/

use once_cell::sync::OnceCell;

use crate::core::descriptor::{ByteOrder, HashDescriptor, HashFlags, ImplFlags, SeedState};
use crate::core::error::Result;

const POLY: u32 = 0xEDB8_8320;
const CHECK: u32 = 0xCBF4_3926;

static TABLE: OnceCell<[u32; 256]> = OnceCell::new();

fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        let mut c = i as u32;
        for _ in 0..8 {
            c = if c & 1 != 0 { (c >> 1) ^ POLY } else { c >> 1 };
        }
        *entry = c;
    }
    table
}

fn table() -> &'static [u32; 256] {
    TABLE.get_or_init(build_table)
}

fn crc32_update(crc: u32, input: &[u8]) -> u32 {
    let table = table();
    input
        .iter()
        .fold(crc, |c, &b| table[((c ^ b as u32) & 0xff) as usize] ^ (c >> 8))
}

#[inline(always)]
fn crc32(input: &[u8], seed: &SeedState, out: &mut [u8], order: ByteOrder) {
    let crc = !crc32_update(!(seed.seed() as u32), input);
    order.put32(crc, out, 0);
}

fn crc32_native(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    crc32(input, seed, out, ByteOrder::Native)
}

fn crc32_bswap(input: &[u8], seed: &SeedState, out: &mut [u8]) {
    crc32(input, seed, out, ByteOrder::Swapped)
}

// Builds the table and checks it against the standard check value
fn crc32_init() -> bool {
    !crc32_update(!0, b"123456789") == CHECK
}

/// CRC descriptors
pub fn descriptors() -> Result<Vec<HashDescriptor>> {
    Ok(vec![
        HashDescriptor::builder("CRC-32", "CRC")
            .description("CRC-32 (IEEE), reflected, table driven")
            .hash_flags(HashFlags::CRC_BASED | HashFlags::LOOKUP_TABLE | HashFlags::SMALL_SEED)
            .impl_flags(ImplFlags::CANONICAL_LE | ImplFlags::SANITY_FAILS | ImplFlags::LICENSE_PUBLIC_DOMAIN)
            .bits(32)
            .verification(0x3719_DB20, 0x9A55_B70F)
            .hash_fns(crc32_native, crc32_bswap)
            .init_fn(crc32_init)
            .build()?,
    ])
}
