/*!
Byte-order selection.

An algorithm is written once, parameterized by [`ByteOrder`], and exported as
two entry points: the `Native` one reads and writes words in host order, the
`Swapped` one reverses every multi-byte word. Callers pick a framing with
[`Endianness`] and the descriptor resolves it to one of the two entry points
for the current host.
*/

use super::flags::ImplFlags;

/// Whether an entry point works in host order or reversed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Native,
    Swapped,
}

impl ByteOrder {
    /// Swap flag to hand to the codec
    #[inline(always)]
    pub const fn swaps(self) -> bool {
        matches!(self, ByteOrder::Swapped)
    }

    /// The other order
    pub const fn flipped(self) -> Self {
        match self {
            ByteOrder::Native => ByteOrder::Swapped,
            ByteOrder::Swapped => ByteOrder::Native,
        }
    }

    #[inline(always)]
    pub fn get16(self, buf: &[u8], offset: usize) -> u16 {
        crate::core::codec::get16(buf, offset, self.swaps())
    }

    #[inline(always)]
    pub fn get32(self, buf: &[u8], offset: usize) -> u32 {
        crate::core::codec::get32(buf, offset, self.swaps())
    }

    #[inline(always)]
    pub fn get64(self, buf: &[u8], offset: usize) -> u64 {
        crate::core::codec::get64(buf, offset, self.swaps())
    }

    #[inline(always)]
    pub fn put16(self, value: u16, buf: &mut [u8], offset: usize) {
        crate::core::codec::put16(value, buf, offset, self.swaps())
    }

    #[inline(always)]
    pub fn put32(self, value: u32, buf: &mut [u8], offset: usize) {
        crate::core::codec::put32(value, buf, offset, self.swaps())
    }

    #[inline(always)]
    pub fn put64(self, value: u64, buf: &mut [u8], offset: usize) {
        crate::core::codec::put64(value, buf, offset, self.swaps())
    }
}

/// True when compiled for a little-endian target
pub const fn host_is_little_endian() -> bool {
    cfg!(target_endian = "little")
}

/// A requested output framing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum Endianness {
    /// Little-endian framing regardless of host
    Little,
    /// Big-endian framing regardless of host
    Big,
    /// Whatever the host uses
    Native,
    /// The opposite of the host
    Byteswapped,
    /// The implementation's canonical framing
    Default,
    /// The opposite of the canonical framing
    NonDefault,
}

impl Endianness {
    /// Two-letter tag used in reports
    pub fn tag(&self) -> &'static str {
        match self {
            Endianness::Little => "LE",
            Endianness::Big => "BE",
            Endianness::Native => "NE",
            Endianness::Byteswapped => "BS",
            Endianness::Default => "DE",
            Endianness::NonDefault => "ND",
        }
    }

    /// Resolve to an entry point for this host, given the implementation flags
    pub fn resolve(self, impl_flags: ImplFlags) -> ByteOrder {
        let little = match self {
            Endianness::Native => return ByteOrder::Native,
            Endianness::Byteswapped => return ByteOrder::Swapped,
            Endianness::Little => true,
            Endianness::Big => false,
            Endianness::Default => !impl_flags.contains(ImplFlags::CANONICAL_BE),
            Endianness::NonDefault => impl_flags.contains(ImplFlags::CANONICAL_BE),
        };
        if little == host_is_little_endian() {
            ByteOrder::Native
        } else {
            ByteOrder::Swapped
        }
    }
}
