/*!
Endian-aware integer access over byte buffers.

Every read copies exactly `size_of::<T>()` bytes out of the slice in host
order and then reverses them iff `swap` is set; writes reverse first and then
copy. Offsets need not be aligned. An offset that runs past the end of the
buffer is a caller bug and panics on the slice index.
*/

use byteorder::{ByteOrder, NativeEndian};

/// Read a byte. Swapping a single byte is the identity.
#[inline(always)]
pub fn get8(buf: &[u8], offset: usize, _swap: bool) -> u8 {
    buf[offset]
}

/// Read a `u16` at `offset`, byte-reversed iff `swap`
#[inline(always)]
pub fn get16(buf: &[u8], offset: usize, swap: bool) -> u16 {
    let v = NativeEndian::read_u16(&buf[offset..offset + 2]);
    if swap { v.swap_bytes() } else { v }
}

/// Read a `u32` at `offset`, byte-reversed iff `swap`
#[inline(always)]
pub fn get32(buf: &[u8], offset: usize, swap: bool) -> u32 {
    let v = NativeEndian::read_u32(&buf[offset..offset + 4]);
    if swap { v.swap_bytes() } else { v }
}

/// Read a `u64` at `offset`, byte-reversed iff `swap`
#[inline(always)]
pub fn get64(buf: &[u8], offset: usize, swap: bool) -> u64 {
    let v = NativeEndian::read_u64(&buf[offset..offset + 8]);
    if swap { v.swap_bytes() } else { v }
}

/// Write a byte. Swapping a single byte is the identity.
#[inline(always)]
pub fn put8(value: u8, buf: &mut [u8], offset: usize, _swap: bool) {
    buf[offset] = value;
}

/// Write a `u16` at `offset`, byte-reversed iff `swap`
#[inline(always)]
pub fn put16(value: u16, buf: &mut [u8], offset: usize, swap: bool) {
    let v = if swap { value.swap_bytes() } else { value };
    NativeEndian::write_u16(&mut buf[offset..offset + 2], v);
}

/// Write a `u32` at `offset`, byte-reversed iff `swap`
#[inline(always)]
pub fn put32(value: u32, buf: &mut [u8], offset: usize, swap: bool) {
    let v = if swap { value.swap_bytes() } else { value };
    NativeEndian::write_u32(&mut buf[offset..offset + 4], v);
}

/// Write a `u64` at `offset`, byte-reversed iff `swap`
#[inline(always)]
pub fn put64(value: u64, buf: &mut [u8], offset: usize, swap: bool) {
    let v = if swap { value.swap_bytes() } else { value };
    NativeEndian::write_u64(&mut buf[offset..offset + 8], v);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_native_matches_host_order() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(get32(&buf, 0, false), u32::from_ne_bytes([1, 2, 3, 4]));
        assert_eq!(get64(&buf, 0, false), u64::from_ne_bytes(buf));
        assert_eq!(get16(&buf, 0, false), u16::from_ne_bytes([1, 2]));
    }

    #[test]
    fn test_swap_reverses_bytes() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(get32(&buf, 0, true), u32::from_ne_bytes([4, 3, 2, 1]));
        assert_eq!(get16(&buf, 0, true), u16::from_ne_bytes([2, 1]));
        assert_eq!(get64(&buf, 0, true), u64::from_ne_bytes([8, 7, 6, 5, 4, 3, 2, 1]));
    }

    #[test]
    fn test_unaligned_offsets() {
        let buf: Vec<u8> = (0u8..16).collect();
        for offset in 0..8 {
            let expected = u64::from_ne_bytes(buf[offset..offset + 8].try_into().unwrap());
            assert_eq!(get64(&buf, offset, false), expected);
        }
        assert_eq!(get32(&buf, 3, false), u32::from_ne_bytes([3, 4, 5, 6]));
    }

    #[test]
    fn test_put_touches_only_its_window() {
        let mut buf = [0xAAu8; 12];
        put32(0x1122_3344, &mut buf, 5, false);
        assert_eq!(&buf[..5], &[0xAA; 5]);
        assert_eq!(&buf[9..], &[0xAA; 3]);
        assert_eq!(&buf[5..9], &0x1122_3344u32.to_ne_bytes());

        let mut buf = [0xAAu8; 12];
        put64(0x0102_0304_0506_0708, &mut buf, 1, true);
        assert_eq!(buf[0], 0xAA);
        assert_eq!(&buf[9..], &[0xAA; 3]);
        assert_eq!(&buf[1..9], &0x0102_0304_0506_0708u64.swap_bytes().to_ne_bytes());
    }

    #[test]
    fn test_single_byte_swap_is_identity() {
        let mut buf = [0u8; 2];
        put8(0x5A, &mut buf, 1, true);
        assert_eq!(buf, [0x00, 0x5A]);
        assert_eq!(get8(&buf, 1, true), get8(&buf, 1, false));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let buf = [0u8; 4];
        let _ = get32(&buf, 1, false);
    }
}
