//! CRC32 checksum implementation (PNG uses CRC-32/ISO-HDLC).

/// Byte-indexed lookup table for CRC32 polynomial 0xEDB88320 (reflected
/// 0x04C11DB7). Built once per process; shared by every image.
static CRC_TABLE: std::sync::LazyLock<[u32; 256]> = std::sync::LazyLock::new(|| {
    let mut table = [0u32; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        let mut crc = i as u32;
        for _ in 0..8 {
            crc = if (crc & 1) != 0 {
                (crc >> 1) ^ 0xEDB88320
            } else {
                crc >> 1
            };
        }
        *entry = crc;
    }
    table
});

/// Calculate CRC32 checksum of data.
///
/// Uses the CRC-32/ISO-HDLC algorithm (polynomial 0x04C11DB7 reflected),
/// seeded at all-ones and complemented at the end. This is the CRC used by
/// PNG chunks.
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
    let table = &*CRC_TABLE;
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        let index = ((crc ^ byte as u32) & 0xFF) as usize;
        crc = (crc >> 8) ^ table[index];
    }
    crc ^ 0xFFFF_FFFF
}
