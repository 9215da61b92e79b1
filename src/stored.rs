//! Stored (uncompressed) DEFLATE framing for the IDAT payload.
//!
//! The pixel data is never compressed; it is wrapped in a zlib container
//! whose DEFLATE stream consists solely of stored blocks (BTYPE=00). Each
//! block carries at most 65535 payload bytes behind a 5-byte header, so the
//! position of every header is known at construction time.

use crate::layout::{Layout, STORED_BLOCK_MAX, STORED_BLOCK_SPAN};

/// Build the two-byte zlib header.
///
/// CMF 0x78 (Deflate, 32K window); FLG carries FLEVEL=3 plus the FCHECK
/// bits that make the 16-bit pair a multiple of 31.
pub(crate) fn zlib_header() -> [u8; 2] {
    let cmf: u8 = 0x78;
    let mut flg: u8 = 3 << 6; // FLEVEL=3, FDICT=0
    let fcheck = (31 - ((u16::from(cmf) << 8 | u16::from(flg)) % 31)) % 31;
    flg |= fcheck as u8;
    [cmf, flg]
}

/// Write the zlib header and every stored-block header into the IDAT
/// payload region of `buf`.
///
/// Block `i`'s header lands at `payload + 2 + i * 65540`: one BFINAL/BTYPE
/// byte, LEN little-endian, then the one's complement of LEN. Only the last
/// block sets BFINAL.
pub(crate) fn frame(buf: &mut [u8], layout: &Layout) {
    let payload = layout.idat.payload();
    buf[payload..payload + 2].copy_from_slice(&zlib_header());

    let mut remaining = layout.pix_size;
    for i in 0..layout.block_count() {
        let hdr = payload + 2 + i * STORED_BLOCK_SPAN;
        let len = remaining.min(STORED_BLOCK_MAX) as u16;
        let bfinal = remaining <= STORED_BLOCK_MAX;

        buf[hdr] = bfinal as u8; // BFINAL bit, BTYPE=00
        buf[hdr + 1..hdr + 3].copy_from_slice(&len.to_le_bytes());
        buf[hdr + 3..hdr + 5].copy_from_slice(&(!len).to_le_bytes());

        remaining -= len as usize;
    }
}
