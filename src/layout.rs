//! Chunk layout arithmetic for the fixed five-chunk PNG skeleton.
//!
//! A palette PNG built by this crate always consists of exactly IHDR, PLTE,
//! tRNS, IDAT, and IEND, laid out contiguously in that order. Every offset
//! and size is a closed-form function of (width, height, depth), so the
//! whole file can be allocated up front and written by offset.

use std::ops::Range;

/// Maximum payload bytes a stored DEFLATE block can carry (LEN is u16).
pub const STORED_BLOCK_MAX: usize = 0xFFFF;

/// Bytes consumed per full stored block: 5-byte header plus payload.
pub const STORED_BLOCK_SPAN: usize = STORED_BLOCK_MAX + 5;

/// Offset and total size of one chunk within the image buffer.
///
/// `size` covers the whole chunk: 4-byte length field, 4-byte type tag,
/// payload, and 4-byte CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    /// Byte offset of the chunk's length field.
    pub offs: usize,
    /// Total chunk size in bytes.
    pub size: usize,
}

impl ChunkSpan {
    /// Offset of the first payload byte (past length field and type tag).
    #[inline]
    pub fn payload(&self) -> usize {
        self.offs + 8
    }

    /// Range covered by the chunk CRC: the type tag and the payload.
    /// The length field and the CRC field itself are excluded.
    #[inline]
    pub fn crc_coverage(&self) -> Range<usize> {
        self.offs + 4..self.offs + self.size - 4
    }

    /// Offset of the trailing 4-byte CRC field.
    #[inline]
    pub fn crc_field(&self) -> usize {
        self.offs + self.size - 4
    }
}

/// Precomputed offsets and sizes for one image.
///
/// Computed once at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Layout {
    /// IHDR chunk span (always at offset 0).
    pub ihdr: ChunkSpan,
    /// PLTE chunk span (payload holds 3 bytes per palette entry).
    pub plte: ChunkSpan,
    /// tRNS chunk span (payload holds 1 alpha byte per palette entry).
    pub trns: ChunkSpan,
    /// IDAT chunk span (payload is the zlib-wrapped stored stream).
    pub idat: ChunkSpan,
    /// IEND chunk span (empty payload).
    pub iend: ChunkSpan,
    /// Bytes of filter-byte-plus-pixel data: `height * (width + 1)`.
    pub pix_size: usize,
    /// IDAT payload size: zlib header, framed pixel data, Adler-32.
    pub data_size: usize,
    /// Total buffer size, the sum of all five chunk sizes.
    pub buffer_size: usize,
    row_stride: usize,
}

impl Layout {
    /// Compute the layout for validated dimensions.
    ///
    /// Callers must have checked `width > 0`, `height > 0`, and
    /// `1 <= depth <= 256` beforehand.
    pub fn new(width: u32, height: u32, depth: u16) -> Self {
        let width = width as usize;
        let height = height as usize;
        let depth = depth as usize;

        // One filter byte per row precedes the pixel indices.
        let row_stride = width + 1;
        let pix_size = height * row_stride;

        // zlib header, framed pixel data, per-block headers, Adler-32.
        let block_count = pix_size.div_ceil(STORED_BLOCK_MAX);
        let data_size = 2 + pix_size + 5 * block_count + 4;

        let ihdr = ChunkSpan {
            offs: 0,
            size: 4 + 4 + 13 + 4,
        };
        let plte = ChunkSpan {
            offs: ihdr.offs + ihdr.size,
            size: 4 + 4 + 3 * depth + 4,
        };
        let trns = ChunkSpan {
            offs: plte.offs + plte.size,
            size: 4 + 4 + depth + 4,
        };
        let idat = ChunkSpan {
            offs: trns.offs + trns.size,
            size: 4 + 4 + data_size + 4,
        };
        let iend = ChunkSpan {
            offs: idat.offs + idat.size,
            size: 4 + 4 + 4,
        };

        Self {
            ihdr,
            plte,
            trns,
            idat,
            iend,
            pix_size,
            data_size,
            buffer_size: iend.offs + iend.size,
            row_stride,
        }
    }

    /// All five chunks in file order.
    #[inline]
    pub fn chunks(&self) -> [ChunkSpan; 5] {
        [self.ihdr, self.plte, self.trns, self.idat, self.iend]
    }

    /// Number of stored DEFLATE blocks framing the pixel data.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.pix_size.div_ceil(STORED_BLOCK_MAX)
    }

    /// Payload length of stored block `i`.
    #[inline]
    pub fn block_len(&self, i: usize) -> usize {
        (self.pix_size - i * STORED_BLOCK_MAX).min(STORED_BLOCK_MAX)
    }

    /// Buffer range of stored block `i`'s payload bytes.
    #[inline]
    pub fn block_payload(&self, i: usize) -> Range<usize> {
        let start = self.idat.payload() + 2 + i * STORED_BLOCK_SPAN + 5;
        start..start + self.block_len(i)
    }

    /// Buffer offset of logical pixel-stream position `p` (`0..pix_size`).
    ///
    /// Position `y * (width + 1)` is row `y`'s filter byte; the pixel at
    /// `(x, y)` sits at `y * (width + 1) + 1 + x`. The mapping skips the
    /// 2-byte zlib header and the 5-byte header of every stored block at or
    /// before `p`.
    #[inline]
    pub fn pix_offset(&self, p: usize) -> usize {
        self.idat.payload() + 2 + 5 * (p / STORED_BLOCK_MAX + 1) + p
    }

    /// Buffer offset of the pixel index byte at `(x, y)`.
    #[inline]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        self.pix_offset(y * self.row_stride + 1 + x)
    }

    /// Buffer offset of the trailing Adler-32 field inside the IDAT payload.
    #[inline]
    pub fn adler_field(&self) -> usize {
        self.idat.offs + self.idat.size - 8
    }
}
