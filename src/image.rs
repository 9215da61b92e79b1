//! The PNG builder: one `Image` owns one byte buffer from construction
//! through serialization.
//!
//! The buffer holds the five chunks back to back, fully framed at
//! construction time; color allocation and pixel writes patch payload bytes
//! in place, and finalization fills in the four checksum fields.

use base64::Engine;

use crate::checksum::{crc32, Adler32};
use crate::error::{Error, Result};
use crate::layout::{ChunkSpan, Layout};
use crate::palette::{pack_key, Allocation, Palette};
use crate::stored;

/// PNG file signature (magic bytes).
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Maximum supported image dimension.
const MAX_DIMENSION: u32 = 1 << 24; // 16 million pixels

/// An in-memory palette-indexed PNG under construction.
///
/// Pixels default to palette index 0 and rows carry filter type 0
/// ("none"), so a freshly constructed image already serializes to a valid
/// single-color PNG.
pub struct Image {
    width: u32,
    height: u32,
    depth: u16,
    layout: Layout,
    buf: Vec<u8>,
    palette: Palette,
}

impl Image {
    /// Create an image of `width` x `height` pixels with room for `depth`
    /// distinct palette colors (1-256).
    ///
    /// The returned image is fully framed: chunk skeletons, the IHDR
    /// payload, the zlib header, and every stored-block header are already
    /// in place.
    pub fn new(width: u32, height: u32, depth: u16) -> Result<Self> {
        if width == 0 || height == 0 || depth == 0 || depth > 256 {
            return Err(Error::InvalidDimensions {
                width,
                height,
                depth,
            });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::ImageTooLarge {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }

        let layout = Layout::new(width, height, depth);
        let mut buf = vec![0u8; layout.buffer_size];

        prime_chunk(&mut buf, layout.ihdr, b"IHDR");
        prime_chunk(&mut buf, layout.plte, b"PLTE");
        prime_chunk(&mut buf, layout.trns, b"tRNS");
        prime_chunk(&mut buf, layout.idat, b"IDAT");
        prime_chunk(&mut buf, layout.iend, b"IEND");

        let ihdr = layout.ihdr.payload();
        buf[ihdr..ihdr + 4].copy_from_slice(&width.to_be_bytes());
        buf[ihdr + 4..ihdr + 8].copy_from_slice(&height.to_be_bytes());
        buf[ihdr + 8] = 8; // bit depth
        buf[ihdr + 9] = 3; // color type: indexed
        // compression, filter, and interlace fields stay 0

        stored::frame(&mut buf, &layout);

        log::debug!(
            "png: {}x{} depth {}, {} stored blocks, {} byte buffer",
            width,
            height,
            depth,
            layout.block_count(),
            layout.buffer_size
        );

        Ok(Self {
            width,
            height,
            depth,
            layout,
            buf,
            palette: Palette::new(depth),
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Palette capacity this image was created with.
    #[inline]
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// Number of distinct colors allocated so far.
    #[inline]
    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    /// Size of the chunk buffer in bytes (the PNG file minus its 8-byte
    /// signature).
    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.layout.buffer_size
    }

    /// Allocate an opaque color (alpha 255) and return its palette index.
    ///
    /// See [`Image::allocate_rgba`] for the palette-overflow behavior.
    pub fn allocate_color(&mut self, red: u8, green: u8, blue: u8) -> u8 {
        self.allocate_rgba(red, green, blue, 255)
    }

    /// Allocate a color and return its palette index.
    ///
    /// Allocating an already-known color returns its existing index. When
    /// the palette is full and the color is new, the call logs a warning
    /// and returns index 0; the pixel will render as whatever color
    /// occupies slot 0. Use [`Image::try_allocate_rgba`] to get an error
    /// instead.
    pub fn allocate_rgba(&mut self, red: u8, green: u8, blue: u8, alpha: u8) -> u8 {
        match self.allocate_slot(red, green, blue, alpha) {
            Some(index) => index,
            None => {
                log::warn!(
                    "png: palette full ({} entries), mapping ({}, {}, {}, {}) to index 0",
                    self.depth,
                    red,
                    green,
                    blue,
                    alpha
                );
                0
            }
        }
    }

    /// Allocate a color, failing with [`Error::PaletteExhausted`] when the
    /// palette is full and the color is new.
    pub fn try_allocate_rgba(&mut self, red: u8, green: u8, blue: u8, alpha: u8) -> Result<u8> {
        self.allocate_slot(red, green, blue, alpha)
            .ok_or(Error::PaletteExhausted {
                capacity: self.depth,
            })
    }

    fn allocate_slot(&mut self, red: u8, green: u8, blue: u8, alpha: u8) -> Option<u8> {
        match self.palette.allocate(pack_key(red, green, blue, alpha)) {
            Allocation::Existing(index) => Some(index),
            Allocation::Exhausted => None,
            Allocation::Fresh(index) => {
                let plte = self.layout.plte.payload() + 3 * index as usize;
                self.buf[plte] = red;
                self.buf[plte + 1] = green;
                self.buf[plte + 2] = blue;
                self.buf[self.layout.trns.payload() + index as usize] = alpha;
                Some(index)
            }
        }
    }

    /// Set the pixel at `(x, y)` to a palette index.
    ///
    /// The index is written as-is; it is the caller's business whether that
    /// slot has been allocated yet.
    pub fn set_pixel(&mut self, x: u32, y: u32, index: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let offs = self.layout.pixel_offset(x as usize, y as usize);
        self.buf[offs] = index;
        Ok(())
    }

    /// Compute and write the four checksum fields.
    ///
    /// The Adler-32 runs over the `pix_size` filter-plus-pixel bytes (the
    /// logical stream, skipping the interleaved block headers); the chunk
    /// CRCs follow in IHDR, PLTE, tRNS, IDAT, IEND order. Idempotent: the
    /// inputs of every checksum are disjoint from the fields written.
    pub fn finalize(&mut self) {
        let mut adler = Adler32::new();
        for i in 0..self.layout.block_count() {
            adler.update(&self.buf[self.layout.block_payload(i)]);
        }
        let field = self.layout.adler_field();
        self.buf[field..field + 4].copy_from_slice(&adler.finalize().to_be_bytes());

        for chunk in self.layout.chunks() {
            let crc = crc32(&self.buf[chunk.crc_coverage()]);
            let field = chunk.crc_field();
            self.buf[field..field + 4].copy_from_slice(&crc.to_be_bytes());
        }
    }

    /// Finalize and return the complete PNG file as bytes.
    pub fn dump(&mut self) -> Vec<u8> {
        self.finalize();
        let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + self.buf.len());
        out.extend_from_slice(&PNG_SIGNATURE);
        out.extend_from_slice(&self.buf);
        out
    }

    /// Finalize and return the complete PNG file as Base64 text
    /// (standard alphabet, `=` padding).
    pub fn to_base64(&mut self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.dump())
    }
}

/// Write a chunk's length field and type tag.
fn prime_chunk(buf: &mut [u8], span: ChunkSpan, tag: &[u8; 4]) {
    let payload_len = (span.size - 12) as u32;
    buf[span.offs..span.offs + 4].copy_from_slice(&payload_len.to_be_bytes());
    buf[span.offs + 4..span.offs + 8].copy_from_slice(tag);
}
