//! Adler-32 checksum (RFC 1950) used for zlib wrappers.

const MOD_ADLER: u32 = 65_521;
// NMAX is the largest n such that we can accumulate n bytes without overflow
// 255*n*(n+1)/2 + (n+1)*(65520) <= 2^32-1
const NMAX: usize = 5552;

/// Calculate Adler-32 checksum of data.
///
/// Defers modulo operations to chunk boundaries (NMAX batching) so the
/// accumulators never overflow.
#[inline]
#[must_use]
pub fn adler32(data: &[u8]) -> u32 {
    let mut adler = Adler32::new();
    adler.update(data);
    adler.finalize()
}

/// Calculate Adler-32 incrementally.
///
/// The pixel stream of a stored-block zlib payload is not contiguous in the
/// chunk buffer, so the checksum is fed one block payload at a time.
pub struct Adler32 {
    s1: u32,
    s2: u32,
}

impl Adler32 {
    /// Create a new Adler-32 calculator (seed s1=1, s2=0).
    pub fn new() -> Self {
        Self { s1: 1, s2: 0 }
    }

    /// Update the checksum with more data.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        for chunk in data.chunks(NMAX) {
            for &b in chunk {
                self.s1 += b as u32;
                self.s2 += self.s1;
            }
            self.s1 %= MOD_ADLER;
            self.s2 %= MOD_ADLER;
        }
    }

    /// Finalize and return the checksum value (s2 << 16 | s1).
    #[inline]
    pub fn finalize(self) -> u32 {
        (self.s2 << 16) | self.s1
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}
