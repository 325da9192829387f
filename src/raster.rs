/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Packed 1-bit-per-pixel rasters.
//!
//! A [`Raster`] owns its bit buffer and is the only type that knows the bit
//! addressing rules: bits are stored row-major, least-significant bit first,
//! so the bit at `(x, y)` has index `i = y * width + x`, lives in byte
//! `i / 8` and is the `i % 8`-th bit of that byte. Bits beyond
//! `width * height` in the last occupied byte are always zero.

use std::io;
use std::io::Read;

/// A monotone bitmap with a packed, row-major, LSB-first bit buffer.
///
/// The codec never mutates a raster it is given: encoding borrows the raster
/// immutably, and decoding returns a freshly allocated one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
pub struct Raster {
    width: usize,
    height: usize,
    bits: Vec<u8>,
}

impl Raster {
    /// Creates a blank raster with all bits unset.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "raster dimensions must be ≥ 1");
        Self {
            width,
            height,
            bits: vec![0; (width * height).div_ceil(8)],
        }
    }

    /// Creates a raster from a packed byte buffer.
    ///
    /// The buffer is interpreted with the addressing rules of this type;
    /// missing trailing bytes read as zero, surplus bytes are ignored, and
    /// excess high-order bits in the last occupied byte are cleared so the
    /// buffer invariant holds regardless of the input.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn from_bytes(data: &[u8], width: usize, height: usize) -> Self {
        let mut raster = Self::new(width, height);
        let n = raster.bits.len().min(data.len());
        raster.bits[..n].copy_from_slice(&data[..n]);
        raster.clear_excess_bits();
        raster
    }

    /// Creates a raster by draining a byte stream, `width` bits per row.
    ///
    /// The height is inferred as `ceil(bits / width)`; a trailing partial
    /// row is zero-filled. Fails with [`io::ErrorKind::InvalidData`] if the
    /// stream is empty.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    pub fn from_reader<R: Read>(mut reader: R, width: usize) -> io::Result<Self> {
        let mut data = Vec::with_capacity(512);
        reader.read_to_end(&mut data)?;
        if data.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "cannot build a raster from an empty byte stream",
            ));
        }
        let height = (data.len() * 8).div_ceil(width);
        Ok(Self::from_bytes(&data, width, height))
    }

    /// Returns the width in bits.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in bits.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the bit at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height, "coordinates out of bounds");
        let i = y * self.width + x;
        self.bits[i / 8] & (1 << (i % 8)) != 0
    }

    /// Sets the bit at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        assert!(x < self.width && y < self.height, "coordinates out of bounds");
        let i = y * self.width + x;
        if value {
            self.bits[i / 8] |= 1 << (i % 8);
        } else {
            self.bits[i / 8] &= !(1 << (i % 8));
        }
    }

    /// Returns the packed bit buffer.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Clears the bits beyond `width * height` in the last occupied byte.
    fn clear_excess_bits(&mut self) {
        let m = self.width * self.height % 8;
        if m != 0 {
            let last = self.bits.len() - 1;
            self.bits[last] &= 0xff >> (8 - m);
        }
    }
}
