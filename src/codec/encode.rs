/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Block encoding: raster → glyph stream.

use core::fmt;
use core::iter::FusedIterator;
use std::io;
use std::io::Write;

use crate::blocks::{self, Alphabet, BlockType, Geometry, InvalidGeometry, Registry};
use crate::raster::Raster;

/// A bitmap block encoder for a fixed block type.
///
/// Encoding walks block rows top-to-bottom and block columns left-to-right.
/// For the block at `(bx, by)`, the pattern is composed as
/// `Σ bit(bx*bw + dx, by*bh + dy) << j` over the geometry's canonical
/// offsets `(dx, dy)` at index `j`; samples at or beyond the raster's true
/// width or height read as zero, so trailing partial blocks are padded, not
/// an error. A single `'\n'` separates block rows; nothing follows the last
/// row. Double-wide glyphs are emitted twice with no separator between the
/// two copies.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'r> {
    registry: &'r Registry,
    block: BlockType,
}

impl Encoder<'static> {
    /// Creates an encoder using the process-wide registry.
    #[must_use]
    pub fn new(block: BlockType) -> Self {
        Self::with_registry(blocks::default_registry(), block)
    }

    /// Creates an encoder from a block type verb character.
    pub fn from_verb(verb: char) -> Result<Self, EncodeError> {
        Ok(Self::new(BlockType::try_from(verb)?))
    }
}

impl<'r> Encoder<'r> {
    /// Creates an encoder against an explicit registry.
    #[must_use]
    pub fn with_registry(registry: &'r Registry, block: BlockType) -> Self {
        Self { registry, block }
    }

    /// Returns the block type this encoder emits.
    #[must_use]
    #[inline]
    pub fn block(&self) -> BlockType {
        self.block
    }

    /// Returns the glyph-and-separator sequence for a raster as an
    /// iterator of chars.
    #[must_use]
    pub fn block_stream<'a>(&'a self, raster: &'a Raster) -> BlockStream<'a> {
        BlockStream::new(self.registry.alphabet(self.block), raster)
    }

    /// Encodes the raster to the sink as UTF-8 and returns the number of
    /// bytes written.
    ///
    /// Fails with [`EncodeError::Sink`] on the first rejected write;
    /// previously written bytes are not retracted.
    pub fn encode<W: Write>(&self, raster: &Raster, mut sink: W) -> Result<usize, EncodeError> {
        let mut buf = [0; 4];
        let mut written = 0;
        for glyph in self.block_stream(raster) {
            let utf8 = glyph.encode_utf8(&mut buf);
            sink.write_all(utf8.as_bytes())?;
            written += utf8.len();
        }
        Ok(written)
    }

    /// Encodes the raster to a [`fmt::Write`] sink.
    pub fn encode_fmt<W: fmt::Write>(&self, raster: &Raster, sink: &mut W) -> fmt::Result {
        for glyph in self.block_stream(raster) {
            sink.write_char(glyph)?;
        }
        Ok(())
    }

    /// Encodes the raster to a freshly allocated string.
    #[must_use]
    pub fn to_text(&self, raster: &Raster) -> String {
        self.block_stream(raster).collect()
    }
}

/// The glyph-and-separator sequence of one encode call.
///
/// Finite and non-restartable; fully determined by the raster contents and
/// the block type.
#[derive(Debug, Clone)]
pub struct BlockStream<'a> {
    raster: &'a Raster,
    geometry: &'static Geometry,
    alphabet: &'a Alphabet,
    cols: usize,
    rows: usize,
    bx: usize,
    by: usize,
    repeat: Option<char>,
    separator: bool,
}

impl<'a> BlockStream<'a> {
    fn new(alphabet: &'a Alphabet, raster: &'a Raster) -> Self {
        let geometry = alphabet.block().geometry();
        Self {
            raster,
            geometry,
            alphabet,
            cols: raster.width().div_ceil(geometry.width()),
            rows: raster.height().div_ceil(geometry.height()),
            bx: 0,
            by: 0,
            repeat: None,
            separator: false,
        }
    }

    /// Composes the pattern of the block at `(bx, by)`; samples beyond the
    /// raster bounds read as zero.
    fn compose(&self) -> u16 {
        let x0 = self.bx * self.geometry.width();
        let y0 = self.by * self.geometry.height();
        let mut pattern = 0;
        for (j, &(dx, dy)) in self.geometry.offsets().iter().enumerate() {
            let (x, y) = (x0 + dx as usize, y0 + dy as usize);
            if x < self.raster.width() && y < self.raster.height() && self.raster.get(x, y) {
                pattern |= 1 << j;
            }
        }
        pattern
    }
}

impl Iterator for BlockStream<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if let Some(glyph) = self.repeat.take() {
            return Some(glyph);
        }
        if self.separator {
            self.separator = false;
            return Some('\n');
        }
        if self.by >= self.rows {
            return None;
        }
        let glyph = self.alphabet.glyph(self.compose());
        if self.geometry.double_wide() {
            self.repeat = Some(glyph);
        }
        self.bx += 1;
        if self.bx == self.cols {
            self.bx = 0;
            self.by += 1;
            if self.by < self.rows {
                self.separator = true;
            }
        }
        Some(glyph)
    }
}

impl FusedIterator for BlockStream<'_> {}

/// The error returned by [`Encoder::encode`].
#[derive(Debug)]
pub enum EncodeError {
    /// The block type verb was not recognized.
    InvalidGeometry(InvalidGeometry),
    /// The sink rejected a write.
    Sink(io::Error),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidGeometry(e) => fmt::Display::fmt(e, f),
            EncodeError::Sink(e) => write!(f, "sink error: {}", e),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::InvalidGeometry(e) => Some(e),
            EncodeError::Sink(e) => Some(e),
        }
    }
}

impl From<io::Error> for EncodeError {
    fn from(e: io::Error) -> Self {
        EncodeError::Sink(e)
    }
}

impl From<InvalidGeometry> for EncodeError {
    fn from(e: InvalidGeometry) -> Self {
        EncodeError::InvalidGeometry(e)
    }
}

/// Helper struct to display a raster with a chosen block type.
#[derive(Debug, Clone, Copy)]
pub struct DisplayBlocks<'a> {
    raster: &'a Raster,
    block: BlockType,
}

impl fmt::Display for DisplayBlocks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Encoder::new(self.block).encode_fmt(self.raster, f)
    }
}

impl Raster {
    /// Returns the best display block type for this raster's height.
    #[must_use]
    pub fn best(&self) -> BlockType {
        blocks::best(self.height())
    }

    /// Returns a [`fmt::Display`] adapter encoding with the given block
    /// type.
    #[must_use]
    pub fn display(&self, block: BlockType) -> DisplayBlocks<'_> {
        DisplayBlocks {
            raster: self,
            block,
        }
    }
}

impl fmt::Display for Raster {
    /// Encodes with the block type selected by [`Raster::best`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(self.best()), f)
    }
}
