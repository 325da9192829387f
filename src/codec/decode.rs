/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Block decoding: glyph stream → raster.

use core::fmt;

use crate::blocks::{self, BlockType, InvalidGeometry, Registry};
use crate::raster::Raster;

/// A bitmap block decoder for a fixed block type.
///
/// The glyph stream does not carry the image dimensions, so the caller must
/// supply the true original width and height out-of-band. The decoder
/// reconstructs the block-aligned raster the encoder walked and then
/// truncates it to the expected dimensions; bits beyond the truncation
/// boundary are discarded without validation, so a round trip is only
/// guaranteed lossless when the original dimensions were exact multiples of
/// the block dimensions.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r Registry,
    block: BlockType,
}

impl Decoder<'static> {
    /// Creates a decoder using the process-wide registry.
    #[must_use]
    pub fn new(block: BlockType) -> Self {
        Self::with_registry(blocks::default_registry(), block)
    }

    /// Creates a decoder from a block type verb character.
    pub fn from_verb(verb: char) -> Result<Self, DecodeError> {
        Ok(Self::new(BlockType::try_from(verb)?))
    }
}

impl<'r> Decoder<'r> {
    /// Creates a decoder against an explicit registry.
    #[must_use]
    pub fn with_registry(registry: &'r Registry, block: BlockType) -> Self {
        Self { registry, block }
    }

    /// Returns the block type this decoder consumes.
    #[must_use]
    #[inline]
    pub fn block(&self) -> BlockType {
        self.block
    }

    /// Decodes a glyph stream into a raster of the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn decode(&self, glyphs: &str, width: usize, height: usize) -> Result<Raster, DecodeError> {
        self.decode_chars(glyphs.chars(), width, height)
    }

    /// Decodes a glyph stream given as a char sequence.
    ///
    /// Consumes exactly one glyph per block (two identical glyphs for the
    /// double-wide block type) and exactly one `'\n'` between block rows.
    /// Anything else — a glyph outside the alphabet, a mismatched
    /// double-wide pair, a separator out of place, a truncated stream, or
    /// trailing input — fails the call without returning a partial raster.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn decode_chars<I>(&self, glyphs: I, width: usize, height: usize) -> Result<Raster, DecodeError>
    where
        I: IntoIterator<Item = char>,
    {
        let geometry = self.block.geometry();
        let alphabet = self.registry.alphabet(self.block);
        let cols = width.div_ceil(geometry.width());
        let rows = height.div_ceil(geometry.height());
        let mut padded = Raster::new(cols * geometry.width(), rows * geometry.height());
        let mut glyphs = glyphs.into_iter();
        for by in 0..rows {
            if by > 0 {
                match glyphs.next() {
                    Some('\n') => {}
                    Some(found) => return Err(Malformed::MissingSeparator(found).into()),
                    None => return Err(Malformed::Truncated.into()),
                }
            }
            for bx in 0..cols {
                let glyph = glyphs.next().ok_or(Malformed::Truncated)?;
                if glyph == '\n' {
                    return Err(Malformed::UnexpectedSeparator.into());
                }
                let pattern = alphabet
                    .pattern(glyph)
                    .ok_or(DecodeError::UnknownSymbol(glyph))?;
                if geometry.double_wide() {
                    let second = glyphs.next().ok_or(Malformed::Truncated)?;
                    if second != glyph {
                        return Err(Malformed::MismatchedPair(glyph, second).into());
                    }
                }
                let x0 = bx * geometry.width();
                let y0 = by * geometry.height();
                for (j, &(dx, dy)) in geometry.offsets().iter().enumerate() {
                    if pattern & (1 << j) != 0 {
                        padded.set(x0 + dx as usize, y0 + dy as usize, true);
                    }
                }
            }
        }
        if let Some(found) = glyphs.next() {
            return Err(Malformed::TrailingData(found).into());
        }
        if padded.width() == width && padded.height() == height {
            return Ok(padded);
        }
        let mut raster = Raster::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if padded.get(x, y) {
                    raster.set(x, y, true);
                }
            }
        }
        Ok(raster)
    }
}

/// The error returned by [`Decoder::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The block type verb was not recognized.
    InvalidGeometry(InvalidGeometry),
    /// A glyph not present in the alphabet.
    UnknownSymbol(char),
    /// The stream's shape does not match the expected block grid.
    MalformedStream(Malformed),
}

/// The ways a glyph stream can be structurally malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// The stream ended before all blocks were read.
    Truncated,
    /// A row separator appeared where a glyph was expected.
    UnexpectedSeparator,
    /// A glyph appeared where a row separator was expected.
    MissingSeparator(char),
    /// The two halves of a double-wide glyph differ.
    MismatchedPair(char, char),
    /// Input remained after the final block row.
    TrailingData(char),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidGeometry(e) => fmt::Display::fmt(e, f),
            DecodeError::UnknownSymbol(glyph) => {
                write!(f, "unknown symbol: {:?}", glyph)
            }
            DecodeError::MalformedStream(e) => write!(f, "malformed stream: {}", e),
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::Truncated => f.write_str("stream ended before the last block"),
            Malformed::UnexpectedSeparator => f.write_str("row separator inside a block row"),
            Malformed::MissingSeparator(found) => {
                write!(f, "expected a row separator, found {:?}", found)
            }
            Malformed::MismatchedPair(first, second) => {
                write!(f, "double-wide pair mismatch: {:?} then {:?}", first, second)
            }
            Malformed::TrailingData(found) => {
                write!(f, "trailing input after the last block: {:?}", found)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidGeometry(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for Malformed {}

impl From<InvalidGeometry> for DecodeError {
    fn from(e: InvalidGeometry) -> Self {
        DecodeError::InvalidGeometry(e)
    }
}

impl From<Malformed> for DecodeError {
    fn from(e: Malformed) -> Self {
        DecodeError::MalformedStream(e)
    }
}
