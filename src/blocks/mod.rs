/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Block shapes and the catalog of block types.
//!
//! A [`Geometry`] describes the shape of a block: how many raster columns
//! and rows it covers, and the canonical ordering of its bits. A
//! [`BlockType`] names one alphabet over one geometry; several block types
//! may share a geometry (e.g., [`Quads`](BlockType::Quads) and
//! [`QuadsSeparated`](BlockType::QuadsSeparated) both use the 2×2 layout)
//! and differ only in the glyphs they emit.
//!
//! The offset ordering of each geometry is part of the wire format: bit `j`
//! of a block's pattern is the raster bit at the `j`-th offset. Reordering
//! the offsets would silently remap every glyph.

pub mod alphabet;
pub mod tables;

pub use alphabet::{Alphabet, Registry, default_registry};

use core::fmt;
use core::str::FromStr;

/// A block shape: cell dimensions plus the canonical bit-weight layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: u8,
    height: u8,
    double_wide: bool,
    offsets: &'static [(u8, u8)],
}

impl Geometry {
    /// Returns the block width in raster columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Returns the block height in raster rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Returns true if each glyph of this geometry is emitted twice to
    /// approximate a square cell in monospaced rendering.
    #[must_use]
    #[inline]
    pub fn double_wide(&self) -> bool {
        self.double_wide
    }

    /// Returns the number of bits per block.
    #[must_use]
    #[inline]
    pub fn bits(&self) -> usize {
        self.offsets.len()
    }

    /// Returns the number of distinct patterns, i.e., `2^bits`.
    #[must_use]
    #[inline]
    pub fn patterns(&self) -> usize {
        1 << self.bits()
    }

    /// Returns the canonical `(dx, dy)` offset of each bit: bit `j` of a
    /// pattern is the raster bit at `offsets()[j]` within the block.
    #[must_use]
    #[inline]
    pub fn offsets(&self) -> &'static [(u8, u8)] {
        self.offsets
    }
}

/// Single cell, one bit per glyph.
const CELL: Geometry = Geometry {
    width: 1,
    height: 1,
    double_wide: false,
    offsets: &[(0, 0)],
};

/// Single cell rendered twice per bit.
const WIDE_CELL: Geometry = Geometry {
    width: 1,
    height: 1,
    double_wide: true,
    offsets: &[(0, 0)],
};

/// One column, two stacked rows.
const HALF: Geometry = Geometry {
    width: 1,
    height: 2,
    double_wide: false,
    offsets: &[(0, 0), (0, 1)],
};

/// Two columns, two rows.
const QUAD: Geometry = Geometry {
    width: 2,
    height: 2,
    double_wide: false,
    offsets: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// Two columns, three rows.
const SEXTANT: Geometry = Geometry {
    width: 2,
    height: 3,
    double_wide: false,
    offsets: &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)],
};

/// Two columns, four rows.
const OCTANT: Geometry = Geometry {
    width: 2,
    height: 4,
    double_wide: false,
    offsets: &[
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (0, 2),
        (1, 2),
        (0, 3),
        (1, 3),
    ],
};

/// A block type: one glyph alphabet over one [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[non_exhaustive]
pub enum BlockType {
    /// Single 1×1 blocks using space and full block.
    Solids,
    /// Single 1×1 blocks using the digits `0` and `1`.
    Binaries,
    /// Single 1×1 blocks using space and `X`.
    XXs,
    /// Double-wide 1×1 blocks using space and full block, each glyph
    /// emitted twice.
    Doubles,
    /// 1×2 blocks using the half-block glyphs.
    Halves,
    /// 1×2 blocks using ASCII-safe glyphs.
    Asciis,
    /// 2×2 blocks using the quadrant glyphs.
    Quads,
    /// 2×2 blocks using the separated quadrant glyphs.
    QuadsSeparated,
    /// 2×3 blocks using the sextant glyphs.
    Sextants,
    /// 2×3 blocks using the separated sextant glyphs.
    SextantsSeparated,
    /// 2×4 blocks using the octant glyphs.
    Octants,
    /// 2×4 blocks using the braille patterns.
    Braille,
}

impl BlockType {
    /// The number of block types.
    pub const COUNT: usize = 12;

    /// All block types, in registry order.
    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Solids,
        BlockType::Binaries,
        BlockType::XXs,
        BlockType::Doubles,
        BlockType::Halves,
        BlockType::Asciis,
        BlockType::Quads,
        BlockType::QuadsSeparated,
        BlockType::Sextants,
        BlockType::SextantsSeparated,
        BlockType::Octants,
        BlockType::Braille,
    ];

    /// Returns the geometry of this block type.
    #[must_use]
    pub fn geometry(self) -> &'static Geometry {
        match self {
            BlockType::Solids | BlockType::Binaries | BlockType::XXs => &CELL,
            BlockType::Doubles => &WIDE_CELL,
            BlockType::Halves | BlockType::Asciis => &HALF,
            BlockType::Quads | BlockType::QuadsSeparated => &QUAD,
            BlockType::Sextants | BlockType::SextantsSeparated => &SEXTANT,
            BlockType::Octants | BlockType::Braille => &OCTANT,
        }
    }

    /// Returns the glyph table of this block type, indexed by pattern.
    #[must_use]
    pub fn glyphs(self) -> &'static [char] {
        match self {
            BlockType::Solids | BlockType::Doubles => &tables::SOLIDS,
            BlockType::Binaries => &tables::BINARIES,
            BlockType::XXs => &tables::XXS,
            BlockType::Halves => &tables::HALVES,
            BlockType::Asciis => &tables::ASCIIS,
            BlockType::Quads => &tables::QUADS,
            BlockType::QuadsSeparated => &tables::QUADS_SEPARATED,
            BlockType::Sextants => &tables::SEXTANTS,
            BlockType::SextantsSeparated => &tables::SEXTANTS_SEPARATED,
            BlockType::Octants => &tables::OCTANTS,
            BlockType::Braille => &tables::BRAILLE,
        }
    }

    /// Returns true for block types whose glyphs tile the plane without a
    /// separated variant. Used by selection and rendering heuristics only;
    /// the codec itself does not distinguish contiguous types.
    #[must_use]
    pub fn contiguous(self) -> bool {
        matches!(
            self,
            BlockType::Solids
                | BlockType::Doubles
                | BlockType::Halves
                | BlockType::Quads
                | BlockType::Sextants
                | BlockType::Octants
        )
    }

    /// Returns the single-character verb naming this block type.
    #[must_use]
    pub fn verb(self) -> char {
        match self {
            BlockType::Solids => 'l',
            BlockType::Binaries => 'b',
            BlockType::XXs => 'L',
            BlockType::Doubles => 'D',
            BlockType::Halves => 'e',
            BlockType::Asciis => 'E',
            BlockType::Quads => 'q',
            BlockType::QuadsSeparated => 'Q',
            BlockType::Sextants => 'x',
            BlockType::SextantsSeparated => 'X',
            BlockType::Octants => 'o',
            BlockType::Braille => 'O',
        }
    }

    /// Returns the number of bits per block.
    #[must_use]
    #[inline]
    pub fn bits(self) -> usize {
        self.geometry().bits()
    }

    /// Returns the number of glyphs in this block type's alphabet.
    #[must_use]
    #[inline]
    pub fn patterns(self) -> usize {
        self.geometry().patterns()
    }

    /// Returns the registry slot index of this block type.
    #[must_use]
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockType::Solids => "Solids",
            BlockType::Binaries => "Binaries",
            BlockType::XXs => "XXs",
            BlockType::Doubles => "Doubles",
            BlockType::Halves => "Halves",
            BlockType::Asciis => "ASCIIs",
            BlockType::Quads => "Quads",
            BlockType::QuadsSeparated => "QuadsSeparated",
            BlockType::Sextants => "Sextants",
            BlockType::SextantsSeparated => "SextantsSeparated",
            BlockType::Octants => "Octants",
            BlockType::Braille => "Braille",
        })
    }
}

/// Error type for an unrecognized block type verb or name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGeometry(pub String);

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid block geometry: {:?}", self.0)
    }
}

impl std::error::Error for InvalidGeometry {}

impl TryFrom<char> for BlockType {
    type Error = InvalidGeometry;

    fn try_from(verb: char) -> Result<Self, Self::Error> {
        BlockType::ALL
            .into_iter()
            .find(|block| block.verb() == verb)
            .ok_or_else(|| InvalidGeometry(verb.to_string()))
    }
}

impl FromStr for BlockType {
    type Err = InvalidGeometry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|block| block.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidGeometry(s.to_string()))
    }
}

/// Returns the best display block type for an image of the given height.
///
/// Denser block types pack more bits per glyph but need broader Unicode
/// coverage and look coarser at small sizes, so density increases only once
/// the image is tall enough. The thresholds are part of the observable
/// contract:
///
/// - height 1 → [`Solids`](BlockType::Solids)
/// - height ≤ 3 → [`Halves`](BlockType::Halves)
/// - height < 6 → [`Quads`](BlockType::Quads)
/// - height ≤ 24 → [`Sextants`](BlockType::Sextants)
/// - otherwise → [`Octants`](BlockType::Octants)
#[must_use]
pub fn best(height: usize) -> BlockType {
    match height {
        1 => BlockType::Solids,
        _ if height <= 3 => BlockType::Halves,
        _ if height < 6 => BlockType::Quads,
        _ if height <= 24 => BlockType::Sextants,
        _ => BlockType::Octants,
    }
}
