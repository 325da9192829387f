/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bidirectional pattern↔glyph alphabets and their registry.
//!
//! The forward direction (pattern → glyph) is a plain index into the block
//! type's literal table. The reverse direction needs a map, which is built
//! lazily the first time an alphabet is requested and cached in a
//! [`Registry`] slot. A registry can be constructed and injected explicitly;
//! most callers use the process-wide [`default_registry`].

use std::collections::HashMap;
use std::sync::OnceLock;

use super::BlockType;

/// An exhaustive, bidirectional pattern↔glyph table for one block type.
///
/// Every pattern in `[0, 2^n)` has exactly one glyph and every glyph of the
/// table maps back to its pattern.
#[derive(Debug, Clone)]
pub struct Alphabet {
    block: BlockType,
    glyphs: &'static [char],
    patterns: HashMap<char, u16>,
}

impl Alphabet {
    fn new(block: BlockType) -> Self {
        let glyphs = block.glyphs();
        let patterns = glyphs
            .iter()
            .enumerate()
            .map(|(pattern, &glyph)| (glyph, pattern as u16))
            .collect();
        Self {
            block,
            glyphs,
            patterns,
        }
    }

    /// Returns the block type this alphabet belongs to.
    #[must_use]
    #[inline]
    pub fn block(&self) -> BlockType {
        self.block
    }

    /// Returns the glyph for a pattern.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not below the number of patterns of the block
    /// type's geometry.
    #[must_use]
    #[inline]
    pub fn glyph(&self, pattern: u16) -> char {
        self.glyphs[pattern as usize]
    }

    /// Returns the pattern for a glyph, or `None` if the glyph is not part
    /// of this alphabet.
    #[must_use]
    #[inline]
    pub fn pattern(&self, glyph: char) -> Option<u16> {
        self.patterns.get(&glyph).copied()
    }

    /// Returns the ordered glyph table, indexed by pattern.
    #[must_use]
    #[inline]
    pub fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    /// Returns the number of patterns.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; alphabets have at least two entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// A catalog of lazily built [`Alphabet`]s, one slot per [`BlockType`].
///
/// Each slot is built at most once even under concurrent first access;
/// reads after initialization are lock-free. [`Registry::new`] is `const`,
/// so a registry can live in a `static` — that is exactly what
/// [`default_registry`] does.
#[derive(Debug)]
pub struct Registry {
    slots: [OnceLock<Alphabet>; BlockType::COUNT],
}

impl Registry {
    /// Creates a registry with all slots unbuilt.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [const { OnceLock::new() }; BlockType::COUNT],
        }
    }

    /// Returns the alphabet for a block type, building it on first use.
    #[must_use]
    pub fn alphabet(&self, block: BlockType) -> &Alphabet {
        self.slots[block.index()].get_or_init(|| Alphabet::new(block))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process-wide registry.
#[must_use]
pub fn default_registry() -> &'static Registry {
    static REGISTRY: Registry = Registry::new();
    &REGISTRY
}
