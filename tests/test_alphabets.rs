/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::collections::HashSet;

use block_glyphs::prelude::*;

#[test]
fn alphabets_are_exhaustive() {
    for block in BlockType::ALL {
        let alphabet = default_registry().alphabet(block);
        assert_eq!(alphabet.block(), block);
        assert_eq!(alphabet.len(), 1 << block.bits(), "{block}");
        for pattern in 0..alphabet.len() as u16 {
            assert_eq!(alphabet.pattern(alphabet.glyph(pattern)), Some(pattern));
        }
    }
}

#[test]
fn glyphs_are_unique_within_a_table() {
    for block in BlockType::ALL {
        let glyphs: HashSet<char> = block.glyphs().iter().copied().collect();
        assert_eq!(glyphs.len(), block.glyphs().len(), "{block}");
    }
}

#[test]
fn table_anchors() {
    // Spot checks tying the bit-weight layout to well-known glyphs.
    assert_eq!(BlockType::Solids.glyphs(), [' ', '█']);
    assert_eq!(BlockType::Halves.glyphs()[1], '▀');
    assert_eq!(BlockType::Halves.glyphs()[2], '▄');
    assert_eq!(BlockType::Quads.glyphs()[0b1001], '▚');
    assert_eq!(BlockType::Quads.glyphs()[0b0110], '▞');
    assert_eq!(BlockType::Quads.glyphs()[0b0101], '▌');
    assert_eq!(BlockType::Quads.glyphs()[15], '█');
    assert_eq!(BlockType::Sextants.glyphs()[0b010101], '▌');
    assert_eq!(BlockType::Sextants.glyphs()[0b101010], '▐');
    assert_eq!(BlockType::Sextants.glyphs()[63], '█');
    assert_eq!(BlockType::Octants.glyphs()[0b01010101], '▌');
    assert_eq!(BlockType::Octants.glyphs()[0b00001111], '▀');
    assert_eq!(BlockType::Octants.glyphs()[255], '█');
    assert_eq!(BlockType::Braille.glyphs()[0], '⠀');
    assert_eq!(BlockType::Braille.glyphs()[255], '⣿');
}

#[test]
fn contiguity() {
    let contiguous: Vec<BlockType> = BlockType::ALL
        .into_iter()
        .filter(|block| block.contiguous())
        .collect();
    assert_eq!(
        contiguous,
        [
            BlockType::Solids,
            BlockType::Doubles,
            BlockType::Halves,
            BlockType::Quads,
            BlockType::Sextants,
            BlockType::Octants,
        ]
    );
}

#[test]
fn best_picks_contiguous_types() {
    for height in 1..=100 {
        assert!(best(height).contiguous(), "height {height}");
    }
}
