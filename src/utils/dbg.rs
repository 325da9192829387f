/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Human-readable alphabet dumps.

use std::io;
use std::io::Write;

use crate::blocks::{BlockType, Geometry, default_registry};

/// Writes a diagram of a block type's alphabet: first the glyphs in table
/// order, eight per line, then every pattern with its bit mask drawn in the
/// shape of the geometry next to its glyph.
///
/// Useful to eyeball that a glyph table and the bit-weight layout of its
/// geometry agree.
pub fn dump<W: Write>(mut writer: W, block: BlockType) -> io::Result<()> {
    let alphabet = default_registry().alphabet(block);
    let geometry = block.geometry();
    for (i, &glyph) in alphabet.glyphs().iter().enumerate() {
        if i % 8 == 0 {
            write!(writer, "   |")?;
        }
        write!(writer, "{}", glyph)?;
        if i % 8 == 7 || i == alphabet.len() - 1 {
            writeln!(writer, "|")?;
        }
    }
    writeln!(writer)?;
    for (pattern, &glyph) in alphabet.glyphs().iter().enumerate() {
        if pattern != 0 {
            writeln!(writer)?;
        }
        let mask = mask_lines(geometry, pattern as u16);
        writeln!(writer, "{:3}: |{}| │{}│", pattern, mask[0], glyph)?;
        for line in &mask[1..] {
            writeln!(writer, "     |{}|", line)?;
        }
    }
    Ok(())
}

/// Draws a pattern as one line of `' '`/`'X'` cells per geometry row.
fn mask_lines(geometry: &Geometry, pattern: u16) -> Vec<String> {
    let mut lines = vec![vec![' '; geometry.width()]; geometry.height()];
    for (j, &(dx, dy)) in geometry.offsets().iter().enumerate() {
        if pattern & (1 << j) != 0 {
            lines[dy as usize][dx as usize] = 'X';
        }
    }
    lines.into_iter().map(String::from_iter).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_is_exhaustive() -> anyhow::Result<()> {
        for block in BlockType::ALL {
            let mut out = Vec::new();
            dump(&mut out, block)?;
            let text = String::from_utf8(out)?;
            for pattern in 0..block.patterns() {
                assert!(
                    text.contains(&format!("{:3}: |", pattern)),
                    "{block} missing pattern {pattern}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn quads_masks() -> anyhow::Result<()> {
        let mut out = Vec::new();
        dump(&mut out, BlockType::Quads)?;
        let text = String::from_utf8(out)?;
        // Pattern 1 is the top-left bit.
        assert!(text.contains("  1: |X | │▘│"));
        // Pattern 15 is the full block.
        assert!(text.contains(" 15: |XX| │█│"));
        Ok(())
    }
}
