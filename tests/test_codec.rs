/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use block_glyphs::prelude::*;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn random_raster(r: &mut SmallRng, width: usize, height: usize) -> Raster {
    let mut raster = Raster::new(width, height);
    for y in 0..height {
        for x in 0..width {
            raster.set(x, y, r.random_range(0..3) != 0);
        }
    }
    raster
}

#[test]
fn full_quad_block() {
    // A fully set 2x2 raster maps to the single pattern-15 glyph.
    let raster = Raster::from_bytes(&[0b1111], 2, 2);
    assert_eq!(Encoder::new(BlockType::Quads).to_text(&raster), "█");
}

#[test]
fn single_cell_row() {
    // 3x1 with bits [1,0,1]: three glyphs, no row separator.
    let raster = Raster::from_bytes(&[0b101], 3, 1);
    assert_eq!(Encoder::new(BlockType::Solids).to_text(&raster), "█ █");
    assert_eq!(Encoder::new(BlockType::Binaries).to_text(&raster), "101");
    assert_eq!(Encoder::new(BlockType::XXs).to_text(&raster), "X X");
}

#[test]
fn double_wide_emits_twice() {
    let mut raster = Raster::new(1, 1);
    raster.set(0, 0, true);
    assert_eq!(Encoder::new(BlockType::Doubles).to_text(&raster), "██");
    raster.set(0, 0, false);
    assert_eq!(Encoder::new(BlockType::Doubles).to_text(&raster), "  ");
}

#[test]
fn half_blocks_stack_rows() {
    let mut raster = Raster::new(1, 2);
    raster.set(0, 0, true);
    assert_eq!(Encoder::new(BlockType::Halves).to_text(&raster), "▀");
    assert_eq!(Encoder::new(BlockType::Asciis).to_text(&raster), "^");
    raster.set(0, 1, true);
    assert_eq!(Encoder::new(BlockType::Halves).to_text(&raster), "█");
    assert_eq!(Encoder::new(BlockType::Asciis).to_text(&raster), "%");
}

#[test]
fn quad_corners() {
    let mut raster = Raster::new(2, 2);
    raster.set(0, 0, true);
    assert_eq!(Encoder::new(BlockType::Quads).to_text(&raster), "▘");
    raster.set(0, 0, false);
    raster.set(1, 0, true);
    assert_eq!(Encoder::new(BlockType::Quads).to_text(&raster), "▝");
    raster.set(1, 0, false);
    raster.set(0, 1, true);
    assert_eq!(Encoder::new(BlockType::Quads).to_text(&raster), "▖");
    raster.set(0, 1, false);
    raster.set(1, 1, true);
    assert_eq!(Encoder::new(BlockType::Quads).to_text(&raster), "▗");
}

#[test]
fn braille_corners() {
    let mut raster = Raster::new(2, 4);
    raster.set(0, 0, true);
    assert_eq!(Encoder::new(BlockType::Braille).to_text(&raster), "⠁");
    raster.set(1, 3, true);
    assert_eq!(Encoder::new(BlockType::Braille).to_text(&raster), "⢁");
}

#[test]
fn separators_between_block_rows() {
    // 4x6 fully set with sextants: a 2x2 block grid.
    let raster = Raster::from_bytes(&[0xff, 0xff, 0xff], 4, 6);
    assert_eq!(Encoder::new(BlockType::Sextants).to_text(&raster), "██\n██");
    // The double-wide type separates rows but not the glyph pairs.
    let tall = Raster::from_bytes(&[0b11], 1, 2);
    assert_eq!(Encoder::new(BlockType::Doubles).to_text(&tall), "██\n██");
}

#[test]
fn best_selection() {
    assert_eq!(best(1), BlockType::Solids);
    assert_eq!(best(5), BlockType::Quads);
    assert_eq!(best(25), BlockType::Octants);
}

#[test]
fn padding_reads_as_zero() {
    // 3x3 fully set, quads: the padded column and row stay blank, so the
    // right edge uses left-half glyphs and the bottom edge top-half glyphs.
    let raster = Raster::from_bytes(&[0xff, 0xff], 3, 3);
    assert_eq!(Encoder::new(BlockType::Quads).to_text(&raster), "█▌\n▀▘");
}

#[test]
fn padding_never_panics() {
    let mut r = SmallRng::seed_from_u64(1330);
    for block in BlockType::ALL {
        for _ in 0..50 {
            let width = r.random_range(1..40);
            let height = r.random_range(1..40);
            let raster = random_raster(&mut r, width, height);
            let _ = Encoder::new(block).to_text(&raster);
        }
    }
}

#[test]
fn encoding_is_deterministic() {
    let mut r = SmallRng::seed_from_u64(42);
    let raster = random_raster(&mut r, 31, 27);
    for block in BlockType::ALL {
        let encoder = Encoder::new(block);
        assert_eq!(encoder.to_text(&raster), encoder.to_text(&raster), "{block}");
    }
}

#[test]
fn stream_shape() {
    let mut r = SmallRng::seed_from_u64(7);
    let raster = random_raster(&mut r, 13, 11);
    for block in BlockType::ALL {
        let geometry = block.geometry();
        let cols = raster.width().div_ceil(geometry.width());
        let rows = raster.height().div_ceil(geometry.height());
        let glyphs_per_block = if geometry.double_wide() { 2 } else { 1 };
        let expected = rows * cols * glyphs_per_block + rows - 1;
        let n = Encoder::new(block).to_text(&raster).chars().count();
        assert_eq!(n, expected, "{block}");
    }
}

#[test]
fn round_trip_aligned() -> anyhow::Result<()> {
    let mut r = SmallRng::seed_from_u64(1337);
    for block in BlockType::ALL {
        let geometry = block.geometry();
        for i in 1..8 {
            let width = geometry.width() * i;
            let height = geometry.height() * (9 - i);
            let raster = random_raster(&mut r, width, height);
            let text = Encoder::new(block).to_text(&raster);
            let decoded = Decoder::new(block).decode(&text, width, height)?;
            assert_eq!(decoded, raster, "{block} {width}x{height}");
        }
    }
    Ok(())
}

#[test]
fn round_trip_with_true_dimensions() -> anyhow::Result<()> {
    // Unaligned dimensions round-trip as long as the decoder is told the
    // original size: the only bits the truncation discards are the zeros
    // the encoder padded with.
    let mut r = SmallRng::seed_from_u64(2024);
    for block in BlockType::ALL {
        for _ in 0..25 {
            let width = r.random_range(1..40);
            let height = r.random_range(1..40);
            let raster = random_raster(&mut r, width, height);
            let text = Encoder::new(block).to_text(&raster);
            let decoded = Decoder::new(block).decode(&text, width, height)?;
            assert_eq!(decoded, raster, "{block} {width}x{height}");
        }
    }
    Ok(())
}

#[test]
fn decode_rejects_foreign_alphabet() {
    // A braille stream is not a quads stream.
    let mut raster = Raster::new(2, 4);
    raster.set(0, 0, true);
    let text = Encoder::new(BlockType::Braille).to_text(&raster);
    let err = Decoder::new(BlockType::Quads).decode(&text, 2, 4).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownSymbol('⠁')));
}

#[test]
fn injected_registry() -> anyhow::Result<()> {
    let registry = Registry::new();
    let raster = Raster::from_bytes(&[0b1111], 2, 2);
    let encoder = Encoder::with_registry(&registry, BlockType::Quads);
    let text = encoder.to_text(&raster);
    assert_eq!(text, "█");
    let decoder = Decoder::with_registry(&registry, BlockType::Quads);
    assert_eq!(decoder.decode(&text, 2, 2)?, raster);
    Ok(())
}

#[test]
fn stripes_across_geometries() -> anyhow::Result<()> {
    // Vertical stripes over a grid of dimensions, encoded and decoded with
    // every block type.
    for h in [2, 4, 6, 8, 12, 24, 34] {
        for w in [2, 4, 6, 8, 12, 24, 34] {
            let mut raster = Raster::new(w, h);
            for y in 0..h {
                for x in 0..w {
                    raster.set(x, y, x % 2 == 1);
                }
            }
            for block in BlockType::ALL {
                let text = Encoder::new(block).to_text(&raster);
                let decoded = Decoder::new(block).decode(&text, w, h)?;
                assert_eq!(decoded, raster, "{block} {w}x{h}");
            }
        }
    }
    Ok(())
}
