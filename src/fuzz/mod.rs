/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fuzz harnesses for the block codec.

use arbitrary::Arbitrary;

use crate::blocks::BlockType;
use crate::codec::{Decoder, Encoder};
use crate::raster::Raster;

/// A fuzz case: raw raster bytes plus dimensions and a block type selector.
#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    width: usize,
    height: usize,
    bits: Vec<u8>,
    block: u8,
}

/// Encodes an arbitrary raster and checks that decoding the stream with the
/// same dimensions reproduces it exactly.
///
/// The round trip must hold for any dimensions: non-multiple dimensions are
/// zero-padded on encode and the decoder truncates the padding away, and the
/// discarded padding bits are all zero because the encoder put them there.
pub fn harness(data: FuzzCase) {
    let width = 1 + data.width % 97;
    let height = 1 + data.height % 97;
    let block = BlockType::ALL[data.block as usize % BlockType::COUNT];
    let raster = Raster::from_bytes(&data.bits, width, height);
    let text = Encoder::new(block).to_text(&raster);
    assert_eq!(text, Encoder::new(block).to_text(&raster));
    let decoded = Decoder::new(block)
        .decode(&text, width, height)
        .expect("decoding an encoded stream cannot fail");
    assert_eq!(decoded, raster);
}

/// Feeds an arbitrary char stream to the decoder, which must reject or
/// accept it without panicking.
pub fn harness_decode(data: FuzzCase) {
    let width = 1 + data.width % 97;
    let height = 1 + data.height % 97;
    let block = BlockType::ALL[data.block as usize % BlockType::COUNT];
    let text = String::from_utf8_lossy(&data.bits);
    let _ = Decoder::new(block).decode(&text, width, height);
}
