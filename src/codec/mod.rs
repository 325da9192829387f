/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Block encoding and decoding.
//!
//! [`Encoder`] turns a [`Raster`](crate::raster::Raster) into a glyph
//! stream, [`Decoder`] turns a glyph stream back into a raster. Both are
//! pure, synchronous transformations: identical inputs always produce
//! identical outputs, and no state survives a call.

mod decode;
mod encode;

pub use decode::{DecodeError, Decoder, Malformed};
pub use encode::{BlockStream, DisplayBlocks, EncodeError, Encoder};
