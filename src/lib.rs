/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]

pub mod blocks;
pub mod codec;
pub mod raster;
pub mod utils;
pub mod view;

#[cfg(feature = "fuzz")]
pub mod fuzz;

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::blocks::*;
    pub use crate::codec::*;
    pub use crate::raster::*;
    pub use crate::utils::*;
    pub use crate::view::*;
}
