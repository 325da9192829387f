/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A scaled two-color pixel view over a raster.
//!
//! [`PixelView`] is a thin adapter for image-consuming tooling: it magnifies
//! each raster bit into a `scale_x × scale_y` rectangle of opaque or
//! transparent pixels. It reads only [`Raster::get`] and the raster bounds
//! and carries no bit-packing logic of its own.

use crate::raster::Raster;

/// The default pixel scale factor in both directions.
pub const DEFAULT_SCALE: usize = 24;

/// A scaled, two-color pixel rendering of a raster.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    raster: &'a Raster,
    scale_x: usize,
    scale_y: usize,
}

impl<'a> PixelView<'a> {
    /// Creates a view with the [default scale](DEFAULT_SCALE) in both
    /// directions.
    #[must_use]
    pub fn new(raster: &'a Raster) -> Self {
        Self::with_scale(raster, DEFAULT_SCALE, DEFAULT_SCALE)
    }

    /// Creates a view with explicit scale factors; zero is treated as one.
    #[must_use]
    pub fn with_scale(raster: &'a Raster, scale_x: usize, scale_y: usize) -> Self {
        Self {
            raster,
            scale_x: scale_x.max(1),
            scale_y: scale_y.max(1),
        }
    }

    /// Returns the view width in pixels.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.raster.width() * self.scale_x
    }

    /// Returns the view height in pixels.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.raster.height() * self.scale_y
    }

    /// Returns true if the pixel at `(x, y)` is opaque.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the view bounds.
    #[must_use]
    #[inline]
    pub fn opaque(&self, x: usize, y: usize) -> bool {
        self.raster.get(x / self.scale_x, y / self.scale_y)
    }
}

impl Raster {
    /// Returns a two-color pixel view with the default scale.
    #[must_use]
    pub fn pixels(&self) -> PixelView<'_> {
        PixelView::new(self)
    }
}
