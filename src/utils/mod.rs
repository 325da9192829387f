/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Debugging and inspection helpers.

mod dbg;
pub use dbg::dump;
