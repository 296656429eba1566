//! Rasterization algorithms.
//!
//! Converts geometric primitives into pixel writes against a
//! [`PixelSink`](crate::framebuffer::PixelSink).
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer-only incremental error accumulation
//! - **Scanline Triangle Fill**: two-edge sweep with linear interpolation
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter."

mod primitives;

pub use primitives::{draw_line, fill_triangle, Drawable};
