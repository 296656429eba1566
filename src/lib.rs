//! # Trazar
//!
//! Minimal 2D software rasterizer with zero floating-point in the line path.
//!
//! Trazar converts abstract geometric primitives (line segments, triangles)
//! into colored pixels in an in-memory RGBA framebuffer, which can then be
//! serialized to a PNG file. Rasterization is deterministic, gap-free, and
//! stateless: each draw call is a pure function of (geometry, color) onto
//! the pixel sink.
//!
//! ## Quick Start
//!
//! ```rust
//! use trazar::prelude::*;
//!
//! let mut fb = Framebuffer::new(100, 100)?;
//! fb.clear(Rgba::BLACK);
//!
//! draw_line(&mut fb, 13, 20, 80, 40, Rgba::WHITE);
//! fill_triangle(
//!     &mut fb,
//!     Point2::new(10, 10),
//!     Point2::new(60, 25),
//!     Point2::new(35, 70),
//!     Rgba::RED,
//! );
//!
//! fb.flip_vertically();
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert_eq!(&png[0..4], &[137, 80, 78, 71]);
//! # Ok::<(), trazar::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal*, 4(1), 25-30.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Core framebuffer and the pixel sink abstraction.
pub mod framebuffer;

/// Geometric primitives (integer points, segments, triangles).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization algorithms.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trazar operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use trazar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{Framebuffer, PixelSink};
    pub use crate::geometry::{Point2, Segment, Triangle};
    pub use crate::output::PngEncoder;
    pub use crate::render::{draw_line, fill_triangle, Drawable};
}
