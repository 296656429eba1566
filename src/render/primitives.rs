//! Primitive rasterization functions.
//!
//! Implements the line and triangle rasterizers. Both are stateless: a draw
//! call is a pure function of (geometry, color) onto the sink, and neither
//! mutates caller-provided geometry. Bounds policy belongs to the sink; the
//! only clipping here is the guard against negative coordinates before the
//! unsigned cast.

use crate::color::Rgba;
use crate::framebuffer::PixelSink;
use crate::geometry::{Point2, Segment, Triangle};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a pixel sink.
    fn draw<S: PixelSink>(&self, sink: &mut S, color: Rgba);
}

// ============================================================================
// Line Rasterization
// ============================================================================

/// Draw a line using Bresenham's algorithm.
///
/// Visits every pixel the continuous line crosses, with no gaps and no
/// duplicate writes, and produces the same pixel set when the endpoints are
/// swapped. The loop always iterates along the longer axis: steep lines are
/// transposed up front and transposed back at the moment of writing, so
/// near-vertical lines come out as dense as near-horizontal ones.
///
/// The final endpoint is intentionally not drawn (the iterated range is
/// half-open): chained segments sharing a joint do not overdraw it. The one
/// exception is a zero-length line, which draws its single pixel.
///
/// # Arguments
///
/// * `sink` - Target pixel sink
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line<S: PixelSink>(sink: &mut S, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);

    // Iterate along the longer axis: transpose steep lines, un-transpose at
    // the write.
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }

    // The error accumulator assumes dx >= 0.
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;

    // Zero-length line: both endpoints collapse to one pixel.
    if dx == 0 {
        put_pixel(sink, x0, y0, steep, color);
        return;
    }

    let derror = 2 * dy.abs();
    let mut error = 0;
    let mut y = y0;

    for x in x0..x1 {
        put_pixel(sink, x, y, steep, color);

        error += derror;
        if error > dx {
            y += if dy > 0 { 1 } else { -1 };
            error -= 2 * dx;
        }
    }
}

/// Write one pixel, undoing the steep transpose.
#[inline]
fn put_pixel<S: PixelSink>(sink: &mut S, x: i32, y: i32, steep: bool, color: Rgba) {
    let (px, py) = if steep { (y, x) } else { (x, y) };
    if px >= 0 && py >= 0 {
        sink.set_pixel(px as u32, py as u32, color);
    }
}

impl Drawable for Segment {
    fn draw<S: PixelSink>(&self, sink: &mut S, color: Rgba) {
        draw_line(
            sink,
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            color,
        );
    }
}

// ============================================================================
// Triangle Rasterization
// ============================================================================

/// Fill a triangle using a horizontal scanline sweep.
///
/// Fills the interior including the boundary, one span per scanline, with
/// no gaps and at most one write per pixel. Vertex order does not matter.
/// A zero-height triangle (all vertices on one scanline) draws nothing.
///
/// Each scanline is bounded by a point on the long edge (top vertex to
/// bottom vertex) and a point on one of the two short edges, interpolated
/// linearly and truncated to pixel coordinates.
///
/// # Arguments
///
/// * `sink` - Target pixel sink
/// * `v0`, `v1`, `v2` - Triangle vertices, in any order
/// * `color` - Fill color
pub fn fill_triangle<S: PixelSink>(
    sink: &mut S,
    v0: Point2,
    v1: Point2,
    v2: Point2,
    color: Rgba,
) {
    // Zero-height sliver: nothing to fill, and the interpolation below
    // would divide by zero.
    if v0.y == v1.y && v0.y == v2.y {
        return;
    }

    // Sort local copies by y so that t0.y <= t1.y <= t2.y.
    let (mut t0, mut t1, mut t2) = (v0, v1, v2);
    if t0.y > t1.y {
        std::mem::swap(&mut t0, &mut t1);
    }
    if t0.y > t2.y {
        std::mem::swap(&mut t0, &mut t2);
    }
    if t1.y > t2.y {
        std::mem::swap(&mut t1, &mut t2);
    }

    let total_height = t2.y - t0.y;

    for y in t0.y..=t2.y {
        // A zero-height upper segment is routed to the lower half, which
        // keeps both segment heights non-zero at the division.
        let second_half = y > t1.y || t1.y == t0.y;
        let segment_height = if second_half {
            t2.y - t1.y
        } else {
            t1.y - t0.y
        };

        let alpha = (y - t0.y) as f32 / total_height as f32;
        let beta = if second_half {
            (y - t1.y) as f32 / segment_height as f32
        } else {
            (y - t0.y) as f32 / segment_height as f32
        };

        let mut a = t0 + (t2 - t0) * alpha;
        let mut b = if second_half {
            t1 + (t2 - t1) * beta
        } else {
            t0 + (t1 - t0) * beta
        };

        if a.x > b.x {
            std::mem::swap(&mut a, &mut b);
        }

        for x in a.x..=b.x {
            if x >= 0 && y >= 0 {
                sink.set_pixel(x as u32, y as u32, color);
            }
        }
    }
}

impl Drawable for Triangle {
    fn draw<S: PixelSink>(&self, sink: &mut S, color: Rgba) {
        fill_triangle(sink, self.a, self.b, self.c, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
