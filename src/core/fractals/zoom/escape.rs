use crate::core::data::complex::Complex;

/// Remaining iteration budget when a point escapes. Ranges over `0..=MAX_DEPTH`.
pub type EscapeDepth = u16;

pub const MAX_DEPTH: EscapeDepth = 256;
pub const ESCAPE_RADIUS_SQUARED: f64 = 5.0;

/// Iterates `z <- z^2 + c` from `z = c`, spending one unit of depth per step,
/// until `|z|^2` reaches the escape radius or the budget runs out.
///
/// A point that starts outside the radius never runs a step and keeps the full
/// budget of [`MAX_DEPTH`]; a point that never escapes ends at `0`.
#[must_use]
pub fn escape_depth(c: Complex) -> EscapeDepth {
    let mut z = c;
    let mut depth = MAX_DEPTH;

    while depth > 0 && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        depth -= 1;
    }

    depth
}

/// The byte written to the frame buffer for `depth`. Only the low eight bits
/// are kept, so the full budget of 256 is stored as 0.
#[must_use]
pub fn depth_to_byte(depth: EscapeDepth) -> u8 {
    (depth & 0xff) as u8
}
