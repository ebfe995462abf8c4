use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

/// Absolute tolerance used for every coordinate comparison in the crate.
pub const EPSILON: f64 = 1e-9;

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// A sample `(x, y)` of a tabulated function.
///
/// Points are plain values: tabulated functions hand out and take in copies,
/// so no two functions ever share a point.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionPoint {
    x: f64,
    y: f64
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> FunctionPoint {
        FunctionPoint { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}

/// Tolerance equality: both coordinates within [`EPSILON`].
impl PartialEq for FunctionPoint {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

// Snap each coordinate to the EPSILON grid so points that are bitwise equal,
// or that fall in the same grid cell, hash identically.
fn grid_cell(v: f64) -> u64 {
    let snapped = (v / EPSILON).floor();
    if snapped == 0.0 {
        0.0_f64.to_bits()
    } else {
        snapped.to_bits()
    }
}

impl Hash for FunctionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        grid_cell(self.x).hash(state);
        grid_cell(self.y).hash(state);
    }
}

impl fmt::Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}
