use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use thiserror::Error;

use crate::function::function::Function;
use crate::tabulated::functionpoint::{
    approx_eq,
    FunctionPoint
};

/// Smallest number of points a tabulated function may hold.
pub const MIN_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabulatedFunctionError {
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),
    #[error("index {index} out of range for {count} points")]
    IndexOutOfRange {
        index: usize,
        count: usize
    },
    #[error("x = {x} at index {index} breaks the strict ordering of abscissas")]
    OrderViolation {
        index: usize,
        x: f64
    },
    #[error("a point with x = {0} already exists")]
    DuplicateAbscissa(f64),
    #[error("cannot delete a point: at least 2 points are required")]
    MinimumSizeViolation
}

/// A function given by an ordered table of points, linearly interpolated
/// between them.
///
/// Every implementation keeps at least [`MIN_POINTS`] points with strictly
/// increasing abscissas. Failed operations leave the table untouched.
pub trait TabulatedFunction: Function {
    fn point_count(&self) -> usize;

    fn point_at(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError>;

    /// Replaces the point at `index`. The new abscissa must stay strictly
    /// between the neighbouring ones.
    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError>;

    /// Removes the point at `index`, refusing to go below [`MIN_POINTS`].
    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError>;

    /// Inserts `point` at the position dictated by its abscissa and returns
    /// that position.
    fn insert_point(&mut self, point: FunctionPoint) -> Result<usize, TabulatedFunctionError>;

    /// Copies of all points in order.
    fn points(&self) -> Vec<FunctionPoint>;

    /// Deep copy with independent storage and the same backend.
    fn box_clone(&self) -> Box<dyn TabulatedFunction>;

    fn x_at(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        Ok(self.point_at(index)?.x())
    }

    fn y_at(&self, index: usize) -> Result<f64, TabulatedFunctionError> {
        Ok(self.point_at(index)?.y())
    }

    fn set_x(&mut self, index: usize, x: f64) -> Result<(), TabulatedFunctionError> {
        let mut point = self.point_at(index)?;
        point.set_x(x);
        self.set_point(index, point)
    }

    fn set_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        let mut point = self.point_at(index)?;
        point.set_y(y);
        self.set_point(index, point)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Checks shared by the backends
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn check_index(index: usize, count: usize) -> Result<(), TabulatedFunctionError> {
    if index < count {
        Ok(())
    } else {
        Err(TabulatedFunctionError::IndexOutOfRange { index, count })
    }
}

/// `x` must lie strictly between the neighbours that exist and stay more than
/// the tolerance away from each of them.
pub(crate) fn check_order(
    index: usize,
    x: f64,
    prev_x: Option<f64>,
    next_x: Option<f64>,
) -> Result<(), TabulatedFunctionError> {
    let after_prev = prev_x.map_or(true, |p| x > p && !approx_eq(x, p));
    let before_next = next_x.map_or(true, |n| x < n && !approx_eq(x, n));
    if after_prev && before_next {
        Ok(())
    } else {
        Err(TabulatedFunctionError::OrderViolation { index, x })
    }
}

pub(crate) fn validate_points(points: &[FunctionPoint]) -> Result<(), TabulatedFunctionError> {
    if points.len() < MIN_POINTS {
        return Err(TabulatedFunctionError::InvalidConstruction(format!(
            "at least {} points are required, got {}",
            MIN_POINTS,
            points.len()
        )));
    }
    let misplaced = |w: &[FunctionPoint]| !(w[0].x() < w[1].x()) || approx_eq(w[0].x(), w[1].x());
    if let Some(i) = points.windows(2).position(misplaced) {
        return Err(TabulatedFunctionError::InvalidConstruction(format!(
            "points must be ordered by strictly increasing, distinct x (index {})",
            i + 1
        )));
    }
    Ok(())
}

/// Evenly spaced abscissas over `[left, right]` paired with `values`.
pub(crate) fn evenly_spaced(
    left: f64,
    right: f64,
    values: &[f64],
) -> Result<Vec<FunctionPoint>, TabulatedFunctionError> {
    if !(left < right && left.is_finite() && right.is_finite()) {
        return Err(TabulatedFunctionError::InvalidConstruction(format!(
            "left border {} must be finite and less than right border {}",
            left, right
        )));
    }
    if values.len() < MIN_POINTS {
        return Err(TabulatedFunctionError::InvalidConstruction(format!(
            "at least {} points are required, got {}",
            MIN_POINTS,
            values.len()
        )));
    }
    let step = (right - left) / (values.len() - 1) as f64;
    let points: Vec<FunctionPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &y)| FunctionPoint::new(left + i as f64 * step, y))
        .collect();
    validate_points(&points)?;
    Ok(points)
}

/// Index of the first point whose abscissa is greater than `x`, or an error
/// if a stored abscissa coincides with `x` within tolerance.
pub(crate) fn insertion_index(
    points: impl Iterator<Item = FunctionPoint>,
    x: f64,
) -> Result<usize, TabulatedFunctionError> {
    if x.is_nan() {
        return Err(TabulatedFunctionError::OrderViolation { index: 0, x });
    }
    let mut index = 0;
    for point in points {
        if approx_eq(point.x(), x) {
            return Err(TabulatedFunctionError::DuplicateAbscissa(x));
        }
        if point.x() > x {
            break;
        }
        index += 1;
    }
    Ok(index)
}

// ─────────────────────────────────────────────────────────────────────────────
// Evaluation
// ─────────────────────────────────────────────────────────────────────────────

/// Evaluates the table at `x` given its points in order.
///
/// A stored abscissa within tolerance returns its ordinate as is; otherwise
/// the two bracketing points are interpolated linearly. Outside the domain
/// the result is NaN.
pub(crate) fn evaluate(points: impl Iterator<Item = FunctionPoint>, x: f64) -> f64 {
    let mut prev: Option<FunctionPoint> = None;
    for point in points {
        if approx_eq(point.x(), x) {
            return point.y();
        }
        if point.x() > x {
            return match prev {
                Some(lhs) => {
                    let (x1, y1) = (lhs.x(), lhs.y());
                    let (x2, y2) = (point.x(), point.y());
                    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
                },
                None => f64::NAN
            };
        }
        prev = Some(point);
    }
    f64::NAN
}

// ─────────────────────────────────────────────────────────────────────────────
// Equality, hashing and rendering through the shared contract
// ─────────────────────────────────────────────────────────────────────────────

/// Positional tolerance equality between any two tabulated functions,
/// whatever their backends.
pub fn tabulated_eq(lhs: &dyn TabulatedFunction, rhs: &dyn TabulatedFunction) -> bool {
    lhs.point_count() == rhs.point_count() && lhs.points() == rhs.points()
}

pub(crate) fn hash_points<H: Hasher>(points: impl Iterator<Item = FunctionPoint>, count: usize, state: &mut H) {
    count.hash(state);
    for point in points {
        point.hash(state);
    }
}

pub(crate) fn fmt_points(points: impl Iterator<Item = FunctionPoint>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{{")?;
    for (i, point) in points.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", point)?;
    }
    write!(f, "}}")
}

impl PartialEq for dyn TabulatedFunction + '_ {
    fn eq(&self, other: &Self) -> bool {
        tabulated_eq(self, other)
    }
}

impl fmt::Debug for dyn TabulatedFunction + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self.points().into_iter(), f)
    }
}

impl fmt::Display for dyn TabulatedFunction + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self.points().into_iter(), f)
    }
}

impl Clone for Box<dyn TabulatedFunction> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<FunctionPoint> {
        coords.iter().map(|&(x, y)| FunctionPoint::new(x, y)).collect()
    }

    #[test]
    fn evaluate_exact_match_and_interpolation() {
        let points = pts(&[(0.0, 0.0), (1.0, 10.0), (3.0, 30.0)]);
        assert_eq!(evaluate(points.iter().copied(), 1.0), 10.0);
        assert_eq!(evaluate(points.iter().copied(), 1.0 + 1e-10), 10.0);
        assert_eq!(evaluate(points.iter().copied(), 0.5), 5.0);
        assert_eq!(evaluate(points.iter().copied(), 2.0), 20.0);
        assert!(evaluate(points.iter().copied(), -0.1).is_nan());
        assert!(evaluate(points.iter().copied(), 3.1).is_nan());
    }

    #[test]
    fn insertion_index_finds_first_not_less() {
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(insertion_index(points.iter().copied(), -1.0), Ok(0));
        assert_eq!(insertion_index(points.iter().copied(), 1.5), Ok(2));
        assert_eq!(insertion_index(points.iter().copied(), 5.0), Ok(3));
        assert_eq!(
            insertion_index(points.iter().copied(), 1.0 + 1e-12),
            Err(TabulatedFunctionError::DuplicateAbscissa(1.0 + 1e-12))
        );
        assert_eq!(
            insertion_index(points.iter().copied(), 1.0 - 1e-12),
            Err(TabulatedFunctionError::DuplicateAbscissa(1.0 - 1e-12))
        );
        assert!(insertion_index(points.iter().copied(), f64::NAN).is_err());
    }

    #[test]
    fn validate_rejects_short_and_unordered() {
        assert!(validate_points(&pts(&[(0.0, 0.0)])).is_err());
        assert!(validate_points(&pts(&[(0.0, 0.0), (0.0, 1.0)])).is_err());
        assert!(validate_points(&pts(&[(1.0, 0.0), (0.0, 1.0)])).is_err());
        assert!(validate_points(&pts(&[(0.0, 0.0), (1e-12, 1.0)])).is_err());
        assert!(validate_points(&pts(&[(0.0, 0.0), (1.0, 1.0)])).is_ok());
    }

    #[test]
    fn evenly_spaced_covers_the_domain() {
        let points = evenly_spaced(0.0, 1.0, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].x(), 0.0);
        assert_eq!(points[2].x(), 0.5);
        assert_eq!(points[4].x(), 1.0);
        assert_eq!(points[3].y(), 4.0);
        assert!(evenly_spaced(1.0, 1.0, &[0.0, 0.0]).is_err());
        assert!(evenly_spaced(0.0, 1.0, &[0.0]).is_err());
        assert!(evenly_spaced(0.0, 1e-10, &[0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn order_check_exempts_missing_neighbours() {
        assert!(check_order(0, -100.0, None, Some(1.0)).is_ok());
        assert!(check_order(3, 100.0, Some(1.0), None).is_ok());
        assert_eq!(
            check_order(1, 1.0, Some(1.0), Some(2.0)),
            Err(TabulatedFunctionError::OrderViolation { index: 1, x: 1.0 })
        );
        assert!(check_order(1, 2.0, Some(1.0), Some(2.0)).is_err());
        assert!(check_order(1, 1.0 + 1e-12, Some(1.0), Some(2.0)).is_err());
        assert!(check_order(1, 2.0 - 1e-12, Some(1.0), Some(2.0)).is_err());
        assert!(check_order(1, 1.5, Some(1.0), Some(2.0)).is_ok());
    }
}
