use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use log::trace;

use crate::function::function::Function;
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::{
    check_index,
    check_order,
    evaluate,
    evenly_spaced,
    fmt_points,
    hash_points,
    insertion_index,
    validate_points,
    TabulatedFunction,
    TabulatedFunctionError,
    MIN_POINTS
};

/// Spare slots reserved at construction and added on every reallocation.
pub const GROWTH_STEP: usize = 10;

/// Tabulated function over one contiguous buffer.
///
/// The buffer grows by a fixed [`GROWTH_STEP`] instead of doubling; the
/// intended tables are small. Index access is O(1), insertion and deletion
/// shift the tail by one slot.
#[derive(Debug)]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>
}

impl ArrayTabulatedFunction {
    /// `count` evenly spaced points over `[left, right]` with zero ordinates.
    pub fn zeros(left: f64, right: f64, count: usize) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        Self::from_values(left, right, &vec![0.0; count])
    }

    /// Evenly spaced points over `[left, right]` carrying `values`.
    pub fn from_values(left: f64, right: f64, values: &[f64]) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        let points = evenly_spaced(left, right, values)?;
        Ok(Self::with_buffer(&points))
    }

    /// Copies an explicit point array, which must be ordered by strictly
    /// increasing x and hold at least two points.
    pub fn from_points(points: &[FunctionPoint]) -> Result<ArrayTabulatedFunction, TabulatedFunctionError> {
        validate_points(points)?;
        Ok(Self::with_buffer(points))
    }

    fn with_buffer(points: &[FunctionPoint]) -> ArrayTabulatedFunction {
        let mut buffer = Vec::with_capacity(points.len() + GROWTH_STEP);
        buffer.extend_from_slice(points);
        ArrayTabulatedFunction { points: buffer }
    }

    /// Allocated slots, including the unused tail.
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    fn neighbour_xs(&self, index: usize) -> (Option<f64>, Option<f64>) {
        let prev_x = index.checked_sub(1).map(|i| self.points[i].x());
        let next_x = self.points.get(index + 1).map(|p| p.x());
        (prev_x, next_x)
    }
}

impl Function for ArrayTabulatedFunction {
    fn domain_left(&self) -> f64 {
        self.points[0].x()
    }

    fn domain_right(&self) -> f64 {
        self.points[self.points.len() - 1].x()
    }

    fn value_at(&self, x: f64) -> f64 {
        if x < self.domain_left() || x > self.domain_right() {
            return f64::NAN;
        }
        evaluate(self.points.iter().copied(), x)
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point_at(&self, index: usize) -> Result<FunctionPoint, TabulatedFunctionError> {
        check_index(index, self.points.len())?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), TabulatedFunctionError> {
        check_index(index, self.points.len())?;
        let (prev_x, next_x) = self.neighbour_xs(index);
        check_order(index, point.x(), prev_x, next_x)?;
        self.points[index] = point;
        Ok(())
    }

    fn set_y(&mut self, index: usize, y: f64) -> Result<(), TabulatedFunctionError> {
        check_index(index, self.points.len())?;
        self.points[index].set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), TabulatedFunctionError> {
        check_index(index, self.points.len())?;
        if self.points.len() <= MIN_POINTS {
            return Err(TabulatedFunctionError::MinimumSizeViolation);
        }
        let removed = self.points.remove(index);
        trace!("array backend: deleted {} at index {}", removed, index);
        Ok(())
    }

    fn insert_point(&mut self, point: FunctionPoint) -> Result<usize, TabulatedFunctionError> {
        let index = insertion_index(self.points.iter().copied(), point.x())?;
        if self.points.len() == self.points.capacity() {
            self.points.reserve_exact(GROWTH_STEP);
            trace!("array backend: grew buffer to {} slots", self.points.capacity());
        }
        self.points.insert(index, point);
        trace!("array backend: inserted {} at index {}", point, index);
        Ok(index)
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.points.clone()
    }

    fn box_clone(&self) -> Box<dyn TabulatedFunction> {
        Box::new(self.clone())
    }
}

impl Clone for ArrayTabulatedFunction {
    fn clone(&self) -> Self {
        let mut points = Vec::with_capacity(self.points.capacity());
        points.extend_from_slice(&self.points);
        ArrayTabulatedFunction { points }
    }
}

impl PartialEq for ArrayTabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Hash for ArrayTabulatedFunction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_points(self.points.iter().copied(), self.points.len(), state);
    }
}

impl fmt::Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_points(self.points.iter().copied(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArrayTabulatedFunction {
        ArrayTabulatedFunction::from_values(0.0, 4.0, &[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap()
    }

    #[test]
    fn construction_validates_domain_and_count() {
        assert!(ArrayTabulatedFunction::zeros(1.0, 1.0, 3).is_err());
        assert!(ArrayTabulatedFunction::zeros(2.0, 1.0, 3).is_err());
        assert!(ArrayTabulatedFunction::zeros(0.0, 1.0, 1).is_err());
        let f = ArrayTabulatedFunction::zeros(0.0, 1.0, 3).unwrap();
        assert_eq!(f.point_count(), 3);
        assert_eq!(f.y_at(1), Ok(0.0));
        assert_eq!(f.x_at(1), Ok(0.5));
    }

    #[test]
    fn from_points_rejects_unordered() {
        let points = [FunctionPoint::new(0.0, 0.0), FunctionPoint::new(2.0, 0.0), FunctionPoint::new(1.0, 0.0)];
        assert!(matches!(
            ArrayTabulatedFunction::from_points(&points),
            Err(TabulatedFunctionError::InvalidConstruction(_))
        ));
    }

    #[test]
    fn buffer_grows_by_fixed_step() {
        let mut f = ArrayTabulatedFunction::zeros(0.0, 1.0, 2).unwrap();
        assert!(f.capacity() >= 2 + GROWTH_STEP);
        for i in 0..GROWTH_STEP + 1 {
            f.insert_point(FunctionPoint::new(2.0 + i as f64, 0.0)).unwrap();
        }
        assert_eq!(f.point_count(), 2 + GROWTH_STEP + 1);
        assert!(f.capacity() >= f.point_count());
    }

    #[test]
    fn rejected_mutations_leave_points_untouched() {
        let mut f = sample();
        let before = f.clone();
        assert_eq!(
            f.set_x(2, 1.0),
            Err(TabulatedFunctionError::OrderViolation { index: 2, x: 1.0 })
        );
        assert_eq!(
            f.set_point(0, FunctionPoint::new(1.5, 0.0)),
            Err(TabulatedFunctionError::OrderViolation { index: 0, x: 1.5 })
        );
        assert_eq!(f.insert_point(FunctionPoint::new(3.0, 7.0)), Err(TabulatedFunctionError::DuplicateAbscissa(3.0)));
        assert_eq!(f.point_at(5), Err(TabulatedFunctionError::IndexOutOfRange { index: 5, count: 5 }));
        assert_eq!(f, before);
    }

    #[test]
    fn boundary_points_move_freely_outward() {
        let mut f = sample();
        f.set_x(0, -10.0).unwrap();
        f.set_x(4, 10.0).unwrap();
        assert_eq!(f.domain_left(), -10.0);
        assert_eq!(f.domain_right(), 10.0);
    }

    #[test]
    fn clone_is_independent() {
        let f = sample();
        let mut g = f.clone();
        g.set_y(0, 100.0).unwrap();
        assert_eq!(f.y_at(0), Ok(0.0));
        assert_ne!(f, g);
    }

    #[test]
    fn display_lists_points() {
        let f = ArrayTabulatedFunction::from_values(0.0, 1.0, &[2.0, 3.0]).unwrap();
        assert_eq!(f.to_string(), "{(0; 2), (1; 3)}");
    }
}
