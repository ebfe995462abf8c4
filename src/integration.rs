use log::debug;
use thiserror::Error;

use crate::function::function::Function;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntegrationError {
    #[error("integration range [{left}, {right}] is empty or leaves the domain [{domain_left}, {domain_right}]")]
    InvalidRange {
        left: f64,
        right: f64,
        domain_left: f64,
        domain_right: f64
    },
    #[error("integration step must be positive and finite, got {0}")]
    InvalidStep(f64)
}

/// Trapezoidal integral of `function` over `[left, right]`.
///
/// Slices are `step` wide except the last one, which is cut at `right`.
/// A NaN sample anywhere makes the whole result NaN. The function is only
/// read.
pub fn integrate(function: &dyn Function, left: f64, right: f64, step: f64) -> Result<f64, IntegrationError> {
    let domain_left = function.domain_left();
    let domain_right = function.domain_right();
    let in_domain = |x: f64| x >= domain_left && x <= domain_right;
    if !(in_domain(left) && in_domain(right) && left < right) {
        return Err(IntegrationError::InvalidRange { left, right, domain_left, domain_right });
    }
    if !(step > 0.0 && step.is_finite()) {
        return Err(IntegrationError::InvalidStep(step));
    }

    let mut integral = 0.0;
    let mut current_x = left;
    let mut current_y = function.value_at(current_x);
    while current_x < right {
        let next_x = (current_x + step).min(right);
        let next_y = function.value_at(next_x);
        if current_y.is_nan() || next_y.is_nan() {
            debug!("integrate: undefined value near x = {}, result is NaN", current_x);
            return Ok(f64::NAN);
        }
        integral += (current_y + next_y) * (next_x - current_x) / 2.0;
        if next_x <= current_x {
            // step below the spacing of floats at current_x
            return Err(IntegrationError::InvalidStep(step));
        }
        current_x = next_x;
        current_y = next_y;
    }
    debug!("integrate: [{}, {}] step {} -> {}", left, right, step, integral);
    Ok(integral)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::E;

    use super::*;
    use crate::function::basic::exp::Exp;
    use crate::function::basic::logarithm::Log;
    use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;

    #[test]
    fn exp_on_unit_interval() {
        let result = integrate(&Exp, 0.0, 1.0, 1e-5).unwrap();
        assert!((result - (E - 1.0)).abs() < 1e-7);
    }

    #[test]
    fn last_slice_is_clamped() {
        // constant 2 over [0, 1] with a step that does not divide the range
        let f = ArrayTabulatedFunction::from_values(0.0, 1.0, &[2.0, 2.0]).unwrap();
        let result = integrate(&f, 0.0, 1.0, 0.3).unwrap();
        assert!((result - 2.0).abs() < 1e-12);
    }

    #[test]
    fn piecewise_linear_is_exact_on_nodes() {
        let f = LinkedListTabulatedFunction::from_values(0.0, 2.0, &[0.0, 2.0, 0.0]).unwrap();
        let result = integrate(&f, 0.0, 2.0, 0.5).unwrap();
        assert!((result - 2.0).abs() < 1e-12);
    }

    #[test]
    fn nan_propagates() {
        let log = Log::new(10.0).unwrap();
        assert!(integrate(&log, 0.0, 1.0, 0.1).unwrap().is_nan());
    }

    #[test]
    fn rejects_bad_arguments() {
        let f = ArrayTabulatedFunction::zeros(0.0, 1.0, 3).unwrap();
        assert!(matches!(integrate(&f, 0.5, 0.5, 0.1), Err(IntegrationError::InvalidRange { .. })));
        assert!(matches!(integrate(&f, 0.8, 0.2, 0.1), Err(IntegrationError::InvalidRange { .. })));
        assert!(matches!(integrate(&f, -0.1, 0.5, 0.1), Err(IntegrationError::InvalidRange { .. })));
        assert!(matches!(integrate(&f, 0.0, 1.5, 0.1), Err(IntegrationError::InvalidRange { .. })));
        assert_eq!(integrate(&f, 0.0, 1.0, 0.0), Err(IntegrationError::InvalidStep(0.0)));
        assert_eq!(integrate(&f, 0.0, 1.0, -1.0), Err(IntegrationError::InvalidStep(-1.0)));
        assert!(integrate(&f, 0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn does_not_mutate_the_function() {
        let f = ArrayTabulatedFunction::from_values(0.0, 1.0, &[1.0, 3.0]).unwrap();
        let before = f.clone();
        integrate(&f, 0.0, 1.0, 0.01).unwrap();
        assert_eq!(f, before);
    }
}
