use crate::function::function::Function;
use crate::tabulated::functionpoint::approx_eq;

macro_rules! whole_line_domain {
    () => {
        fn domain_left(&self) -> f64 {
            f64::NEG_INFINITY
        }

        fn domain_right(&self) -> f64 {
            f64::INFINITY
        }
    };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sin;

impl Function for Sin {
    whole_line_domain!();

    fn value_at(&self, x: f64) -> f64 {
        x.sin()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cos;

impl Function for Cos {
    whole_line_domain!();

    fn value_at(&self, x: f64) -> f64 {
        x.cos()
    }
}

/// Tangent; NaN at the poles `pi/2 + k*pi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tan;

impl Function for Tan {
    whole_line_domain!();

    fn value_at(&self, x: f64) -> f64 {
        if approx_eq(x.cos(), 0.0) {
            return f64::NAN;
        }
        x.tan()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;
    use std::f64::consts::FRAC_PI_4;

    use super::*;

    #[test]
    fn tan_is_undefined_at_poles() {
        assert!(Tan.value_at(FRAC_PI_2).is_nan());
        assert!(Tan.value_at(-FRAC_PI_2).is_nan());
        assert!((Tan.value_at(FRAC_PI_4) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sin_cos_cover_the_real_line() {
        assert_eq!(Sin.domain_left(), f64::NEG_INFINITY);
        assert_eq!(Cos.domain_right(), f64::INFINITY);
        assert_eq!(Cos.value_at(0.0), 1.0);
        assert_eq!(Sin.value_at(0.0), 0.0);
    }
}
