
/// A real-valued function of one variable restricted to a closed domain.
///
/// `value_at` never fails: points where the function is undefined
/// (outside the domain, poles, logarithm of a non-positive number, ...)
/// evaluate to `f64::NAN`.
pub trait Function: Send + Sync {
    fn domain_left(&self) -> f64;

    fn domain_right(&self) -> f64;

    fn value_at(&self, x: f64) -> f64;
}

impl<F: Function + ?Sized> Function for Box<F> {
    fn domain_left(&self) -> f64 {
        (**self).domain_left()
    }

    fn domain_right(&self) -> f64 {
        (**self).domain_right()
    }

    fn value_at(&self, x: f64) -> f64 {
        (**self).value_at(x)
    }
}

impl<F: Function + ?Sized> Function for std::sync::Arc<F> {
    fn domain_left(&self) -> f64 {
        (**self).domain_left()
    }

    fn domain_right(&self) -> f64 {
        (**self).domain_right()
    }

    fn value_at(&self, x: f64) -> f64 {
        (**self).value_at(x)
    }
}
