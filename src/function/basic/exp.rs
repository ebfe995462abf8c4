use crate::function::function::Function;

/// `e^x` over the whole real line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl Function for Exp {
    fn domain_left(&self) -> f64 {
        f64::NEG_INFINITY
    }

    fn domain_right(&self) -> f64 {
        f64::INFINITY
    }

    fn value_at(&self, x: f64) -> f64 {
        x.exp()
    }
}
