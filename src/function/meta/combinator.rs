use std::sync::Arc;

use thiserror::Error;

use crate::function::function::Function;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CombinatorError {
    #[error("scale factor along x must be non-zero")]
    ZeroScale
}

// ─────────────────────────────────────────────────────────────────────────────
// Single-argument combinators
// ─────────────────────────────────────────────────────────────────────────────

/// `f(x - dx) + dy`: the graph moved by `(dx, dy)`.
pub struct Shift {
    function: Arc<dyn Function>,
    dx: f64,
    dy: f64
}

impl Shift {
    pub fn new(function: Arc<dyn Function>, dx: f64, dy: f64) -> Shift {
        Shift { function, dx, dy }
    }
}

impl Function for Shift {
    fn domain_left(&self) -> f64 {
        self.function.domain_left() + self.dx
    }

    fn domain_right(&self) -> f64 {
        self.function.domain_right() + self.dx
    }

    fn value_at(&self, x: f64) -> f64 {
        self.function.value_at(x - self.dx) + self.dy
    }
}

/// `sy * f(x / sx)`: the graph stretched by `sx` along x and `sy` along y.
pub struct Scale {
    function: Arc<dyn Function>,
    sx: f64,
    sy: f64
}

impl Scale {
    pub fn new(function: Arc<dyn Function>, sx: f64, sy: f64) -> Result<Scale, CombinatorError> {
        if sx == 0.0 {
            return Err(CombinatorError::ZeroScale);
        }
        Ok(Scale { function, sx, sy })
    }
}

impl Function for Scale {
    fn domain_left(&self) -> f64 {
        if self.sx > 0.0 {
            self.function.domain_left() * self.sx
        } else {
            self.function.domain_right() * self.sx
        }
    }

    fn domain_right(&self) -> f64 {
        if self.sx > 0.0 {
            self.function.domain_right() * self.sx
        } else {
            self.function.domain_left() * self.sx
        }
    }

    fn value_at(&self, x: f64) -> f64 {
        self.function.value_at(x / self.sx) * self.sy
    }
}

/// `f(x)^p`.
pub struct Power {
    function: Arc<dyn Function>,
    power: f64
}

impl Power {
    pub fn new(function: Arc<dyn Function>, power: f64) -> Power {
        Power { function, power }
    }
}

impl Function for Power {
    fn domain_left(&self) -> f64 {
        self.function.domain_left()
    }

    fn domain_right(&self) -> f64 {
        self.function.domain_right()
    }

    fn value_at(&self, x: f64) -> f64 {
        self.function.value_at(x).powf(self.power)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Two-argument combinators
// ─────────────────────────────────────────────────────────────────────────────

/// `f(x) + g(x)` over the intersection of both domains.
pub struct Sum {
    lhs: Arc<dyn Function>,
    rhs: Arc<dyn Function>
}

impl Sum {
    pub fn new(lhs: Arc<dyn Function>, rhs: Arc<dyn Function>) -> Sum {
        Sum { lhs, rhs }
    }
}

impl Function for Sum {
    fn domain_left(&self) -> f64 {
        self.lhs.domain_left().max(self.rhs.domain_left())
    }

    fn domain_right(&self) -> f64 {
        self.lhs.domain_right().min(self.rhs.domain_right())
    }

    fn value_at(&self, x: f64) -> f64 {
        self.lhs.value_at(x) + self.rhs.value_at(x)
    }
}

/// `f(x) * g(x)` over the intersection of both domains.
pub struct Mult {
    lhs: Arc<dyn Function>,
    rhs: Arc<dyn Function>
}

impl Mult {
    pub fn new(lhs: Arc<dyn Function>, rhs: Arc<dyn Function>) -> Mult {
        Mult { lhs, rhs }
    }
}

impl Function for Mult {
    fn domain_left(&self) -> f64 {
        self.lhs.domain_left().max(self.rhs.domain_left())
    }

    fn domain_right(&self) -> f64 {
        self.lhs.domain_right().min(self.rhs.domain_right())
    }

    fn value_at(&self, x: f64) -> f64 {
        self.lhs.value_at(x) * self.rhs.value_at(x)
    }
}

/// `outer(inner(x))`, defined where `inner` is.
pub struct Composition {
    outer: Arc<dyn Function>,
    inner: Arc<dyn Function>
}

impl Composition {
    pub fn new(outer: Arc<dyn Function>, inner: Arc<dyn Function>) -> Composition {
        Composition { outer, inner }
    }
}

impl Function for Composition {
    fn domain_left(&self) -> f64 {
        self.inner.domain_left()
    }

    fn domain_right(&self) -> f64 {
        self.inner.domain_right()
    }

    fn value_at(&self, x: f64) -> f64 {
        self.outer.value_at(self.inner.value_at(x))
    }
}
