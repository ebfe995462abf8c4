use thiserror::Error;

use crate::function::function::Function;
use crate::tabulated::functionpoint::approx_eq;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LogError {
    #[error("logarithm base must be positive and different from 1, got {0}")]
    InvalidBase(f64)
}

/// Logarithm to a fixed base, NaN for non-positive arguments.
#[derive(Debug, Clone, Copy)]
pub struct Log {
    base: f64,
    ln_base: f64
}

impl Log {
    pub fn new(base: f64) -> Result<Log, LogError> {
        if !(base > 0.0) || approx_eq(base, 1.0) {
            return Err(LogError::InvalidBase(base));
        }
        Ok(Log { base, ln_base: base.ln() })
    }

    pub fn natural() -> Log {
        Log { base: std::f64::consts::E, ln_base: 1.0 }
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

impl Function for Log {
    fn domain_left(&self) -> f64 {
        0.0
    }

    fn domain_right(&self) -> f64 {
        f64::MAX
    }

    fn value_at(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NAN;
        }
        x.ln() / self.ln_base
    }
}
