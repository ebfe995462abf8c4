use std::fmt;
use std::sync::Arc;

use crate::function::function::Function;
use crate::integration::{
    integrate,
    IntegrationError
};

/// One unit of work handed from the generator to the integrator: a function
/// and the arguments to integrate it with.
#[derive(Clone)]
pub struct Task {
    function: Arc<dyn Function>,
    left: f64,
    right: f64,
    step: f64
}

impl Task {
    pub fn new(function: Arc<dyn Function>, left: f64, right: f64, step: f64) -> Task {
        Task { function, left, right, step }
    }

    pub fn function(&self) -> &Arc<dyn Function> {
        &self.function
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn run(&self) -> TaskReport {
        TaskReport {
            left: self.left,
            right: self.right,
            step: self.step,
            result: integrate(self.function.as_ref(), self.left, self.right, self.step)
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Source {:.2} {:.2} {:.4}", self.left, self.right, self.step)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub left: f64,
    pub right: f64,
    pub step: f64,
    pub result: Result<f64, IntegrationError>
}

impl fmt::Display for TaskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(value) => write!(f, "Result {:.2} {:.2} {:.4} {:.6}", self.left, self.right, self.step, value),
            Err(error) => write!(f, "Result {:.2} {:.2} {:.4} failed: {}", self.left, self.right, self.step, error)
        }
    }
}
