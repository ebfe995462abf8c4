use std::str::FromStr;

use serde::Deserialize;

use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
use crate::tabulated::tabulatedfunction::{
    TabulatedFunction,
    TabulatedFunctionError
};

/// Storage strategy for a tabulated function, picked once at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Backend {
    /// Contiguous buffer, O(1) index access.
    #[default]
    Array,
    /// Circular doubly-linked list with a sentinel node.
    LinkedList
}

impl Backend {
    pub fn zeros(&self, left: f64, right: f64, count: usize) -> Result<Box<dyn TabulatedFunction>, TabulatedFunctionError> {
        let function: Box<dyn TabulatedFunction> = match self {
            Backend::Array => Box::new(ArrayTabulatedFunction::zeros(left, right, count)?),
            Backend::LinkedList => Box::new(LinkedListTabulatedFunction::zeros(left, right, count)?)
        };
        Ok(function)
    }

    pub fn from_values(&self, left: f64, right: f64, values: &[f64]) -> Result<Box<dyn TabulatedFunction>, TabulatedFunctionError> {
        let function: Box<dyn TabulatedFunction> = match self {
            Backend::Array => Box::new(ArrayTabulatedFunction::from_values(left, right, values)?),
            Backend::LinkedList => Box::new(LinkedListTabulatedFunction::from_values(left, right, values)?)
        };
        Ok(function)
    }

    pub fn from_points(&self, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>, TabulatedFunctionError> {
        let function: Box<dyn TabulatedFunction> = match self {
            Backend::Array => Box::new(ArrayTabulatedFunction::from_points(points)?),
            Backend::LinkedList => Box::new(LinkedListTabulatedFunction::from_points(points)?)
        };
        Ok(function)
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Ok(Backend::Array),
            "linkedlist" | "linked-list" | "list" => Ok(Backend::LinkedList),
            other => Err(format!("unknown backend '{}', expected 'array' or 'linked-list'", other))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::function::Function;

    #[test]
    fn both_backends_build_equal_tables() {
        let array = Backend::Array.from_values(0.0, 2.0, &[1.0, 0.0, 1.0]).unwrap();
        let list = Backend::LinkedList.from_values(0.0, 2.0, &[1.0, 0.0, 1.0]).unwrap();
        assert!(*array == *list);
        assert!(*array.box_clone() == *list.clone());
    }

    #[test]
    fn construction_errors_pass_through() {
        for backend in [Backend::Array, Backend::LinkedList] {
            assert!(matches!(
                backend.zeros(1.0, 0.0, 4),
                Err(TabulatedFunctionError::InvalidConstruction(_))
            ));
            assert!(backend.from_points(&[FunctionPoint::new(0.0, 0.0)]).is_err());
        }
    }

    #[test]
    fn abscissas_within_tolerance_of_a_neighbour_are_rejected() {
        for backend in [Backend::Array, Backend::LinkedList] {
            let mut function = backend.from_values(0.0, 2.0, &[0.0, 10.0, 20.0]).unwrap();
            assert_eq!(
                function.set_x(2, 1.0 + 1e-12),
                Err(TabulatedFunctionError::OrderViolation { index: 2, x: 1.0 + 1e-12 })
            );
            assert!(function.set_point(0, FunctionPoint::new(1.0 - 1e-12, 5.0)).is_err());
            for i in 0..function.point_count() {
                let x = function.x_at(i).unwrap();
                assert_eq!(function.value_at(x), function.y_at(i).unwrap());
            }
            assert!(matches!(
                backend.from_points(&[FunctionPoint::new(0.0, 0.0), FunctionPoint::new(1e-12, 1.0)]),
                Err(TabulatedFunctionError::InvalidConstruction(_))
            ));
        }
    }

    #[test]
    fn backend_names_in_json() {
        let backend: Backend = serde_json::from_str("\"LinkedList\"").unwrap();
        assert_eq!(backend, Backend::LinkedList);
        assert_eq!(Backend::default(), Backend::Array);
    }

    #[test]
    fn backend_names_on_the_command_line() {
        assert_eq!("array".parse::<Backend>(), Ok(Backend::Array));
        assert_eq!("Linked-List".parse::<Backend>(), Ok(Backend::LinkedList));
        assert!("tree".parse::<Backend>().is_err());
    }
}
