use std::io;

use log::debug;
use thiserror::Error;

use crate::function::function::Function;
use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::tabulatedfunction::TabulatedFunctionError;

#[derive(Debug, Error)]
pub enum TabulationError {
    #[error("tabulation range [{left}, {right}] leaves the domain [{domain_left}, {domain_right}]")]
    InvalidRange {
        left: f64,
        right: f64,
        domain_left: f64,
        domain_right: f64
    },
    #[error(transparent)]
    Tabulated(#[from] TabulatedFunctionError),
    #[error("malformed stream: {0}")]
    Decode(String),
    #[error(transparent)]
    Io(#[from] io::Error)
}

impl TabulationError {
    /// Running out of input while decoding is a malformed stream, anything
    /// else is a genuine I/O failure.
    pub(crate) fn from_read(error: io::Error) -> TabulationError {
        if error.kind() == io::ErrorKind::UnexpectedEof {
            TabulationError::Decode(format!("truncated stream: {}", error))
        } else {
            TabulationError::Io(error)
        }
    }
}

/// Samples `function` at `count` evenly spaced points of `[left, right]`.
///
/// The range must lie inside the domain of `function`; values the function
/// leaves undefined are stored as NaN.
pub fn tabulate(
    function: &dyn Function,
    left: f64,
    right: f64,
    count: usize,
) -> Result<ArrayTabulatedFunction, TabulationError> {
    let domain_left = function.domain_left();
    let domain_right = function.domain_right();
    if left < domain_left || right > domain_right {
        return Err(TabulationError::InvalidRange { left, right, domain_left, domain_right });
    }
    let step = if count > 1 { (right - left) / (count - 1) as f64 } else { 0.0 };
    let values: Vec<f64> = (0..count)
        .map(|i| function.value_at(left + i as f64 * step))
        .collect();
    let tabulated = ArrayTabulatedFunction::from_values(left, right, &values)?;
    debug!("tabulate: {} points over [{}, {}]", count, left, right);
    Ok(tabulated)
}
