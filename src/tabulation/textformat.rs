use std::io::{
    Read,
    Write
};
use std::str::SplitWhitespace;

use log::trace;

use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::TabulatedFunction;
use crate::tabulation::tabulation::TabulationError;

// Layout: `count x0 y0 x1 y1 ...` as whitespace separated tokens. Numbers are
// written in their shortest exact decimal form so reading them back gives the
// same bits.

pub fn write_text<W: Write>(function: &dyn TabulatedFunction, out: &mut W) -> Result<(), TabulationError> {
    let points = function.points();
    write!(out, "{}", points.len())?;
    for point in &points {
        write!(out, " {} {}", point.x(), point.y())?;
    }
    out.flush()?;
    Ok(())
}

fn next_f64(tokens: &mut SplitWhitespace<'_>) -> Result<f64, TabulationError> {
    let token = tokens
        .next()
        .ok_or_else(|| TabulationError::Decode("truncated stream: missing coordinate".to_owned()))?;
    token
        .parse::<f64>()
        .map_err(|error| TabulationError::Decode(format!("bad coordinate '{}': {}", token, error)))
}

pub fn read_text<R: Read>(input: &mut R) -> Result<ArrayTabulatedFunction, TabulationError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)
        .map_err(|error| TabulationError::Decode(format!("stream is not valid UTF-8: {}", error)))?;
    let mut tokens = text.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| TabulationError::Decode("empty stream".to_owned()))?;
    let count = count_token
        .parse::<i64>()
        .map_err(|error| TabulationError::Decode(format!("bad point count '{}': {}", count_token, error)))?;
    if count < 0 {
        return Err(TabulationError::Decode(format!("negative point count {}", count)));
    }
    trace!("read_text: {} points", count);

    let mut points = Vec::with_capacity((count as usize).min(1024));
    for _ in 0..count {
        let x = next_f64(&mut tokens)?;
        let y = next_f64(&mut tokens)?;
        points.push(FunctionPoint::new(x, y));
    }
    Ok(ArrayTabulatedFunction::from_points(&points)?)
}
