use std::io::{
    self,
    Read,
    Write
};

use log::trace;

use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::TabulatedFunction;
use crate::tabulation::tabulation::TabulationError;

// Layout: big-endian i32 point count, then x and y of every point as
// big-endian f64, no padding.

pub fn write_binary<W: Write>(function: &dyn TabulatedFunction, out: &mut W) -> Result<(), TabulationError> {
    let points = function.points();
    let count = i32::try_from(points.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "point count does not fit in 32 bits"))?;
    out.write_all(&count.to_be_bytes())?;
    for point in &points {
        out.write_all(&point.x().to_be_bytes())?;
        out.write_all(&point.y().to_be_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn read_f64<R: Read>(input: &mut R) -> Result<f64, TabulationError> {
    let mut buf = [0u8; 8];
    input.read_exact(&mut buf).map_err(TabulationError::from_read)?;
    Ok(f64::from_be_bytes(buf))
}

pub fn read_binary<R: Read>(input: &mut R) -> Result<ArrayTabulatedFunction, TabulationError> {
    let mut buf = [0u8; 4];
    input.read_exact(&mut buf).map_err(TabulationError::from_read)?;
    let count = i32::from_be_bytes(buf);
    if count < 0 {
        return Err(TabulationError::Decode(format!("negative point count {}", count)));
    }
    let count = count as usize;
    trace!("read_binary: {} points", count);

    let mut points = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let x = read_f64(input)?;
        let y = read_f64(input)?;
        points.push(FunctionPoint::new(x, y));
    }
    Ok(ArrayTabulatedFunction::from_points(&points)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabulated::linkedlisttabulatedfunction::LinkedListTabulatedFunction;
    use crate::tabulated::tabulatedfunction::TabulatedFunctionError;

    #[test]
    fn layout_is_count_then_interleaved_coordinates() {
        let f = ArrayTabulatedFunction::from_values(0.0, 1.0, &[2.0, 3.0]).unwrap();
        let mut bytes = Vec::new();
        write_binary(&f, &mut bytes).unwrap();
        assert_eq!(bytes.len(), 4 + 2 * 16);
        assert_eq!(&bytes[..4], &[0, 0, 0, 2]);
        assert_eq!(&bytes[4..12], &0.0f64.to_be_bytes());
        assert_eq!(&bytes[12..20], &2.0f64.to_be_bytes());
        assert_eq!(&bytes[20..28], &1.0f64.to_be_bytes());
        assert_eq!(&bytes[28..36], &3.0f64.to_be_bytes());
    }

    #[test]
    fn round_trip_from_linked_list() {
        let f = LinkedListTabulatedFunction::from_values(-1.0, 1.0, &[0.1, -7.5, 1e-300, 42.0]).unwrap();
        let mut bytes = Vec::new();
        write_binary(&f, &mut bytes).unwrap();
        let g = read_binary(&mut bytes.as_slice()).unwrap();
        assert!(g == f);
    }

    #[test]
    fn truncated_and_negative_streams_fail() {
        let f = ArrayTabulatedFunction::zeros(0.0, 1.0, 3).unwrap();
        let mut bytes = Vec::new();
        write_binary(&f, &mut bytes).unwrap();
        bytes.truncate(bytes.len() - 3);
        assert!(matches!(read_binary(&mut bytes.as_slice()), Err(TabulationError::Decode(_))));

        let negative = (-1i32).to_be_bytes();
        assert!(matches!(read_binary(&mut negative.as_slice()), Err(TabulationError::Decode(_))));
        assert!(matches!(read_binary(&mut [0u8, 0].as_slice()), Err(TabulationError::Decode(_))));
    }

    #[test]
    fn decoded_points_are_validated() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1i32.to_be_bytes());
        bytes.extend_from_slice(&0.0f64.to_be_bytes());
        bytes.extend_from_slice(&0.0f64.to_be_bytes());
        assert!(matches!(
            read_binary(&mut bytes.as_slice()),
            Err(TabulationError::Tabulated(TabulatedFunctionError::InvalidConstruction(_)))
        ));
    }
}
