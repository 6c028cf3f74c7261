use std::{
    fs,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use nalgebra as na;

use crate::error::{Error, Result};

pub type Elem = i64;
pub type Matrix = na::DMatrix<Elem>;

/// Reads a matrix from the plain-text exchange format: a `<rows> <cols>`
/// header line followed by one line of whitespace-separated integers per row.
///
/// The declared shape is parsed but not trusted; the data lines determine the
/// actual shape. All data rows must have the same length.
pub fn read_matrix(path: &Path) -> Result<Matrix> {
    let file = fs::File::open(path).map_err(|e| Error::io(path, e))?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line.map_err(|e| Error::io(path, e))?,
        None => {
            return Err(Error::format_at(
                path,
                1,
                "empty file, expected a `<rows> <cols>` header",
            ))
        }
    };

    let mut fields = header.split_whitespace().map(str::parse::<usize>);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(_rows)), Some(Ok(_cols)), None) => {}
        _ => {
            return Err(Error::format_at(
                path,
                1,
                format!("malformed header {header:?}, expected `<rows> <cols>`"),
            ))
        }
    }

    let mut data: Vec<Elem> = Vec::new();
    let mut nrows = 0;
    let mut width = None;

    for (i, line) in lines.enumerate() {
        let lineno = i + 2;
        let line = line.map_err(|e| Error::io(path, e))?;

        let mut row_len = 0;
        for tok in line.split_whitespace() {
            let value = tok
                .parse::<Elem>()
                .map_err(|_| Error::format_at(path, lineno, format!("bad integer {tok:?}")))?;
            data.push(value);
            row_len += 1;
        }

        match width {
            None => width = Some(row_len),
            Some(w) if w != row_len => {
                return Err(Error::format_at(
                    path,
                    lineno,
                    format!("row has {row_len} values, previous rows have {w}"),
                ))
            }
            Some(_) => {}
        }
        nrows += 1;
    }

    let ncols = width.unwrap_or(0);
    Ok(Matrix::from_row_iterator(nrows, ncols, data))
}

/// Writes a matrix in the same format `read_matrix` accepts.
pub fn write_matrix(path: &Path, matrix: &Matrix) -> Result<()> {
    write_matrix_inner(path, matrix).map_err(|e| Error::io(path, e))
}

fn write_matrix_inner(path: &Path, matrix: &Matrix) -> io::Result<()> {
    let mut file = BufWriter::new(fs::File::create(path)?);

    writeln!(file, "{} {}", matrix.nrows(), matrix.ncols())?;
    for row in matrix.row_iter() {
        let values: Vec<String> = row.iter().map(Elem::to_string).collect();
        writeln!(file, "{}", values.join(" "))?;
    }

    file.flush()
}
