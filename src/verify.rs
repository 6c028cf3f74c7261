use crate::{
    config::Config,
    error::{Error, Result},
    matrix,
};

pub const OPERAND_1: &str = "matrix_1.txt";
pub const OPERAND_2: &str = "matrix_2.txt";
pub const PRODUCT: &str = "result.txt";

/// Recomputes the product for one problem size and compares it against the
/// stored result file.
///
/// The size's directory must hold both operands and the precomputed product.
/// Returns `Ok(false)` when the stored result differs in shape or in any
/// element; load failures and incompatible operand shapes are errors.
pub fn verify(config: &Config, size: usize) -> Result<bool> {
    let dir = config.size_dir(size);

    let a = matrix::read_matrix(&dir.join(OPERAND_1))?;
    let b = matrix::read_matrix(&dir.join(OPERAND_2))?;

    let (lhs_rows, lhs_cols) = a.shape();
    let (rhs_rows, rhs_cols) = b.shape();
    if lhs_cols != rhs_rows {
        return Err(Error::ShapeMismatch {
            lhs_rows,
            lhs_cols,
            rhs_rows,
            rhs_cols,
        });
    }

    let expected = matrix::read_matrix(&dir.join(PRODUCT))?;

    // Matrix equality is shape-aware, so a result file of the wrong shape
    // counts as incorrect rather than a hard error.
    Ok(a * b == expected)
}
