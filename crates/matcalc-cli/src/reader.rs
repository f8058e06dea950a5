//! Input stream parsing.
//!
//! Wire format: `rows_a cols_a`, `rows_b cols_b`, then the elements of the
//! first matrix row by row, then the elements of the second, all
//! whitespace-separated. Line breaks carry no meaning beyond whitespace.

use std::io::BufRead;

use matcalc_core::matrix::{Element, Matrix};
use matcalc_core::product::MatError;

/// Read both operand matrices from a token stream.
///
/// Dimension compatibility is NOT checked here; the product pipeline
/// reports `DimensionMismatch` so that every route into the engine is
/// covered by the same check.
pub fn read_operands<R: BufRead>(input: R) -> Result<(Matrix, Matrix), MatError> {
    let mut tokens = Tokens::new(input);

    let rows_a = tokens.next_dimension("rows of the first matrix")?;
    let cols_a = tokens.next_dimension("columns of the first matrix")?;
    let rows_b = tokens.next_dimension("rows of the second matrix")?;
    let cols_b = tokens.next_dimension("columns of the second matrix")?;

    let a = read_matrix(&mut tokens, rows_a, cols_a, "first")?;
    let b = read_matrix(&mut tokens, rows_b, cols_b, "second")?;

    Ok((a, b))
}

fn read_matrix<R: BufRead>(
    tokens: &mut Tokens<R>,
    rows: usize,
    cols: usize,
    which: &str,
) -> Result<Matrix, MatError> {
    let count = rows.checked_mul(cols).ok_or_else(|| {
        MatError::InvalidInput(format!("{which} matrix is too large ({rows}x{cols})"))
    })?;
    let mut data = Vec::with_capacity(count.min(1 << 20));
    for index in 0..count {
        let value = tokens.next_element(|| {
            format!("element {index} of the {which} matrix ({rows}x{cols} expected)")
        })?;
        data.push(value);
    }
    Matrix::from_vec(rows, cols, data)
}

/// Whitespace-delimited token reader over a buffered input.
struct Tokens<R> {
    input: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<&str>, MatError> {
        loop {
            // Skip whitespace in the current line, advancing by char width
            while let Some(c) = self.line[self.pos..].chars().next() {
                if !c.is_whitespace() {
                    break;
                }
                self.pos += c.len_utf8();
            }
            if self.pos < self.line.len() {
                break;
            }

            self.line.clear();
            self.pos = 0;
            let read = self
                .input
                .read_line(&mut self.line)
                .map_err(|e| MatError::InvalidInput(format!("read error: {e}")))?;
            if read == 0 {
                return Ok(None);
            }
        }

        let start = self.pos;
        let rest = &self.line[start..];
        let len = rest
            .find(char::is_whitespace)
            .unwrap_or(rest.len());
        self.pos = start + len;
        Ok(Some(&self.line[start..start + len]))
    }

    fn next_dimension(&mut self, what: &str) -> Result<usize, MatError> {
        let token = self
            .next_token()?
            .ok_or_else(|| MatError::InvalidInput(format!("missing {what}")))?;
        let value: usize = token
            .parse()
            .map_err(|_| MatError::InvalidInput(format!("invalid {what}: '{token}'")))?;
        if value == 0 {
            return Err(MatError::InvalidInput(format!(
                "{what} must be >= 1, got 0"
            )));
        }
        Ok(value)
    }

    fn next_element(&mut self, context: impl Fn() -> String) -> Result<Element, MatError> {
        let token = self
            .next_token()?
            .ok_or_else(|| MatError::InvalidInput(format!("missing {}", context())))?;
        token
            .parse()
            .map_err(|_| MatError::InvalidInput(format!("invalid {}: '{token}'", context())))
    }
}
