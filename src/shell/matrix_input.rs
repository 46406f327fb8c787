use std::path::Path;

use anyhow::{bail, Context};

use crate::error::InputError;
use crate::evaluator::DecisionMaker;

/// Parses one line of whitespace separated payoffs.
pub fn parse_row(line: &str) -> Result<Vec<f64>, InputError> {
    let row = line
        .split_whitespace()
        .map(|token| {
            let value: f64 = token.parse().map_err(|_| InputError::NotANumber {
                token: token.to_string(),
            })?;
            if !value.is_finite() {
                return Err(InputError::NonFinite {
                    token: token.to_string(),
                });
            }
            Ok(value)
        })
        .collect::<Result<Vec<f64>, InputError>>()?;

    if row.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(row)
}

/// Collects rows one at a time and keeps them rectangular, so the engine
/// only ever sees a well-formed matrix.
#[derive(Debug, Default, Clone)]
pub struct MatrixBuilder {
    rows: Vec<Vec<f64>>,
}

impl MatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of states fixed by the first accepted row.
    pub fn cols(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }

    pub fn push_line(&mut self, line: &str) -> Result<&[f64], InputError> {
        let row = parse_row(line)?;
        self.push_row(row)
    }

    pub fn push_row(&mut self, row: Vec<f64>) -> Result<&[f64], InputError> {
        if row.is_empty() {
            return Err(InputError::Empty);
        }
        if let Some(expected) = self.cols() {
            if row.len() != expected {
                return Err(InputError::RaggedRow {
                    expected,
                    found: row.len(),
                });
            }
        }

        self.rows.push(row);
        Ok(&self.rows[self.rows.len() - 1])
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    pub fn build(self) -> crate::error::Result<DecisionMaker> {
        DecisionMaker::new(self.rows)
    }
}

/// Parses a whole matrix, one alternative per line. Blank lines and lines
/// starting with `#` are skipped.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<f64>>, InputError> {
    let mut builder = MatrixBuilder::new();

    for (number, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        builder
            .push_line(trimmed)
            .map_err(|e| e.at_line(number + 1))?;
    }

    Ok(builder.into_rows())
}

/// Reads and parses a matrix file, failing if it holds no alternatives.
pub async fn read_matrix_file(path: &Path) -> anyhow::Result<Vec<Vec<f64>>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read matrix file {}", path.display()))?;
    let matrix =
        parse_matrix(&text).with_context(|| format!("malformed matrix file {}", path.display()))?;
    if matrix.is_empty() {
        bail!("matrix file {} contains no alternatives", path.display());
    }
    Ok(matrix)
}
