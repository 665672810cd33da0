//! Row upsert: replace-in-place or append by (Environment Profile, Check Scope).

use crate::error::MatrixError;
use crate::row::MatrixRow;

/// What the upsert did, for caller-side reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    Inserted,
    Updated,
}

impl UpsertAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpsertAction::Inserted => "inserted",
            UpsertAction::Updated => "updated",
        }
    }
}

/// Merge `new_row` into `rows` by key, returning a fresh ordered sequence.
///
/// A single existing match is replaced at its original position; no match
/// appends. Two or more existing matches mean the table is already corrupt
/// and the upsert refuses to touch it. The input slice is never mutated.
pub fn upsert_rows(
    rows: &[MatrixRow],
    new_row: MatrixRow,
) -> Result<(Vec<MatrixRow>, UpsertAction), MatrixError> {
    let key = new_row.key();
    let matching: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.key() == key)
        .map(|(idx, _)| idx)
        .collect();

    if matching.len() > 1 {
        return Err(MatrixError::DuplicateKey {
            env_profile: new_row.env_profile,
            check_scope: new_row.check_scope,
        });
    }

    let mut updated: Vec<MatrixRow> = rows.to_vec();
    let action = match matching.first() {
        Some(&idx) => {
            updated[idx] = new_row;
            UpsertAction::Updated
        }
        None => {
            updated.push(new_row);
            UpsertAction::Inserted
        }
    };

    Ok((updated, action))
}
