//! Error types for compatibility matrix operations.

use std::path::PathBuf;

use crate::status::Status;

/// Errors arising from evidence validation, matrix parsing, or row upsert.
///
/// All variants are fatal for the invocation: the matrix file is only ever
/// written after every validation stage has succeeded.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// The evidence path does not point at a regular file.
    #[error("evidence file does not exist: {}", .0.display())]
    EvidenceNotFound(PathBuf),

    /// The evidence file content is not parseable JSON.
    #[error("evidence is not valid JSON: {0}")]
    MalformedJson(String),

    /// The evidence parsed but violates the required shape.
    #[error("{0}")]
    Schema(String),

    /// An explicit status override contradicts the evidence summary.
    #[error("explicit status {explicit} contradicts evidence summary required_fail={required_fail}")]
    StatusConflict {
        explicit: Status,
        required_fail: bool,
    },

    /// The matrix path does not point at a regular file.
    #[error("matrix file does not exist: {}", .0.display())]
    MatrixNotFound(PathBuf),

    /// The matrix file has zero lines.
    #[error("matrix file is empty")]
    EmptyFile,

    /// A line expected to be a table row lacks leading/trailing pipes.
    #[error("malformed table row: expected leading and trailing `|`")]
    MalformedRow,

    /// No line matched the six required column names.
    #[error("matrix table header not found with required columns: {0}")]
    HeaderNotFound(String),

    /// The line after the header is absent or not table-row-shaped.
    #[error("matrix table separator row is missing or malformed")]
    SeparatorMissing,

    /// A data row split into the wrong number of cells.
    #[error("matrix row has {actual} cells, expected {expected} (line {line})")]
    ColumnCount {
        actual: usize,
        expected: usize,
        line: usize,
    },

    /// A data row carries a status outside PASS/SKIP/FAIL.
    #[error("matrix row has invalid status `{token}` at line {line}; allowed: FAIL, PASS, SKIP")]
    RowStatus { token: String, line: usize },

    /// A status token outside PASS/SKIP/FAIL was supplied.
    #[error("invalid status `{0}`; allowed: FAIL, PASS, SKIP")]
    InvalidStatus(String),

    /// The table exists but holds no data rows.
    #[error("matrix table has no data rows")]
    NoDataRows,

    /// A required row field is empty after trimming.
    #[error("`{0}` must be non-empty")]
    EmptyField(&'static str),

    /// The supplied date does not match YYYY-MM-DD.
    #[error("`--date` must match YYYY-MM-DD")]
    BadDateFormat,

    /// SKIP rows must explain themselves.
    #[error("SKIP status requires explicit caveat reason text")]
    SkipCaveatTooShort,

    /// The matrix already holds two rows with the target key.
    #[error(
        "matrix contains duplicate row keys for Environment Profile + Check Scope: {env_profile} | {check_scope}"
    )]
    DuplicateKey {
        env_profile: String,
        check_scope: String,
    },

    /// Filesystem read/write failure.
    #[error("I/O failure on {path}: {detail}")]
    Io { path: PathBuf, detail: String },
}
