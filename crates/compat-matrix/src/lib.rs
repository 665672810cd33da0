//! # Compat Matrix
//!
//! The compatibility matrix is a single markdown table recording the observed
//! verify-suite outcome per (Environment Profile, Check Scope) pair. This
//! crate keeps that table consistent with machine-produced evidence instead
//! of relying on manual transcription.
//!
//! ## Pipeline
//!
//! ```text
//! load_evidence      ← validate the verify-suite JSON payload
//!     │
//! resolve_status     ← derive PASS/FAIL, cross-check any explicit override
//!     │
//! load_matrix        ← locate the table, parse its data rows
//!     │
//! MatrixRow::build   ← normalize caller-supplied fields into a row
//!     │
//! upsert_rows        ← replace-in-place or append by key
//!     │
//! write_matrix       ← splice the row span back, rewrite the file
//! ```
//!
//! Every stage is a pure validation step except the final write; any failure
//! aborts the run before the matrix file is touched.

pub mod error;
pub mod evidence;
pub mod matrix;
pub mod row;
pub mod status;
pub mod upsert;

pub use error::MatrixError;
pub use evidence::{Check, Evidence, load_evidence};
pub use matrix::{MatrixTable, REQUIRED_COLUMNS, load_matrix, write_matrix};
pub use row::MatrixRow;
pub use status::{Status, resolve_status};
pub use upsert::{UpsertAction, upsert_rows};
