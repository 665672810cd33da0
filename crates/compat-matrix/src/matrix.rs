//! Matrix file parsing and rewriting.
//!
//! Exactly one rigidly-shaped table is understood: a header line with the
//! six required column names, a separator line, then contiguous data rows.
//! Only the data-row span is ever rewritten; every other line of the file
//! is reproduced byte-for-byte.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::MatrixError;
use crate::row::MatrixRow;

/// The matrix table's column names, in required order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Environment Profile",
    "Check Scope",
    "Status",
    "Caveat",
    "Command Set Reference",
    "Last Validated",
];

/// A parsed matrix file: the full line buffer plus the table's coordinates.
///
/// `row_start..row_end` is the half-open line span holding the data rows;
/// `rows` preserves display order.
#[derive(Debug, Clone)]
pub struct MatrixTable {
    pub lines: Vec<String>,
    pub header_idx: usize,
    pub separator_idx: usize,
    pub row_start: usize,
    pub row_end: usize,
    pub rows: Vec<MatrixRow>,
}

fn is_row_shaped(stripped: &str) -> bool {
    stripped.len() >= 2 && stripped.starts_with('|') && stripped.ends_with('|')
}

/// Split a table-row line into trimmed cells.
///
/// Removes exactly one leading and one trailing pipe, then splits the
/// remainder on `|`.
pub fn split_cells(line: &str) -> Result<Vec<String>, MatrixError> {
    let stripped = line.trim();
    if !is_row_shaped(stripped) {
        return Err(MatrixError::MalformedRow);
    }
    let inner = &stripped[1..stripped.len() - 1];
    Ok(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

/// Parse a matrix file and locate its table.
pub fn load_matrix(path: &Path) -> Result<MatrixTable, MatrixError> {
    if !path.is_file() {
        return Err(MatrixError::MatrixNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| MatrixError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    if lines.is_empty() {
        return Err(MatrixError::EmptyFile);
    }

    let header_idx = find_header(&lines)?;

    let separator_idx = header_idx + 1;
    let separator_ok = lines
        .get(separator_idx)
        .is_some_and(|line| is_row_shaped(line.trim()));
    if !separator_ok {
        return Err(MatrixError::SeparatorMissing);
    }

    let row_start = separator_idx + 1;
    let mut row_end = row_start;
    let mut rows = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(row_start) {
        if !line.trim().starts_with('|') {
            break;
        }
        let cells = split_cells(line)?;
        rows.push(MatrixRow::from_cells(cells, idx + 1)?);
        row_end = idx + 1;
    }

    if rows.is_empty() {
        return Err(MatrixError::NoDataRows);
    }

    Ok(MatrixTable {
        lines,
        header_idx,
        separator_idx,
        row_start,
        row_end,
        rows,
    })
}

fn find_header(lines: &[String]) -> Result<usize, MatrixError> {
    for (idx, line) in lines.iter().enumerate() {
        let stripped = line.trim();
        if !is_row_shaped(stripped) {
            continue;
        }
        let cells = split_cells(stripped)?;
        if cells == REQUIRED_COLUMNS {
            return Ok(idx);
        }
    }
    Err(MatrixError::HeaderNotFound(REQUIRED_COLUMNS.join(", ")))
}

/// Splice the updated row set over the table's row span and rewrite the file.
///
/// The span may grow or shrink; lines outside it are written back exactly as
/// read. The file is replaced atomically via a sibling temp file.
pub fn write_matrix(
    path: &Path,
    table: &MatrixTable,
    rows: &[MatrixRow],
) -> Result<(), MatrixError> {
    let mut lines = table.lines.clone();
    let rendered = rows.iter().map(MatrixRow::render);
    lines.splice(table.row_start..table.row_end, rendered);

    let mut body = lines.join("\n");
    body.push('\n');
    write_text_atomic(path, &body)
}

fn write_text_atomic(path: &Path, body: &str) -> Result<(), MatrixError> {
    let io_err = |p: &Path, e: &dyn std::fmt::Display| MatrixError::Io {
        path: p.to_path_buf(),
        detail: e.to_string(),
    };

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), MatrixError> {
        let mut file = File::create(&tmp_path).map_err(|e| io_err(&tmp_path, &e))?;
        file.write_all(body.as_bytes())
            .map_err(|e| io_err(&tmp_path, &e))?;
        file.sync_all().map_err(|e| io_err(&tmp_path, &e))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        io_err(path, &e)
    })
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}
