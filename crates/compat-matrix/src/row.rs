//! Matrix rows: normalization of caller-supplied fields and cell rendering.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::MatrixError;
use crate::status::Status;

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex must compile"))
}

/// One data row of the compatibility matrix, in fixed column order.
///
/// The (environment profile, check scope) pair is the row's identity key;
/// no two rows in a valid table share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub env_profile: String,
    pub check_scope: String,
    pub status: Status,
    pub caveat: String,
    pub command_ref: String,
    pub last_validated: String,
}

impl MatrixRow {
    /// Build a row from raw CLI-style field values and a resolved status.
    ///
    /// Fields are trimmed before validation. The date gate is syntactic
    /// only; calendar validity is not checked.
    pub fn build(
        env_profile: &str,
        check_scope: &str,
        caveat: &str,
        command_ref: &str,
        date: &str,
        status: Status,
    ) -> Result<Self, MatrixError> {
        let env_profile = env_profile.trim();
        let check_scope = check_scope.trim();
        let caveat = caveat.trim();
        let command_ref = command_ref.trim();
        let date = date.trim();

        if env_profile.is_empty() {
            return Err(MatrixError::EmptyField("--env-profile"));
        }
        if check_scope.is_empty() {
            return Err(MatrixError::EmptyField("--check-scope"));
        }
        if caveat.is_empty() {
            return Err(MatrixError::EmptyField("--caveat"));
        }
        if command_ref.is_empty() {
            return Err(MatrixError::EmptyField("--command-ref"));
        }
        if !date_re().is_match(date) {
            return Err(MatrixError::BadDateFormat);
        }
        if status == Status::Skip && caveat.chars().count() < 3 {
            return Err(MatrixError::SkipCaveatTooShort);
        }

        Ok(Self {
            env_profile: env_profile.to_string(),
            check_scope: check_scope.to_string(),
            status,
            caveat: caveat.to_string(),
            command_ref: command_ref.to_string(),
            last_validated: date.to_string(),
        })
    }

    /// Build a row from six already-split table cells.
    ///
    /// Backs the matrix reader: only column count and status token are
    /// checked here, so pre-existing rows that would fail the stricter
    /// [`MatrixRow::build`] gates still load.
    pub fn from_cells(cells: Vec<String>, line: usize) -> Result<Self, MatrixError> {
        let expected = crate::matrix::REQUIRED_COLUMNS.len();
        if cells.len() != expected {
            return Err(MatrixError::ColumnCount {
                actual: cells.len(),
                expected,
                line,
            });
        }

        let status = cells[2]
            .parse::<Status>()
            .map_err(|_| MatrixError::RowStatus {
                token: cells[2].clone(),
                line,
            })?;

        let mut cells = cells.into_iter();
        let env_profile = cells.next().unwrap_or_default();
        let check_scope = cells.next().unwrap_or_default();
        let _status_token = cells.next();
        let caveat = cells.next().unwrap_or_default();
        let command_ref = cells.next().unwrap_or_default();
        let last_validated = cells.next().unwrap_or_default();

        Ok(Self {
            env_profile,
            check_scope,
            status,
            caveat,
            command_ref,
            last_validated,
        })
    }

    /// The row's identity key: exact strings, case-sensitive.
    pub fn key(&self) -> (&str, &str) {
        (&self.env_profile, &self.check_scope)
    }

    pub fn cells(&self) -> [&str; 6] {
        [
            &self.env_profile,
            &self.check_scope,
            self.status.as_str(),
            &self.caveat,
            &self.command_ref,
            &self.last_validated,
        ]
    }

    /// Render as a markdown table line: `| c1 | c2 | ... | c6 |`.
    pub fn render(&self) -> String {
        format!("| {} |", self.cells().join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_trims_fields() {
        let row = MatrixRow::build(
            "  linux-x64 ",
            " core",
            "n/a ",
            " suite-v1 ",
            " 2024-01-15 ",
            Status::Pass,
        )
        .expect("trimmed fields should build");
        assert_eq!(row.env_profile, "linux-x64");
        assert_eq!(row.check_scope, "core");
        assert_eq!(row.caveat, "n/a");
        assert_eq!(row.command_ref, "suite-v1");
        assert_eq!(row.last_validated, "2024-01-15");
    }

    #[test]
    fn empty_fields_name_the_flag() {
        let cases = [
            ("  ", "core", "n/a", "ref", "--env-profile"),
            ("env", " ", "n/a", "ref", "--check-scope"),
            ("env", "core", "", "ref", "--caveat"),
            ("env", "core", "n/a", "\t", "--command-ref"),
        ];
        for (env, scope, caveat, command_ref, expected) in cases {
            match MatrixRow::build(env, scope, caveat, command_ref, "2024-01-15", Status::Pass) {
                Err(MatrixError::EmptyField(field)) => assert_eq!(field, expected),
                other => panic!("expected empty-field error for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn date_gate_is_syntactic_only() {
        // Month 13 is fine; the gate is a shape check, not a calendar.
        MatrixRow::build("env", "core", "n/a", "ref", "2024-13-99", Status::Pass)
            .expect("shape-valid date should pass");

        for bad in ["2024-1-15", "24-01-15", "2024/01/15", "2024-01-15x", ""] {
            assert!(matches!(
                MatrixRow::build("env", "core", "n/a", "ref", bad, Status::Pass),
                Err(MatrixError::BadDateFormat)
            ));
        }
    }

    #[test]
    fn skip_requires_three_char_caveat() {
        assert!(matches!(
            MatrixRow::build("env", "core", "no", "ref", "2024-01-15", Status::Skip),
            Err(MatrixError::SkipCaveatTooShort)
        ));
        MatrixRow::build("env", "core", "n/a", "ref", "2024-01-15", Status::Skip)
            .expect("three-char caveat should satisfy SKIP");
        // PASS rows take short caveats.
        MatrixRow::build("env", "core", "ok", "ref", "2024-01-15", Status::Pass)
            .expect("short caveat fine outside SKIP");
    }

    #[test]
    fn from_cells_rejects_wrong_arity() {
        let cells = vec!["a".to_string(), "b".to_string(), "PASS".to_string()];
        match MatrixRow::from_cells(cells, 7) {
            Err(MatrixError::ColumnCount {
                actual,
                expected,
                line,
            }) => {
                assert_eq!(actual, 3);
                assert_eq!(expected, 6);
                assert_eq!(line, 7);
            }
            other => panic!("expected column-count error, got {other:?}"),
        }
    }

    #[test]
    fn from_cells_rejects_bad_status_with_line() {
        let cells: Vec<String> = ["a", "b", "OK", "c", "d", "2024-01-15"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        match MatrixRow::from_cells(cells, 12) {
            Err(MatrixError::RowStatus { token, line }) => {
                assert_eq!(token, "OK");
                assert_eq!(line, 12);
            }
            other => panic!("expected row-status error, got {other:?}"),
        }
    }

    #[test]
    fn render_pads_cells_with_single_spaces() {
        let row = MatrixRow::build(
            "linux-x64",
            "core",
            "n/a",
            "suite-v1",
            "2024-01-15",
            Status::Pass,
        )
        .expect("row should build");
        insta::assert_snapshot!(
            row.render(),
            @"| linux-x64 | core | PASS | n/a | suite-v1 | 2024-01-15 |"
        );
    }
}
