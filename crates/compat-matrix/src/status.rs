//! Row status tokens and evidence-backed status derivation.

use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;
use crate::evidence::Evidence;

/// Outcome recorded in a matrix row's Status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Skip,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Skip => "SKIP",
            Status::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = MatrixError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "PASS" => Ok(Status::Pass),
            "SKIP" => Ok(Status::Skip),
            "FAIL" => Ok(Status::Fail),
            other => Err(MatrixError::InvalidStatus(other.to_string())),
        }
    }
}

/// Resolve the status a row should record.
///
/// The derived status is FAIL when the evidence summary flags a required
/// check failure, PASS otherwise. An explicit PASS or FAIL override must
/// agree with the derivation; SKIP is accepted unconditionally since the
/// evidence cannot speak to why a scope was skipped.
pub fn resolve_status(
    evidence: &Evidence,
    explicit: Option<Status>,
) -> Result<Status, MatrixError> {
    let derived = if evidence.required_fail {
        Status::Fail
    } else {
        Status::Pass
    };

    let Some(explicit) = explicit else {
        return Ok(derived);
    };

    let conflict = matches!(
        (explicit, evidence.required_fail),
        (Status::Pass, true) | (Status::Fail, false)
    );
    if conflict {
        return Err(MatrixError::StatusConflict {
            explicit,
            required_fail: evidence.required_fail,
        });
    }
    Ok(explicit)
}
