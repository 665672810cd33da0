//! Verify-suite evidence: load and shape-validate the JSON payload.
//!
//! The evidence schema is validated by hand over a `serde_json::Value` so
//! that every violation can cite the offending key or check index instead of
//! a serde path. Nothing is transformed: a valid payload maps one-to-one
//! onto [`Evidence`].

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::MatrixError;
use crate::status::Status;

/// One check record from the evidence `checks` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub id: String,
    pub kind: String,
    pub status: Status,
    pub message: String,
}

/// A validated evidence document.
///
/// The summary's `pass`/`fail`/`skip` entries are validated for presence but
/// not retained; only `required_fail` feeds status derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    pub checks: Vec<Check>,
    pub required_fail: bool,
}

const REQUIRED_SUMMARY_KEYS: [&str; 4] = ["fail", "pass", "required_fail", "skip"];

/// Load and validate a verify-suite evidence file.
pub fn load_evidence(path: &Path) -> Result<Evidence, MatrixError> {
    if !path.is_file() {
        return Err(MatrixError::EvidenceNotFound(path.to_path_buf()));
    }

    let payload = fs::read_to_string(path).map_err(|e| MatrixError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    let value: Value =
        serde_json::from_str(&payload).map_err(|e| MatrixError::MalformedJson(e.to_string()))?;

    let Some(object) = value.as_object() else {
        return Err(MatrixError::Schema(
            "evidence payload must be a JSON object".to_string(),
        ));
    };

    if object.get("format").and_then(Value::as_str) != Some("json") {
        return Err(MatrixError::Schema(
            "evidence payload missing `format: json`".to_string(),
        ));
    }

    let checks = match object.get("checks").and_then(Value::as_array) {
        Some(rows) if !rows.is_empty() => rows,
        _ => {
            return Err(MatrixError::Schema(
                "evidence payload must include non-empty `checks` array".to_string(),
            ));
        }
    };

    let Some(summary) = object.get("summary").and_then(Value::as_object) else {
        return Err(MatrixError::Schema(
            "evidence payload must include `summary` object".to_string(),
        ));
    };

    let missing: Vec<&str> = REQUIRED_SUMMARY_KEYS
        .iter()
        .copied()
        .filter(|key| !summary.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(MatrixError::Schema(format!(
            "evidence summary missing keys: {}",
            missing.join(", ")
        )));
    }

    let Some(required_fail) = summary.get("required_fail").and_then(Value::as_bool) else {
        return Err(MatrixError::Schema(
            "evidence summary `required_fail` must be boolean".to_string(),
        ));
    };

    let mut parsed = Vec::with_capacity(checks.len());
    for (idx, check) in checks.iter().enumerate() {
        parsed.push(parse_check(idx, check)?);
    }

    Ok(Evidence {
        checks: parsed,
        required_fail,
    })
}

fn parse_check(idx: usize, value: &Value) -> Result<Check, MatrixError> {
    let Some(object) = value.as_object() else {
        return Err(MatrixError::Schema(format!(
            "evidence check at index {idx} must be object"
        )));
    };

    let status_token = object.get("status").and_then(Value::as_str).unwrap_or("");
    let status = status_token.parse::<Status>().map_err(|_| {
        MatrixError::Schema(format!(
            "evidence check at index {idx} has invalid status `{status_token}`; allowed: FAIL, PASS, SKIP"
        ))
    })?;

    Ok(Check {
        id: required_string(object, idx, "id")?,
        kind: required_string(object, idx, "kind")?,
        status,
        message: required_string(object, idx, "message")?,
    })
}

fn required_string(
    object: &Map<String, Value>,
    idx: usize,
    key: &str,
) -> Result<String, MatrixError> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|token| !token.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            MatrixError::Schema(format!(
                "evidence check at index {idx} missing non-empty string `{key}`"
            ))
        })
}
