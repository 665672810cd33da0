//! Compat matrix CLI: the `compat-matrix` command.
//!
//! One invocation is one transaction: validate evidence, resolve status,
//! parse the matrix, upsert a single row, rewrite the file. Any failure
//! prints `ERROR: <message>` on stderr and exits 1 before the matrix is
//! touched.

mod cli;

use std::path::Path;

use clap::Parser;
use serde_json::json;

use cli::Cli;
use compat_matrix::{
    MatrixError, MatrixRow, Status, UpsertAction, load_evidence, load_matrix, resolve_status,
    upsert_rows, write_matrix,
};

struct Outcome {
    action: UpsertAction,
    row: MatrixRow,
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(outcome) => report(&cli, &outcome),
        Err(error) => {
            eprintln!("ERROR: {error}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome, MatrixError> {
    let explicit = cli
        .status
        .as_deref()
        .map(str::parse::<Status>)
        .transpose()?;

    let evidence = load_evidence(Path::new(&cli.evidence))?;
    let status = resolve_status(&evidence, explicit)?;

    let matrix_path = Path::new(&cli.matrix);
    let table = load_matrix(matrix_path)?;

    let new_row = MatrixRow::build(
        &cli.env_profile,
        &cli.check_scope,
        &cli.caveat,
        &cli.command_ref,
        &cli.date,
        status,
    )?;

    let (rows, action) = upsert_rows(&table.rows, new_row.clone())?;
    write_matrix(matrix_path, &table, &rows)?;

    Ok(Outcome {
        action,
        row: new_row,
    })
}

fn report(cli: &Cli, outcome: &Outcome) {
    eprintln!(
        "OK: {} row for '{}' / '{}' with status {} in {}",
        outcome.action.as_str(),
        outcome.row.env_profile,
        outcome.row.check_scope,
        outcome.row.status,
        cli.matrix,
    );

    if cli.json {
        let payload = json!({
            "action": outcome.action.as_str(),
            "env_profile": outcome.row.env_profile,
            "check_scope": outcome.row.check_scope,
            "status": outcome.row.status.as_str(),
            "caveat": outcome.row.caveat,
            "command_ref": outcome.row.command_ref,
            "last_validated": outcome.row.last_validated,
            "matrix_path": cli.matrix,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    }
}
