use clap::Parser;

#[derive(Parser)]
#[command(
    name = "compat-matrix",
    about = "Update the canonical compatibility matrix from verify-suite JSON evidence",
    version
)]
pub struct Cli {
    /// Path to compatibility matrix markdown file
    #[arg(long, default_value = ".planning/compatibility/v1.1-matrix.md")]
    pub matrix: String,

    /// Path to verify-suite JSON evidence file
    #[arg(long)]
    pub evidence: String,

    /// Matrix row Environment Profile
    #[arg(long)]
    pub env_profile: String,

    /// Matrix row Check Scope
    #[arg(long)]
    pub check_scope: String,

    /// Matrix row caveat text
    #[arg(long)]
    pub caveat: String,

    /// Matrix row command reference text
    #[arg(long)]
    pub command_ref: String,

    /// Last validated date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Optional explicit status override (validated against evidence)
    #[arg(long)]
    pub status: Option<String>,

    /// Output the outcome as JSON
    #[arg(long)]
    pub json: bool,
}
