use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Preview the premium gate decision for a unit file.
    Check(CheckArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Unit file, relative to the project root unless absolute.
    pub unit: String,

    /// Requester user id.
    #[arg(long)]
    pub user: String,

    /// Role id held by the requester (repeatable).
    #[arg(long = "role")]
    pub roles: Vec<String>,

    /// Treat the requester as a non-member (no role data).
    #[arg(long, conflicts_with = "roles")]
    pub guest: bool,
}
