use std::path::PathBuf;

use clap::Parser;

/// Upload a local file to a dataset repository on the hub.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Options {
    /// Destination repository, e.g. "username/dataset-name"
    #[arg(long)]
    pub repo_id: String,
    /// Local file to upload
    #[arg(long)]
    pub file: PathBuf,
    /// Path in the repository (default: the file's base name)
    #[arg(long)]
    pub path_in_repo: Option<String>,
    /// Access token
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub hf_token: Option<String>,
    /// Hub endpoint URL, for region or mirror substitution
    #[arg(long, env = "HF_ENDPOINT")]
    pub hf_endpoint: Option<String>,
}
