// Uploader: owns the authenticated hub session and drives transfers.
// Files go up one at a time; the batch path is a plain sequential loop
// that records an outcome per input instead of failing the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::hub::{HubClient, DEFAULT_ENDPOINT};

#[derive(Debug)]
pub struct Uploader {
    hub: HubClient,
}

/// Per-file outcome of a batch upload. A skipped file carries the reason
/// in `error` and no destination; a failed transfer keeps the destination
/// it was headed for.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub local_path: PathBuf,
    pub path_in_repo: Option<String>,
    pub ok: bool,
    pub error: Option<String>,
}

impl Uploader {
    /// Establish an authenticated session against the hub. The endpoint
    /// falls back to the `HF_ENDPOINT` environment variable and then to
    /// the public hub.
    ///
    /// The whoami call is a best-effort diagnostic: its failure is logged
    /// and ignored. Only a failure of the login call itself aborts the
    /// session.
    pub fn connect(token: String, endpoint: Option<String>) -> Result<Self> {
        let endpoint = endpoint
            .or_else(|| std::env::var("HF_ENDPOINT").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let hub = HubClient::new(endpoint, token)?;

        match hub.whoami() {
            Ok(user) => info!(
                "✅ logged in as: {}",
                user.name.as_deref().unwrap_or("unknown")
            ),
            Err(err) => warn!("⚠️ login check failed, attempting login: {err}"),
        }

        if let Err(err) = hub.login() {
            error!("❌ login failed: {err}");
            return Err(err);
        }
        info!("✅ successfully logged in to {}", hub.endpoint());

        Ok(Uploader { hub })
    }

    /// Upload a single file. The destination defaults to the file's base
    /// name at the repository root. A missing local file is rejected
    /// before any call reaches the hub.
    pub fn upload_one(
        &self,
        repo_id: &str,
        local_path: &Path,
        path_in_repo: Option<&str>,
    ) -> Result<()> {
        if !local_path.exists() {
            return Err(Error::FileNotFound(local_path.to_path_buf()));
        }

        let dest = match path_in_repo {
            Some(dest) => dest.to_string(),
            None => base_name(local_path),
        };
        let size_mib = fs::metadata(local_path)?.len() as f64 / (1024.0 * 1024.0);
        info!(
            "📤 uploading {} ({:.2} MiB) to {}/{}",
            base_name(local_path),
            size_mib,
            repo_id,
            dest
        );

        match self.hub.upload_file(repo_id, local_path, &dest) {
            Ok(()) => {
                info!("✅ successfully uploaded to {}/{}", repo_id, dest);
                Ok(())
            }
            Err(err) => {
                error!("❌ upload failed: {err}");
                Err(err)
            }
        }
    }

    /// Upload a batch of files sequentially. A missing file is recorded
    /// as skipped and does not abort the remaining transfers; the
    /// returned outcomes keep the input order.
    pub fn upload_many(
        &self,
        repo_id: &str,
        local_paths: &[PathBuf],
        destination_prefix: Option<&str>,
    ) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::with_capacity(local_paths.len());
        for local_path in local_paths {
            if !local_path.exists() {
                warn!("⚠️ file not found, skipping: {}", local_path.display());
                outcomes.push(UploadOutcome {
                    local_path: local_path.clone(),
                    path_in_repo: None,
                    ok: false,
                    error: Some(Error::FileNotFound(local_path.clone()).to_string()),
                });
                continue;
            }

            let dest = match destination_prefix {
                Some(prefix) => format!("{}/{}", prefix, base_name(local_path)),
                None => base_name(local_path),
            };
            let outcome = match self.upload_one(repo_id, local_path, Some(&dest)) {
                Ok(()) => UploadOutcome {
                    local_path: local_path.clone(),
                    path_in_repo: Some(dest),
                    ok: true,
                    error: None,
                },
                Err(err) => UploadOutcome {
                    local_path: local_path.clone(),
                    path_in_repo: Some(dest),
                    ok: false,
                    error: Some(err.to_string()),
                },
            };
            outcomes.push(outcome);
        }
        outcomes
    }
}

impl Drop for Uploader {
    // Session teardown is best-effort on every exit path.
    fn drop(&mut self) {
        if let Err(err) = self.hub.logout() {
            debug!("logout failed: {err}");
        }
    }
}

/// Base name of a local path, used as the default destination.
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
