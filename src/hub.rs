// Hub client module: contains a small blocking HTTP client that talks to
// the dataset hub. It is intentionally small and synchronous; the tool
// transfers one file at a time and has no use for an async runtime.

use std::fs::File;
use std::path::Path;

use reqwest::blocking::{multipart, Client, Response};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Public hub endpoint, used when neither `--hf-endpoint` nor the
/// `HF_ENDPOINT` environment variable names a mirror.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Simple hub client that holds a reqwest blocking client, the base URL
/// of the hub instance and the token sent with every call.
///
/// The endpoint is threaded explicitly into each request URL; nothing in
/// the process environment is consulted or mutated after construction.
#[derive(Debug)]
pub struct HubClient {
    client: Client,
    endpoint: String,
    token: String,
}

/// Subset of the whoami response the tool consumes. The hub returns a
/// larger document; only the account name is shown to the user.
#[derive(Deserialize, Debug)]
pub struct Whoami {
    pub name: Option<String>,
}

impl HubClient {
    /// Create a client for the given hub instance. A trailing slash on
    /// the endpoint is tolerated and stripped.
    pub fn new(endpoint: String, token: String) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(HubClient {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Base URL of the hub instance this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Best-effort credential check. Returns the account behind the
    /// token without establishing a session.
    pub fn whoami(&self) -> Result<Whoami> {
        let url = format!("{}/api/whoami-v2", self.endpoint);
        let res = self.client.get(&url).bearer_auth(&self.token).send()?;
        let res = check("whoami", res)?;
        Ok(res.json()?)
    }

    /// Establish a session for the token.
    pub fn login(&self) -> Result<()> {
        let url = format!("{}/api/login", self.endpoint);
        let res = self.client.post(&url).bearer_auth(&self.token).send()?;
        check("login", res)?;
        Ok(())
    }

    /// Upload a local file into a dataset repository as `path_in_repo`,
    /// using multipart/form-data. The part length is declared up front so
    /// the request carries a plain Content-Length instead of a chunked
    /// body.
    pub fn upload_file(&self, repo_id: &str, local_path: &Path, path_in_repo: &str) -> Result<()> {
        let url = format!(
            "{}/api/datasets/{}/upload/{}",
            self.endpoint, repo_id, path_in_repo
        );

        let file = File::open(local_path)?;
        let length = file.metadata()?.len();
        let file_name = local_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path_in_repo.to_string());
        let part = multipart::Part::reader_with_length(file, length)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new().part("file", part);

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .multipart(form)
            .send()?;
        check("upload", res)?;
        Ok(())
    }

    /// Tear down the session established by `login`.
    pub fn logout(&self) -> Result<()> {
        let url = format!("{}/api/logout", self.endpoint);
        let res = self.client.post(&url).bearer_auth(&self.token).send()?;
        check("logout", res)?;
        Ok(())
    }
}

/// Turn a non-2xx response into an `Api` error carrying the server's own
/// description of the failure.
fn check(call: &'static str, res: Response) -> Result<Response> {
    if res.status().is_success() {
        Ok(res)
    } else {
        let status = res.status();
        let body = res.text().unwrap_or_else(|_| "".into());
        Err(Error::Api { call, status, body })
    }
}
