// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to drive a single upload.
//
// Module responsibilities:
// - `hub`: Encapsulates the blocking HTTP interactions with the dataset
//   hub (whoami, login, upload, logout).
// - `uploader`: Session lifecycle plus the single-file and batch upload
//   flows built on top of `hub`.
// - `options`: Command-line surface and its environment fallbacks.
// - `error`: The crate-wide error type.
//
// Keeping this separation makes it easier to test the upload logic
// against a stand-in hub without going through the binary.
pub mod error;
pub mod hub;
pub mod options;
pub mod uploader;

pub use error::{Error, Result};
pub use hub::{HubClient, Whoami, DEFAULT_ENDPOINT};
pub use options::Options;
pub use uploader::{UploadOutcome, Uploader};
