// Entrypoint for the CLI application.
// - Keeps `main` small: resolve the token, open a session and upload the
//   one requested file; the session logs itself out when dropped.
// - Exits 1 on a missing token or any login/upload failure.

use std::process;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use hf_upload::{Error, Options, Uploader};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    match run(options) {
        Ok(()) => info!("🎉 upload completed successfully"),
        Err(err) => {
            error!("❌ {err:#}");
            process::exit(1);
        }
    }
}

fn run(options: Options) -> anyhow::Result<()> {
    let token = options.hf_token.ok_or(Error::MissingToken)?;
    let uploader = Uploader::connect(token, options.hf_endpoint)?;

    // indicatif spinner while the blocking transfer is in flight.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(format!("Uploading {}...", options.file.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = uploader
        .upload_one(
            &options.repo_id,
            &options.file,
            options.path_in_repo.as_deref(),
        )
        .with_context(|| format!("uploading {}", options.file.display()));
    spinner.finish_and_clear();
    result
}
