//! `publish`: replace the remote source of a paste.
use std::path::Path;

use anyhow::Result;

use crate::cli::PublishOpts;
use crate::credentials::CredentialStore;
use crate::error::AxypeError;
use crate::logging::Logger;
use crate::publish::{PasteClient, PublishRequest};
use crate::settings::Settings;

/// Run the publish command from `cwd`.
///
/// # Errors
///
/// Returns [`AxypeError::FileNotFound`] or [`AxypeError::ReadError`] before
/// any network traffic, a credential error if the secret file is not
/// accessible, and [`AxypeError::PublishRejected`] when the server does not
/// confirm the update.
pub fn run(opts: &PublishOpts, settings: &Settings, cwd: &Path, log: &Logger) -> Result<()> {
    let request = PublishRequest::load(&opts.name, cwd, &opts.path)?;
    log.debug(&format!(
        "loaded {} ({} bytes)",
        request.source_path.display(),
        request.source.len()
    ));

    let token = CredentialStore::new(&settings.config_dir).get_token()?;
    if token.is_empty() {
        log.debug("no API token stored; sending an empty credential");
    }

    log.stage("Publishing source...");
    let client = PasteClient::new(&settings.api_url);
    log.debug(&format!("POST {}", client.endpoint()));

    match client.set_source(&request, &token) {
        Ok(()) => {
            log.success(&format!(
                "Successfully updated source of {}!",
                request.paste_name
            ));
            Ok(())
        }
        Err(err) => {
            if let AxypeError::PublishRejected { body, .. } = &err
                && !body.is_empty()
            {
                log.warn(body);
            }
            Err(err.into())
        }
    }
}
