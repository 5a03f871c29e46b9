//! `set-token` and `remove-token`.
use anyhow::Result;

use crate::credentials::CredentialStore;
use crate::logging::Logger;
use crate::prompt::Prompter;
use crate::settings::Settings;

pub(crate) const PROMPT_TOKEN: &str = "API Token";

/// Ask for a token and store it.
///
/// An empty answer leaves the stored token untouched.
///
/// # Errors
///
/// Returns an error if the prompt fails or the secret file cannot be written.
pub fn set<P: Prompter + ?Sized>(settings: &Settings, prompter: &P, log: &Logger) -> Result<()> {
    let store = CredentialStore::new(&settings.config_dir);
    store.ensure()?;

    let token = prompter.password(PROMPT_TOKEN)?;
    if token.is_empty() {
        log.debug("empty answer; stored token unchanged");
        return Ok(());
    }

    store.set_token(Some(&token))?;
    log.success("Successfully updated token!");
    Ok(())
}

/// Clear the stored token.
///
/// # Errors
///
/// Returns an error if the secret file cannot be created or written.
pub fn remove(settings: &Settings, log: &Logger) -> Result<()> {
    let store = CredentialStore::new(&settings.config_dir);
    store.set_token(None)?;
    log.debug(&format!("cleared {}", store.secret_path().display()));
    log.success("Removed token!");
    Ok(())
}
