//! Project descriptor built from the init answers.
pub mod template;

use std::path::{Path, PathBuf};

use crate::error::AxypeError;

/// Template cloned when client-side scaffolding is requested.
pub const CLIENT_TEMPLATE_URL: &str = "https://github.com/axype/paste-template.git";

/// Template cloned for server-only projects.
pub const SERVER_TEMPLATE_URL: &str = "https://github.com/axype/paste-template-noclient.git";

/// Strip every character outside `[A-Za-z0-9-]` and trim the result.
///
/// # Examples
///
/// ```
/// use axype_cli::project::sanitize_name;
///
/// assert_eq!(sanitize_name(" my cool_project! "), "mycoolproject");
/// assert_eq!(sanitize_name("paste-42"), "paste-42");
/// ```
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Everything init needs to know about the project being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Sanitized project name; also the directory name.
    pub name: String,
    /// Absolute directory the template is cloned into.
    pub target: PathBuf,
    /// Re-initialise a git repository after cloning.
    pub use_git: bool,
    /// Clone the template with client-side scaffolding.
    pub use_client: bool,
    /// Rename the client entry point to the `.luau` extension.
    pub use_client_luau: bool,
}

impl ProjectDescriptor {
    /// Build a descriptor rooted in `cwd` from raw answers.
    ///
    /// `use_client_luau` is ignored unless `use_client` is set.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::InvalidProjectName`] when the name sanitizes to
    /// an empty string.
    pub fn new(
        raw_name: &str,
        cwd: &Path,
        use_git: bool,
        use_client: bool,
        use_client_luau: bool,
    ) -> Result<Self, AxypeError> {
        let name = sanitize_name(raw_name);
        if name.is_empty() {
            return Err(AxypeError::InvalidProjectName(raw_name.to_string()));
        }
        Ok(Self {
            target: cwd.join(&name),
            name,
            use_git,
            use_client,
            use_client_luau: use_client && use_client_luau,
        })
    }

    /// Repository URL to clone for this project.
    #[must_use]
    pub const fn template_url(&self) -> &'static str {
        if self.use_client {
            CLIENT_TEMPLATE_URL
        } else {
            SERVER_TEMPLATE_URL
        }
    }
}
