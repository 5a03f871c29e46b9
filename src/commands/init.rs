//! `init`: scaffold a new project from the template repository.
//!
//! Stages run strictly in order and each one gates the next:
//!
//! 1. probe `git` and `rokit`
//! 2. ask for name, git and client support (plus Luau syntax when relevant)
//! 3. confirm the target path (declining ends the command successfully)
//! 4. refuse an existing target, then clone
//! 5. rewrite the manifest, rename the client entry point, patch the README
//! 6. best-effort: `rokit install`, `.git` reset and fresh repository
//! 7. offer to open the editor
use std::path::Path;

use anyhow::Result;

use crate::error::AxypeError;
use crate::exec::{ExecResult, Executor};
use crate::logging::{Logger, StepStatus};
use crate::project::{ProjectDescriptor, template};
use crate::prompt::Prompter;

/// Version-control executable.
pub const GIT: &str = "git";

/// Package-manager executable.
pub const ROKIT: &str = "rokit";

/// Where to get the package manager.
pub const ROKIT_DOWNLOAD_URL: &str = "https://github.com/rojo-rbx/rokit/releases/latest";

/// Shell command opening the project in the editor.
pub const EDITOR_COMMAND: &str = "code . ./src/server/init.luau";

/// Message of the commit created in the fresh repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

pub(crate) const PROMPT_NAME: &str = "What will the project be named?";
pub(crate) const PROMPT_GIT: &str = "Initialize git repository?";
pub(crate) const PROMPT_CLIENT: &str = "Add client-side support? (src/client)";
pub(crate) const PROMPT_LUAU: &str = "Use Luau syntax for client?";
pub(crate) const PROMPT_CONFIRM: &str = "Are you sure you want to initialize repository at";
pub(crate) const PROMPT_EDITOR: &str = "Open project in VS Code?";

/// How an `init` run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The project was created.
    Created,
    /// The user declined the confirmation; nothing was touched.
    Cancelled,
}

/// Drives the init stages against injected collaborators.
#[derive(Debug)]
pub struct Initializer<'a, P: Prompter + ?Sized> {
    executor: &'a dyn Executor,
    prompter: &'a P,
    log: &'a Logger,
    cwd: &'a Path,
}

impl<'a, P: Prompter + ?Sized> Initializer<'a, P> {
    /// Create an initializer working in `cwd`.
    pub const fn new(
        executor: &'a dyn Executor,
        prompter: &'a P,
        log: &'a Logger,
        cwd: &'a Path,
    ) -> Self {
        Self {
            executor,
            prompter,
            log,
            cwd,
        }
    }

    /// Run every stage.
    ///
    /// # Errors
    ///
    /// Returns [`AxypeError::MissingPrerequisite`], [`AxypeError::InvalidProjectName`],
    /// [`AxypeError::TargetExists`], [`AxypeError::CloneFailed`] or
    /// [`AxypeError::InvalidTemplate`] for the fatal stages, and propagates
    /// prompt and filesystem errors.
    pub fn run(&self) -> Result<InitOutcome> {
        self.check_prerequisites()?;

        let project = self.gather()?;
        if !self.confirm_target(&project)? {
            self.log.info("Cancelled!");
            return Ok(InitOutcome::Cancelled);
        }

        if project.target.exists() {
            return Err(AxypeError::TargetExists(project.target).into());
        }

        self.log.stage("Creating files! Might take some seconds...");
        self.clone_template(&project)?;

        self.log.stage("Finishing up...");
        template::rewrite_manifest(&project.target, &project.name)?;
        if project.use_client_luau {
            template::use_luau_client(&project.target)?;
        }
        if template::patch_readme(&project.target, &project.name)? {
            self.log.debug("patched README heading");
        }

        self.install_dependencies(&project);
        self.reset_version_control(&project);
        self.log.success("Successfully created project!");
        self.log.print_summary();

        self.offer_editor(&project)?;
        Ok(InitOutcome::Created)
    }

    fn check_prerequisites(&self) -> Result<(), AxypeError> {
        if !self.executor.probe(GIT) {
            return Err(AxypeError::MissingPrerequisite {
                tool: "Git".to_string(),
                remedy: "Git is required to use this command.".to_string(),
            });
        }
        if !self.executor.probe(ROKIT) {
            return Err(AxypeError::MissingPrerequisite {
                tool: "Rokit".to_string(),
                remedy: format!("Download it here: {ROKIT_DOWNLOAD_URL}"),
            });
        }
        Ok(())
    }

    fn gather(&self) -> Result<ProjectDescriptor> {
        let name = self.prompter.input(PROMPT_NAME)?;
        let use_git = self.prompter.confirm(PROMPT_GIT, true)?;
        let use_client = self.prompter.confirm(PROMPT_CLIENT, true)?;
        let use_client_luau = use_client && self.prompter.confirm(PROMPT_LUAU, false)?;

        let project =
            ProjectDescriptor::new(&name, self.cwd, use_git, use_client, use_client_luau)?;
        self.log.debug(&format!(
            "project '{}' (git: {}, client: {}, luau: {})",
            project.name, project.use_git, project.use_client, project.use_client_luau
        ));
        Ok(project)
    }

    fn confirm_target(&self, project: &ProjectDescriptor) -> Result<bool> {
        let shown = dunce::simplified(&project.target);
        self.prompter
            .confirm(&format!("{PROMPT_CONFIRM} {}", shown.display()), true)
    }

    fn clone_template(&self, project: &ProjectDescriptor) -> Result<(), AxypeError> {
        let url = project.template_url();
        self.log.stage("Cloning template repository...");
        self.executor
            .run_in(self.cwd, GIT, &["clone", "--", url, &project.name])
            .map_err(|e| AxypeError::CloneFailed {
                url: url.to_string(),
                reason: format!("{e:#}"),
            })?;
        self.log.success("Successfully cloned!");
        Ok(())
    }

    fn install_dependencies(&self, project: &ProjectDescriptor) {
        let result = self
            .executor
            .run_in_unchecked(&project.target, ROKIT, &["install"]);
        if self.best_effort("rokit install", result) {
            self.log.success("Initialized Rokit!");
        }
    }

    fn reset_version_control(&self, project: &ProjectDescriptor) {
        match template::remove_git_metadata(&project.target) {
            Ok(true) => self.log.record_step("remove .git", StepStatus::Ok, None),
            Ok(false) => self
                .log
                .record_step("remove .git", StepStatus::Skipped, Some("not present")),
            Err(e) => {
                let reason = format!("{e:#}");
                self.log.debug(&format!("remove .git: {reason}"));
                self.log
                    .record_step("remove .git", StepStatus::Ignored, Some(&reason));
            }
        }

        if !project.use_git {
            return;
        }
        let target = project.target.as_path();
        let init = self.executor.run_in_unchecked(target, GIT, &["init"]);
        let _ = self.best_effort("git init", init);
        let add = self.executor.run_in_unchecked(target, GIT, &["add", "."]);
        let _ = self.best_effort("git add", add);
        let commit = self.executor.run_in_unchecked(
            target,
            GIT,
            &["commit", "-m", INITIAL_COMMIT_MESSAGE],
        );
        let _ = self.best_effort("git commit", commit);
    }

    fn offer_editor(&self, project: &ProjectDescriptor) -> Result<()> {
        if self.prompter.confirm(PROMPT_EDITOR, false)? {
            let result = self.executor.run_shell_in(&project.target, EDITOR_COMMAND);
            let _ = self.best_effort("open editor", result);
        }
        Ok(())
    }

    /// Record the outcome of a step whose failure is deliberately absorbed.
    /// Returns whether it succeeded.
    fn best_effort(&self, step: &str, result: Result<ExecResult>) -> bool {
        match result {
            Ok(r) if r.success => {
                self.log.record_step(step, StepStatus::Ok, None);
                true
            }
            Ok(r) => {
                let reason = r
                    .code
                    .map_or_else(|| "terminated by signal".to_string(), |c| format!("exit {c}"));
                self.log.debug(&format!("{step}: {reason}: {}", r.stderr.trim()));
                self.log.record_step(step, StepStatus::Ignored, Some(&reason));
                false
            }
            Err(e) => {
                let reason = format!("{e:#}");
                self.log.debug(&format!("{step}: {reason}"));
                self.log.record_step(step, StepStatus::Ignored, Some(&reason));
                false
            }
        }
    }
}

/// Run the init command in `cwd`.
///
/// # Errors
///
/// See [`Initializer::run`].
pub fn run<P: Prompter + ?Sized>(
    executor: &dyn Executor,
    prompter: &P,
    cwd: &Path,
    log: &Logger,
) -> Result<InitOutcome> {
    Initializer::new(executor, prompter, log, cwd).run()
}
