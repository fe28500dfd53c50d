//! Package installation
//!
//! The generator only decides *what* to install; an [`Installer`] decides how.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Command;

/// Packages to add to the project, in install order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallPlan {
    /// Package names; each appears once, at its first position.
    pub packages: Vec<String>,

    /// Save as development dependencies.
    pub save_dev: bool,
}

impl Default for InstallPlan {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            save_dev: true,
        }
    }
}

impl InstallPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a package unless it is already planned.
    pub fn push(&mut self, package: impl Into<String>) {
        let package = package.into();
        if !self.packages.contains(&package) {
            self.packages.push(package);
        }
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p == package)
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Arguments for `npm`.
    pub fn npm_args(&self) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        if self.save_dev {
            args.push("--save-dev".to_string());
        }
        args.extend(self.packages.iter().cloned());
        args
    }
}

/// Installation errors
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: String },
}

/// Sink for an [`InstallPlan`].
pub trait Installer {
    fn install(&mut self, plan: &InstallPlan) -> Result<(), InstallError>;
}

/// Runs `npm install --save-dev ...` in the project directory.
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
    working_dir: PathBuf,
}

impl NpmInstaller {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: "npm".to_string(),
            working_dir: working_dir.into(),
        }
    }

    /// Use a different npm-compatible client.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Installer for NpmInstaller {
    fn install(&mut self, plan: &InstallPlan) -> Result<(), InstallError> {
        if plan.is_empty() {
            return Ok(());
        }

        let args = plan.npm_args();
        tracing::info!(program = %self.program, args = %args.join(" "), "installing packages");

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.working_dir)
            .status()
            .map_err(|source| InstallError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(InstallError::Failed {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Keeps every plan it receives instead of installing.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    pub plans: Vec<InstallPlan>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent plan.
    pub fn last(&self) -> Option<&InstallPlan> {
        self.plans.last()
    }
}

impl Installer for RecordingInstaller {
    fn install(&mut self, plan: &InstallPlan) -> Result<(), InstallError> {
        self.plans.push(plan.clone());
        Ok(())
    }
}
