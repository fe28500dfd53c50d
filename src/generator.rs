//! Generation pipeline
//!
//! answers -> merge -> build -> render -> write -> install
//!
//! Every file is rendered before the first one is written, so a failure in
//! rendering leaves the project untouched.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use eslintgen_names::{NameResolver, ResolvedName};

use crate::config::{ConfigError, Defaults, EffectiveDefaults};
use crate::document::{self, EslintConfig, GeneratedConfig, TestConfig};
use crate::emit::{self, EmitError, FileSink, GeneratedFile, MANIFEST_FILE};
use crate::install::{InstallError, InstallPlan, Installer};
use crate::prompt::{collect_answers, PromptError, Prompter};
use crate::settings::{ConfigMerger, RawSettings, Settings};

/// Generation errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("output error: {0}")]
    Emit(#[from] EmitError),

    #[error("install error: {0}")]
    Install(#[from] InstallError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GenerateError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::Config(_) => 2,
            GenerateError::Prompt(PromptError::Aborted) => 130,
            GenerateError::Prompt(_) => 3,
            GenerateError::Emit(_) => 4,
            GenerateError::Install(_) => 5,
            GenerateError::Serialization(_) => 1,
        }
    }
}

/// Result type for generation
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Per-run switches that are not part of the settings.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Options given on the command line.
    pub explicit: RawSettings,

    /// Do not run the installer.
    pub skip_install: bool,
}

/// Settings and derived documents for one run, before any output.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub answers: RawSettings,
    pub settings: Settings,
    pub generated: GeneratedConfig,
}

/// Ask, merge and build.
pub fn plan(
    explicit: &RawSettings,
    prompter: &mut dyn Prompter,
    defaults: &Defaults,
) -> GenerateResult<Plan> {
    let answers = collect_answers(prompter, explicit, defaults)?;
    let settings = ConfigMerger::new(defaults).merge(explicit, &answers);
    tracing::debug!(?settings, "merged settings");

    let resolver = NameResolver::new(defaults.name_stripping);
    let generated = document::build(&settings, &resolver);

    for (pattern, err) in emit::invalid_patterns(&generated.ignore_patterns) {
        tracing::warn!(pattern = %pattern, error = %err, "ignore pattern is not a valid glob");
    }

    Ok(Plan {
        answers,
        settings,
        generated,
    })
}

/// What a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub settings: Settings,
    pub files: Vec<GeneratedFile>,
    pub install: InstallPlan,
    pub installed: bool,
}

impl GenerateReport {
    /// Human-readable summary
    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();
        for file in &self.files {
            lines.push(format!("  create {}", file.path.display()));
        }
        let command = format!("npm {}", self.install.npm_args().join(" "));
        if self.installed {
            lines.push(format!("  ran    {}", command));
        } else {
            lines.push(format!("  skip   {}", command));
        }
        lines.join("\n")
    }
}

/// Run the whole pipeline.
pub fn generate(
    options: &GenerateOptions,
    defaults: &Defaults,
    prompter: &mut dyn Prompter,
    sink: &mut dyn FileSink,
    installer: &mut dyn Installer,
) -> GenerateResult<GenerateReport> {
    let Plan {
        settings,
        generated,
        ..
    } = plan(&options.explicit, prompter, defaults)?;

    let existing_manifest = sink.read(Path::new(MANIFEST_FILE))?;
    let files = emit::render_files(&generated, existing_manifest.as_deref(), &defaults.lint_script)?;
    emit::write_files(sink, &files)?;

    let installed = if options.skip_install {
        tracing::info!("skipping package install");
        false
    } else {
        installer.install(&generated.install)?;
        true
    };

    Ok(GenerateReport {
        settings,
        files,
        install: generated.install,
        installed,
    })
}

/// Everything `explain` reports; nothing is written.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub defaults: EffectiveDefaults,
    pub explicit: RawSettings,
    pub answers: RawSettings,
    pub settings: Settings,
    pub resolved_names: Vec<ResolvedName>,
    pub config: EslintConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_config: Option<TestConfig>,
    pub ignore_patterns: Vec<String>,
    pub install: InstallPlan,
}

impl Explanation {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Merge and resolve without writing or installing.
pub fn explain(
    explicit: &RawSettings,
    defaults: EffectiveDefaults,
    prompter: &mut dyn Prompter,
) -> GenerateResult<Explanation> {
    let Plan {
        answers,
        settings,
        generated,
    } = plan(explicit, prompter, &defaults.defaults)?;

    Ok(Explanation {
        defaults,
        explicit: explicit.clone(),
        answers,
        settings,
        resolved_names: generated.resolved_names,
        config: generated.config,
        test_config: generated.test_config,
        ignore_patterns: generated.ignore_patterns,
        install: generated.install,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{MemorySink, DOTFILE, IGNORE_FILE};
    use crate::install::RecordingInstaller;
    use crate::prompt::ScriptedPrompter;

    #[test]
    fn test_generate_with_defaults() {
        let mut sink = MemorySink::new();
        let mut installer = RecordingInstaller::new();

        let report = generate(
            &GenerateOptions::default(),
            &Defaults::default(),
            &mut ScriptedPrompter::empty(),
            &mut sink,
            &mut installer,
        )
        .unwrap();

        assert!(report.installed);
        assert!(sink.get(DOTFILE).is_some());
        assert!(sink.get("test/.eslintrc").is_some());
        assert!(sink.get(MANIFEST_FILE).is_some());
        assert_eq!(sink.get(IGNORE_FILE), Some("node_modules/\ncoverage/\n"));
        assert_eq!(
            installer.last().unwrap().packages,
            vec!["eslint", "babel-eslint"]
        );
    }

    #[test]
    fn test_skip_install() {
        let mut installer = RecordingInstaller::new();
        let options = GenerateOptions {
            skip_install: true,
            ..Default::default()
        };

        let report = generate(
            &options,
            &Defaults::default(),
            &mut ScriptedPrompter::empty(),
            &mut MemorySink::new(),
            &mut installer,
        )
        .unwrap();

        assert!(!report.installed);
        assert!(installer.plans.is_empty());
        assert!(report.to_human().contains("skip   npm install --save-dev eslint"));
    }

    #[test]
    fn test_invalid_manifest_writes_nothing() {
        let mut sink = MemorySink::new().with_file(MANIFEST_FILE, "{oops");

        let err = generate(
            &GenerateOptions::default(),
            &Defaults::default(),
            &mut ScriptedPrompter::empty(),
            &mut sink,
            &mut RecordingInstaller::new(),
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), 4);
        assert_eq!(sink.files.len(), 1);
    }

    #[test]
    fn test_explain_reports_resolution() {
        let explicit = RawSettings {
            extends: Some("plugin:shopify/esnext".into()),
            ..Default::default()
        };

        let explanation = explain(
            &explicit,
            EffectiveDefaults::builtin(),
            &mut ScriptedPrompter::empty(),
        )
        .unwrap();

        assert_eq!(explanation.config.extends.as_deref(), Some("plugin:shopify/esnext"));
        assert_eq!(
            explanation.resolved_names[0].install_identifier.as_deref(),
            Some("eslint-plugin-shopify")
        );
        assert!(explanation.install.contains("eslint-plugin-shopify"));
        assert!(explanation.to_json().unwrap().contains("\"sources\""));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(GenerateError::Prompt(PromptError::Aborted).exit_code(), 130);
        assert_eq!(
            GenerateError::Config(ConfigError::ValidationError("x".into())).exit_code(),
            2
        );
    }
}
