//! eslintgen CLI
//!
//! Entry point for the `eslintgen` command-line tool.

use clap::{ArgAction, Args, Parser, Subcommand};
use eslintgen::config::{ConfigError, EffectiveDefaults, PROJECT_CONFIG_FILE};
use eslintgen::emit::FsSink;
use eslintgen::install::NpmInstaller;
use eslintgen::prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
use eslintgen::settings::{ConfigOutputKind, ListInput, TestFramework};
use eslintgen::{GenerateError, GenerateOptions, NameKind, NameResolver, RawSettings, StripMode};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "eslintgen")]
#[command(about = "Scaffold an ESLint configuration", version)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the ESLint configuration and install its packages
    Generate {
        #[command(flatten)]
        settings: SettingsArgs,

        #[command(flatten)]
        input: InputArgs,

        /// Do not run npm install
        #[arg(long)]
        skip_install: bool,

        /// Show what would be written without writing or installing
        #[arg(long)]
        dry_run: bool,
    },

    /// Print merged settings, resolved names and provenance as JSON
    Explain {
        #[command(flatten)]
        settings: SettingsArgs,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Resolve a config or plugin name to its canonical form and package
    Resolve {
        /// The raw name, e.g. `eslint-config-shopify` or `plugin:react/recommended`
        name: String,

        /// Whether the name is an extends target or a plugin
        #[arg(long, short = 'k', default_value = "config")]
        kind: NameKind,

        /// Prefix stripping mode (anchored, global)
        #[arg(long, default_value = "anchored")]
        strip: StripMode,
    },
}

/// Options that take the place of prompt answers.
#[derive(Args)]
struct SettingsArgs {
    /// Configuration to extend
    #[arg(long)]
    extends: Option<String>,

    /// Environments (comma-separated)
    #[arg(long)]
    envs: Option<String>,

    /// Plugins (comma-separated)
    #[arg(long)]
    plugins: Option<String>,

    /// Use the Babel parser
    #[arg(long, overrides_with = "no_babel")]
    babel: bool,

    /// Do not use the Babel parser
    #[arg(long, overrides_with = "babel")]
    no_babel: bool,

    /// Test framework
    #[arg(long, value_enum)]
    test_framework: Option<TestFramework>,

    /// Directory containing tests
    #[arg(long)]
    test_dir: Option<String>,

    /// Ignore patterns (comma-separated)
    #[arg(long)]
    ignore: Option<String>,

    /// Rules to disable (comma-separated)
    #[arg(long)]
    disable_rules: Option<String>,

    /// Where the configuration goes
    #[arg(long, value_enum)]
    config_type: Option<ConfigOutputKind>,
}

impl SettingsArgs {
    fn into_raw(self) -> RawSettings {
        let babel = match (self.babel, self.no_babel) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        RawSettings {
            extends: self.extends,
            envs: self.envs.map(ListInput::Text),
            plugins: self.plugins.map(ListInput::Text),
            babel,
            test_framework: self.test_framework,
            test_dir: self.test_dir,
            ignore: self.ignore.map(ListInput::Text),
            disable_rules: self.disable_rules.map(ListInput::Text),
            config_type: self.config_type,
            ..Default::default()
        }
    }
}

/// Where answers and defaults come from.
#[derive(Args)]
struct InputArgs {
    /// Project directory (default: current directory)
    #[arg(long, short = 'd', default_value = ".")]
    dest: PathBuf,

    /// Project defaults file (default: <dest>/.eslintgen.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Read answers from a JSON or TOML file instead of prompting
    #[arg(long, conflicts_with = "yes")]
    answers: Option<PathBuf>,

    /// Accept the default for every question
    #[arg(long, short = 'y')]
    yes: bool,
}

impl InputArgs {
    fn load_defaults(&self) -> Result<EffectiveDefaults, GenerateError> {
        let path = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::IoError(format!(
                    "config file not found: {}",
                    path.display()
                ))
                .into());
            }
            Some(path) => path.clone(),
            None => self.dest.join(PROJECT_CONFIG_FILE),
        };
        Ok(EffectiveDefaults::build(Some(path.as_path()))?)
    }

    fn prompter(&self) -> Result<Box<dyn Prompter>, GenerateError> {
        if let Some(path) = &self.answers {
            return Ok(Box::new(ScriptedPrompter::from_file(path)?));
        }
        if self.yes {
            return Ok(Box::new(ScriptedPrompter::empty()));
        }
        if !std::io::stdin().is_terminal() {
            tracing::warn!("stdin is not a terminal, using default answers");
            return Ok(Box::new(ScriptedPrompter::empty()));
        }
        Ok(Box::new(TerminalPrompter::new()))
    }
}

fn main() {
    let cli = Cli::parse();
    eslintgen::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            settings,
            input,
            skip_install,
            dry_run,
        } => run_generate(settings, input, skip_install, dry_run),
        Commands::Explain { settings, input } => run_explain(settings, input),
        Commands::Resolve { name, kind, strip } => run_resolve(&name, kind, strip),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run_generate(
    settings: SettingsArgs,
    input: InputArgs,
    skip_install: bool,
    dry_run: bool,
) -> Result<(), GenerateError> {
    let effective = input.load_defaults()?;
    let mut prompter = input.prompter()?;
    let mut sink = FsSink::new(&input.dest).dry_run(dry_run);
    let mut installer = NpmInstaller::new(&input.dest);

    let options = GenerateOptions {
        explicit: settings.into_raw(),
        skip_install: skip_install || dry_run,
    };

    let report = eslintgen::generate(
        &options,
        &effective.defaults,
        prompter.as_mut(),
        &mut sink,
        &mut installer,
    )?;

    if dry_run {
        println!("Dry run in {}:", display_dest(&input.dest));
    } else {
        println!("Generated ESLint configuration in {}:", display_dest(&input.dest));
    }
    println!("{}", report.to_human());
    Ok(())
}

fn run_explain(settings: SettingsArgs, input: InputArgs) -> Result<(), GenerateError> {
    let effective = input.load_defaults()?;
    let mut prompter = input.prompter()?;

    let explanation = eslintgen::explain(&settings.into_raw(), effective, prompter.as_mut())?;
    println!("{}", explanation.to_json()?);
    Ok(())
}

fn run_resolve(name: &str, kind: NameKind, strip: StripMode) -> Result<(), GenerateError> {
    let resolved = NameResolver::new(strip).resolve(name, kind);
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

fn display_dest(dest: &Path) -> String {
    if dest == Path::new(".") {
        "the current directory".to_string()
    } else {
        dest.display().to_string()
    }
}
