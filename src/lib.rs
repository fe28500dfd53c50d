//! eslintgen - ESLint configuration scaffolding
//!
//! Merges command-line options, prompt answers and defaults into one
//! settings record, resolves shorthand config and plugin names to npm
//! packages, and writes the resulting `.eslintrc`, `.eslintignore` and
//! `package.json` changes.

pub mod config;
pub mod document;
pub mod emit;
pub mod generator;
pub mod install;
pub mod prompt;
pub mod settings;

pub use config::{Defaults, EffectiveDefaults};
pub use document::{EslintConfig, GeneratedConfig};
pub use eslintgen_names::{NameKind, NameResolver, ResolvedName, StripMode};
pub use generator::{explain, generate, GenerateError, GenerateOptions, GenerateReport};
pub use settings::{ConfigMerger, RawSettings, Settings};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize stderr logging.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` counts `-v` flags.
pub fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("eslintgen={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
