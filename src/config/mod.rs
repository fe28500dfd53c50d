//! Generator defaults
//!
//! Two layers, later wins:
//! 1. Built-in defaults
//! 2. Project file (.eslintgen.toml)
//!
//! Explicit options and prompt answers are merged on top of the result by
//! [`crate::settings::ConfigMerger`].

mod defaults;
mod effective;
mod merge;

pub use defaults::Defaults;
pub use effective::{
    parse_toml, ConfigError, ConfigOrigin, ConfigSource, EffectiveDefaults, PROJECT_CONFIG_FILE,
};
pub use merge::{deep_merge, merge_layers};
