//! Generator configuration using Figment
//!
//! The generator only needs a handful of class tokens. They are layered in
//! precedence order (later sources override earlier ones):
//! 1. Default values (hardcoded)
//! 2. An optional configuration file (TOML, YAML or JSON, by extension)
//! 3. Environment variables with the `PAIRGEN_` prefix

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PairError, Result};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "PAIRGEN_";

/// Class tokens the generator writes into its markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Class of the inline help span.
    pub help_class: String,
    /// Class always present on date inputs.
    pub datepicker_class: String,
    /// Class of the `<ol>` wrapping a radio group.
    pub radio_list_class: String,
    /// Class of each radio `<label>`.
    pub radio_label_class: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            help_class: "help-inline".into(),
            datepicker_class: "datepicker".into(),
            radio_list_class: "unstyled".into(),
            radio_label_class: "radio".into(),
        }
    }
}

impl GeneratorConfig {
    /// Load from defaults, then `file` if given, then `PAIRGEN_*` variables.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let figment = Self::figment(file)?.merge(Env::prefixed(ENV_PREFIX));
        let config: GeneratorConfig = figment.extract()?;
        debug!(?config, "loaded generator configuration");
        Ok(config)
    }

    /// Defaults plus the optional file, without the environment layer.
    fn figment(file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(GeneratorConfig::default()));
        if let Some(path) = file {
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("toml") => figment.merge(Toml::file_exact(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file_exact(path)),
                Some("json") => figment.merge(Json::file_exact(path)),
                _ => {
                    return Err(PairError::UnsupportedConfigFormat {
                        path: path.to_path_buf(),
                    })
                }
            };
        }
        Ok(figment)
    }
}
