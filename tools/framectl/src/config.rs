//! framectl configuration
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`FRAMECTL_STRICT`, `FRAMECTL_CHARSET`, ...)
//! 2. File given with `--config` (toml / yaml / json by extension)
//! 3. `framectl.toml` / `framectl.yaml` in the working directory
//! 4. Built-in defaults
//!
//! Environment values are parsed by figment: booleans must be spelled
//! `true`/`false` (`FRAMECTL_STRICT=1` is a type error, not `true`).

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use voltage_codec::{Charset, FieldSpec};

pub const ENV_PREFIX: &str = "FRAMECTL_";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FramectlConfig {
    /// Use the `try_*` codec functions: malformed hex and field overflow fail
    pub strict: bool,
    /// Charset for `legacy` fields when `--charset` is not given
    pub charset: Charset,
    /// Separator between binary groups; `None` joins them directly
    pub binary_separator: Option<String>,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// Named field layouts, usable with `pad --field <name>`
    pub fields: BTreeMap<String, FieldSpec>,
}

impl Default for FramectlConfig {
    fn default() -> Self {
        Self {
            strict: false,
            charset: Charset::Gbk,
            binary_separator: Some(" ".to_string()),
            log_level: "info".to_string(),
            fields: BTreeMap::new(),
        }
    }
}

/// Load configuration from defaults, working-dir files, `explicit` and env
pub fn load_config(explicit: Option<&Path>) -> Result<FramectlConfig> {
    let mut figment = Figment::from(Serialized::defaults(FramectlConfig::default()))
        .merge(Toml::file("framectl.toml"))
        .merge(Yaml::file("framectl.yaml"));

    if let Some(path) = explicit {
        figment = merge_file(figment, path)?;
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| anyhow!("Failed to load framectl configuration: {}", e))
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.exists() {
        bail!("Config file not found: {}", path.display());
    }
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .context("Config file must have an extension")?;

    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => bail!("Unsupported config file format: {}", extension),
    };
    Ok(figment)
}
