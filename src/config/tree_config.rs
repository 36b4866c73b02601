use std::borrow::Cow;
use std::env;
use std::path::Path;

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, warn};

use crate::ext::BestEffortPathExt;
use crate::path::{DirPath, PathError};

const SCRATCH_DIR_KEY: &str = "scratch_dir";
const COLLATION_KEY: &str = "collation";
const NUMERIC_KEY: &str = "numeric";
const CASE_SENSITIVE_KEY: &str = "case_sensitive";

/// Sibling ordering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationConfig {
    /// Compare embedded digit runs by value.
    pub numeric: bool,
    pub case_sensitive: bool,
}

impl Default for CollationConfig {
    fn default() -> Self {
        Self {
            numeric: true,
            case_sensitive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Files below this directory go to the scratch subtree.
    pub scratch_dir: DirPath,
    pub collation: CollationConfig,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            scratch_dir: platform_temp_dir(),
            collation: CollationConfig::default(),
        }
    }
}

/// The platform temporary directory, or `/tmp` when it cannot be expressed as
/// an absolute path.
fn platform_temp_dir() -> DirPath {
    let temp = env::temp_dir();
    DirPath::parse(&temp.to_string_lossy()).unwrap_or_else(|err| {
        warn!("Unusable temporary directory {}: {}", temp.display(), err);
        DirPath::from_segments(["tmp"])
    })
}

impl TreeConfig {
    pub fn with_scratch_dir(mut self, scratch_dir: &str) -> Result<Self, ConfigError> {
        self.scratch_dir = DirPath::parse(scratch_dir).context(InvalidScratchDirSnafu)?;
        Ok(self)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config file: {}", path.best_effort_path_display());
        let contents = std::fs::read_to_string(path).context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read config file: {} bytes", contents.len());
        contents.as_str().try_into()
    }

    fn parse_collation(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<CollationConfig, ConfigError> {
        let mut collation = CollationConfig::default();
        let Some(section) = top_level.get(&key(COLLATION_KEY)) else {
            return Ok(collation);
        };

        let section = section.as_mapping().context(InvalidValueSnafu {
            key: COLLATION_KEY,
        })?;

        if let Some(numeric) = read_bool(section, NUMERIC_KEY)? {
            collation.numeric = numeric;
        }
        if let Some(case_sensitive) = read_bool(section, CASE_SENSITIVE_KEY)? {
            collation.case_sensitive = case_sensitive;
        }

        for unknown in section.keys().filter(|k| {
            k.as_str()
                .is_none_or(|name| name != NUMERIC_KEY && name != CASE_SENSITIVE_KEY)
        }) {
            debug!("Ignoring unknown collation option: {:?}", unknown);
        }

        Ok(collation)
    }
}

fn key(name: &'static str) -> Yaml<'static> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

fn read_bool(
    mapping: &LinkedHashMap<Yaml, Yaml>,
    name: &'static str,
) -> Result<Option<bool>, ConfigError> {
    match mapping.get(&key(name)) {
        None | Some(Yaml::Value(Scalar::Null)) => Ok(None),
        Some(Yaml::Value(Scalar::Boolean(value))) => Ok(Some(*value)),
        Some(_) => InvalidValueSnafu { key: name }.fail(),
    }
}

impl TryFrom<&str> for TreeConfig {
    type Error = ConfigError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().context(MalformedConfigSnafu)?;
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let scratch_dir = match top_level.get(&key(SCRATCH_DIR_KEY)) {
            None | Some(Yaml::Value(Scalar::Null)) => platform_temp_dir(),
            Some(value) => {
                let raw = value.as_str().context(InvalidValueSnafu {
                    key: SCRATCH_DIR_KEY,
                })?;
                DirPath::parse(raw).context(InvalidScratchDirSnafu)?
            }
        };

        let collation = Self::parse_collation(top_level)?;

        Ok(TreeConfig {
            scratch_dir,
            collation,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Scratch directory is not usable"))]
    InvalidScratchDir { source: PathError },
    #[snafu(display("Config value '{}' has the wrong type", key))]
    InvalidValue { key: String },
}
