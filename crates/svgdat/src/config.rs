//! Converter Configuration

use std::path::PathBuf;

use crate::layer::{Layer, DEFAULT_LAYERS};

/// Command line usage
pub const USAGE: &str = "\
Usage: svgdat [OPTIONS] [LAYER]...

Converts <LAYER>.svg into <LAYER>.dat for each layer.
Without LAYER arguments the standard layer set is converted.

Options:
  -C, --dir <DIR>  Directory holding the layer files [default: .]
  -f, --force      Convert even when the output is up to date
  -h, --help       Print this help";

/// Converter configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `<layer>.svg` and `<layer>.dat`
    pub dir: PathBuf,

    /// Layer names, processed in order
    pub layers: Vec<String>,

    /// Ignore output timestamps
    pub force: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            layers: DEFAULT_LAYERS.iter().map(|s| s.to_string()).collect(),
            force: false,
        }
    }
}

impl Config {
    /// Build a configuration from command line arguments (program name excluded)
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Self::default();
        let mut layers = Vec::new();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "-f" | "--force" => config.force = true,
                "-C" | "--dir" => {
                    let dir = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.dir = PathBuf::from(dir);
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownOption(flag.to_string()));
                }
                _ => layers.push(arg),
            }
        }

        if !layers.is_empty() {
            config.layers = layers;
        }

        Ok(config)
    }

    /// Resolve the configured layer names to file locations
    pub fn layers(&self) -> Vec<Layer> {
        self.layers
            .iter()
            .map(|name| Layer::in_dir(&self.dir, name))
            .collect()
    }
}

/// Command line errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{}", USAGE)]
    HelpRequested,

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown option {0}")]
    UnknownOption(String),
}
