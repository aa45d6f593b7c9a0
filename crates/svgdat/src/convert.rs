//! Layer Conversion
//!
//! Reads one layer image, interprets its outline and writes the vertex list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use svgdat_path::{interpret, PathError};
use svgdat_svg::{first_path_data, SvgError};

use crate::layer::Layer;

/// What happened to one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Output (re)written
    Converted {
        vertices: usize,
        subpaths: usize,
        anomalies: usize,
    },
    /// Output is no older than the input
    UpToDate,
    /// Input gone but an output exists
    AssumedFresh,
    /// Neither input nor output exist
    MissingInput,
}

/// Convert one layer
///
/// Skips the layer when its output is up to date, unless `force` is set.
/// On error the previous output, if any, is left untouched.
pub fn convert_layer(layer: &Layer, force: bool) -> Result<Outcome, ConvertError> {
    let input = layer.input.display();
    let output = layer.output.display();

    if !layer.input.is_file() {
        if layer.output.is_file() {
            tracing::info!("Input file {} not found - assuming {} is up to date.", input, output);
            return Ok(Outcome::AssumedFresh);
        }
        tracing::warn!("Input file {} does not exist!", input);
        return Ok(Outcome::MissingInput);
    }

    let fresh = layer.is_up_to_date().map_err(|e| ConvertError::io(&layer.output, e))?;
    if fresh && !force {
        tracing::info!("{} is up to date, skipping.", output);
        return Ok(Outcome::UpToDate);
    }

    tracing::info!("Parsing {}...", input);

    let svg = fs::read_to_string(&layer.input).map_err(|e| ConvertError::io(&layer.input, e))?;
    let data = first_path_data(&svg).map_err(|source| ConvertError::Svg {
        path: layer.input.clone(),
        source,
    })?;
    let interp = interpret(&data).map_err(|source| ConvertError::Path {
        path: layer.input.clone(),
        source,
    })?;

    write_atomic(&layer.output, interp.to_payload().as_bytes())?;

    let outcome = Outcome::Converted {
        vertices: interp.vertex_count(),
        subpaths: interp.subpath_count(),
        anomalies: interp.anomalies.len(),
    };
    tracing::debug!("{}: {:?}", layer.name, outcome);

    Ok(outcome)
}

/// Write via a sibling temp file so a failed write never leaves a partial output
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ConvertError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).map_err(|e| ConvertError::io(&tmp, e))?;

    if let Err(e) = fs::rename(&tmp, path) {
        fs::remove_file(&tmp).ok();
        return Err(ConvertError::io(path, e));
    }

    Ok(())
}

/// Tally of a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub skipped: usize,
    pub missing: usize,
    /// Names of layers that failed
    pub failed: Vec<String>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.missing + self.failed.len()
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Converted { .. } => self.converted += 1,
            Outcome::UpToDate | Outcome::AssumedFresh => self.skipped += 1,
            Outcome::MissingInput => self.missing += 1,
        }
    }
}

/// Convert layers in order; a failed layer doesn't stop the ones after it
pub fn convert_all(layers: &[Layer], force: bool) -> Summary {
    let mut summary = Summary::default();

    for layer in layers {
        match convert_layer(layer, force) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                tracing::error!("{}: {}", layer.name, e);
                summary.failed.push(layer.name.clone());
            }
        }
    }

    summary
}

/// Conversion error for one layer
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Svg {
        path: PathBuf,
        #[source]
        source: SvgError,
    },

    #[error("{}: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: PathError,
    },
}

impl ConvertError {
    fn io(path: &Path, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
