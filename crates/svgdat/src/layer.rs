//! Layer Files
//!
//! Input/output locations for one layer and the freshness check between them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Layers exported by the netlist pipeline, in processing order
pub const DEFAULT_LAYERS: &[&str] = &[
    "metal_vcc",
    "metal_gnd",
    "metal",
    "vias",
    "polysilicon",
    "buried_contacts",
    "diffusion",
    "transistors",
];

/// Input image extension
pub const INPUT_EXTENSION: &str = "svg";

/// Output vertex list extension
pub const OUTPUT_EXTENSION: &str = "dat";

/// One layer to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Layer {
    pub fn new(name: impl Into<String>, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            output: output.into(),
        }
    }

    /// `<dir>/<name>.svg` converted to `<dir>/<name>.dat`
    pub fn in_dir(dir: &Path, name: &str) -> Self {
        Self::new(
            name,
            dir.join(format!("{}.{}", name, INPUT_EXTENSION)),
            dir.join(format!("{}.{}", name, OUTPUT_EXTENSION)),
        )
    }

    /// Whether the output exists and is no older than the input
    pub fn is_up_to_date(&self) -> io::Result<bool> {
        if !self.output.is_file() {
            return Ok(false);
        }

        let input = fs::metadata(&self.input)?.modified()?;
        let output = fs::metadata(&self.output)?.modified()?;
        Ok(input <= output)
    }
}
