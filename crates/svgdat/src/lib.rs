//! svgdat
//!
//! Converts the polygon outlines of exported chip layer images into plain
//! vertex lists, one `x,y` per line with `-1,-1` closing each polygon.
//!
//! # Example
//! ```rust,no_run
//! use svgdat::{Config, run};
//!
//! let summary = run(&Config::default());
//! assert!(summary.is_success());
//! ```

mod config;
mod convert;
mod layer;

pub use config::{Config, ConfigError, USAGE};
pub use convert::{convert_all, convert_layer, ConvertError, Outcome, Summary};
pub use layer::{Layer, DEFAULT_LAYERS, INPUT_EXTENSION, OUTPUT_EXTENSION};

// Re-export sub-crates for direct use
pub use svgdat_path as path;
pub use svgdat_svg as svg;

/// Converter version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert every configured layer
pub fn run(config: &Config) -> Summary {
    tracing::debug!("svgdat {} in {}", VERSION, config.dir.display());
    convert_all(&config.layers(), config.force)
}
