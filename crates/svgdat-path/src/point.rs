//! Path Data Tokens
//!
//! Whitespace tokenization and textual coordinate pairs.

use std::fmt;

/// Subpath-close marker, seen where a curve expects its first point
pub const CLOSE_MARKER: &str = "Z";

/// Fractional suffix dropped from emitted coordinates
const ZERO_FRACTION: &str = ".00";

/// Split path data on runs of whitespace, dropping empty fragments
pub fn tokenize(data: &str) -> Vec<&str> {
    data.split_whitespace().collect()
}

/// Coordinate pair as it appears in the path data (`"12.00,34.50"`)
///
/// Points are never parsed into numbers. Two points are the same point
/// only when their text matches exactly, so `"1.0,1"` and `"1.00,1"` differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<'a>(&'a str);

impl<'a> Point<'a> {
    pub fn new(text: &'a str) -> Self {
        Self(text)
    }

    /// Raw token text
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Whether this token is the `Z` close marker rather than a coordinate
    pub fn is_close_marker(&self) -> bool {
        self.0 == CLOSE_MARKER
    }

    /// Text written to the vertex list: every literal `.00` removed
    pub fn to_vertex_text(&self) -> String {
        self.0.replace(ZERO_FRACTION, "")
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
