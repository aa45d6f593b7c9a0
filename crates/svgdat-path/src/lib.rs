//! svgdat Path Interpreter
//!
//! Reduces the `M`/`C` path data of an exported polygon outline to an
//! ordered vertex list. Every `C` command is expected to encode a straight
//! line (first control point on the anchor, second on the end point);
//! segments that don't are reported as anomalies and still emitted as
//! straight lines.
//!
//! # Example
//! ```rust
//! use svgdat_path::convert_path_data;
//!
//! let payload = convert_path_data("M 0,0 C 0,0 10.00,0 10.00,0 Z").unwrap();
//! assert_eq!(payload, "10,0\n-1,-1\n");
//! ```

mod interpreter;
mod point;

use std::fmt::{self, Write};

pub use interpreter::{Command, PathInterpreter};
pub use point::{tokenize, Point, CLOSE_MARKER};

/// Interpret path data into a record list
///
/// Any error discards the records produced so far.
pub fn interpret(data: &str) -> Result<Interpretation, PathError> {
    let mut interp = PathInterpreter::new(data)?;
    let records = interp.by_ref().collect::<Result<Vec<_>, _>>()?;

    Ok(Interpretation {
        records,
        anomalies: interp.into_anomalies(),
    })
}

/// Interpret path data straight to vertex-list text
pub fn convert_path_data(data: &str) -> Result<String, PathError> {
    interpret(data).map(|i| i.to_payload())
}

/// One line of the vertex list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Segment end point, `.00` already stripped
    Vertex(String),
    /// End of one polygon loop
    Terminator,
}

impl Record {
    pub const TERMINATOR: &'static str = "-1,-1";
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Vertex(text) => f.write_str(text),
            Record::Terminator => f.write_str(Self::TERMINATOR),
        }
    }
}

/// A `C` segment whose control points don't sit on its end points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// First control point, the location reported to the operator
    pub at: String,
    /// Anchor the segment started from (`None` before any `M`)
    pub anchor: Option<String>,
    /// Second control point
    pub control: String,
    /// Segment end point
    pub end: String,
    /// Token index of `at`
    pub position: usize,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Curve detected at {}! Please fix and re-export.", self.at)
    }
}

/// Result of interpreting one path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretation {
    pub records: Vec<Record>,
    pub anomalies: Vec<Anomaly>,
}

impl Interpretation {
    /// Newline-terminated records in emission order
    pub fn to_payload(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            // Writing to a String can't fail
            let _ = writeln!(out, "{}", record);
        }
        out
    }

    pub fn vertex_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, Record::Vertex(_)))
            .count()
    }

    pub fn subpath_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r, Record::Terminator))
            .count()
    }
}

/// Path interpretation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Path data is empty")]
    Empty,

    #[error("Unknown command {command}! (token {position})")]
    UnknownCommand { command: String, position: usize },

    #[error("Path data ended at token {position}, expected {expected}")]
    UnexpectedEnd { expected: &'static str, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        assert_eq!(Record::Vertex("12,34".into()).to_string(), "12,34");
        assert_eq!(Record::Terminator.to_string(), "-1,-1");
    }

    #[test]
    fn test_anomaly_display() {
        let anomaly = Anomaly {
            at: "3.50,4".into(),
            anchor: Some("0,0".into()),
            control: "1,1".into(),
            end: "2,2".into(),
            position: 3,
        };
        assert_eq!(
            anomaly.to_string(),
            "Curve detected at 3.50,4! Please fix and re-export."
        );
    }

    #[test]
    fn test_payload_is_newline_terminated() {
        let interp = Interpretation {
            records: vec![Record::Vertex("1,2".into()), Record::Terminator],
            anomalies: Vec::new(),
        };
        assert_eq!(interp.to_payload(), "1,2\n-1,-1\n");
        assert_eq!(Interpretation::default().to_payload(), "");
    }

    #[test]
    fn test_counts() {
        let interp = interpret("M 0,0 C 0,0 1,1 1,1 1,1 2,2 2,2 Z M 5,5 C 5,5 6,6 6,6 Z").unwrap();
        assert_eq!(interp.vertex_count(), 3);
        assert_eq!(interp.subpath_count(), 2);
        assert!(interp.anomalies.is_empty());
    }

    #[test]
    fn test_interpret_discards_partial_output() {
        let err = interpret("M 0,0 C 0,0 1,1 1,1 Z L 2,2").unwrap_err();
        assert!(matches!(err, PathError::UnknownCommand { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = PathError::UnknownCommand { command: "L".into(), position: 0 };
        assert_eq!(err.to_string(), "Unknown command L! (token 0)");

        let err = PathError::UnexpectedEnd { expected: "command", position: 2 };
        assert_eq!(err.to_string(), "Path data ended at token 2, expected command");
    }
}
