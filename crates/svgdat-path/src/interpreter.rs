//! Path Command Interpreter
//!
//! Walks `M`/`C` path data and yields vertex and terminator records.

use crate::point::{tokenize, Point};
use crate::{Anomaly, PathError, Record};

/// Drawing command understood by the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `M`: set the anchor point, then read the next command
    MoveTo,
    /// `C`: straight segment encoded as a degenerate cubic curve
    CurveTo,
}

impl Command {
    /// Parse a command token found at `position` in the token stream
    pub fn parse(token: &str, position: usize) -> Result<Self, PathError> {
        match token {
            "M" => Ok(Command::MoveTo),
            "C" => Ok(Command::CurveTo),
            other => Err(PathError::UnknownCommand {
                command: other.to_string(),
                position,
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveTo => "M",
            Command::CurveTo => "C",
        }
    }
}

/// Lazy interpreter over one path-data string
///
/// Yields records in the order the commands are consumed. The first error
/// ends the sequence; later calls to `next` return `None`.
#[derive(Debug)]
pub struct PathInterpreter<'a> {
    tokens: Vec<&'a str>,
    /// Next unread token
    pos: usize,
    /// Active command token and where it was read
    command: &'a str,
    command_pos: usize,
    /// Anchor for the next segment
    last_pt: Option<Point<'a>>,
    anomalies: Vec<Anomaly>,
    finished: bool,
}

impl<'a> PathInterpreter<'a> {
    /// Tokenize `data` and take its first token as the initial command
    pub fn new(data: &'a str) -> Result<Self, PathError> {
        let tokens = tokenize(data);
        let command = *tokens.first().ok_or(PathError::Empty)?;

        tracing::trace!("Interpreting {} path tokens", tokens.len());

        Ok(Self {
            tokens,
            pos: 1,
            command,
            command_pos: 0,
            last_pt: None,
            anomalies: Vec::new(),
            finished: false,
        })
    }

    /// Straightness violations seen so far
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Hand over the collected anomalies
    pub fn into_anomalies(self) -> Vec<Anomaly> {
        self.anomalies
    }

    fn has_more(&self) -> bool {
        self.pos < self.tokens.len()
    }

    fn take(&mut self, expected: &'static str) -> Result<&'a str, PathError> {
        let token = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or(PathError::UnexpectedEnd {
                expected,
                position: self.pos,
            })?;
        self.pos += 1;
        Ok(token)
    }

    fn take_command(&mut self) -> Result<(), PathError> {
        self.command_pos = self.pos;
        self.command = self.take("command")?;
        Ok(())
    }

    /// Run commands until one emits a record or the tokens run out
    fn step(&mut self) -> Result<Option<Record>, PathError> {
        while self.has_more() {
            match Command::parse(self.command, self.command_pos)? {
                Command::MoveTo => {
                    self.last_pt = Some(Point::new(self.take("anchor point")?));
                    self.take_command()?;
                }
                Command::CurveTo => return self.curve_to().map(Some),
            }
        }
        Ok(None)
    }

    fn curve_to(&mut self) -> Result<Record, PathError> {
        let start = self.pos;
        let pt1 = Point::new(self.take("control point")?);

        if pt1.is_close_marker() {
            if self.has_more() {
                self.take_command()?;
            }
            return Ok(Record::Terminator);
        }

        let pt2 = Point::new(self.take("control point")?);
        let pt3 = Point::new(self.take("end point")?);

        if self.last_pt != Some(pt1) || pt2 != pt3 {
            let anomaly = Anomaly {
                at: pt1.to_string(),
                anchor: self.last_pt.map(|p| p.to_string()),
                control: pt2.to_string(),
                end: pt3.to_string(),
                position: start,
            };
            tracing::warn!("{}", anomaly);
            self.anomalies.push(anomaly);
        }

        self.last_pt = Some(pt3);
        Ok(Record::Vertex(pt3.to_vertex_text()))
    }
}

impl Iterator for PathInterpreter<'_> {
    type Item = Result<Record, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.step() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for PathInterpreter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(data: &str) -> Vec<Result<Record, PathError>> {
        PathInterpreter::new(data).unwrap().collect()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("M", 0).unwrap(), Command::MoveTo);
        assert_eq!(Command::parse("C", 3).unwrap(), Command::CurveTo);
        assert_eq!(Command::CurveTo.as_str(), "C");

        match Command::parse("L", 7) {
            Err(PathError::UnknownCommand { command, position }) => {
                assert_eq!(command, "L");
                assert_eq!(position, 7);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_data() {
        assert!(matches!(PathInterpreter::new("   "), Err(PathError::Empty)));
    }

    #[test]
    fn test_straight_segment() {
        let mut interp = PathInterpreter::new("M 0,0 C 0,0 5,5 5,5").unwrap();
        assert_eq!(interp.next().unwrap().unwrap(), Record::Vertex("5,5".into()));
        assert!(interp.next().is_none());
        assert!(interp.anomalies().is_empty());
    }

    #[test]
    fn test_curved_segment_still_emitted() {
        let mut interp = PathInterpreter::new("M 0,0 C 0,0 1,1 5,5").unwrap();
        assert_eq!(interp.next().unwrap().unwrap(), Record::Vertex("5,5".into()));
        assert!(interp.next().is_none());

        let anomalies = interp.anomalies();
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].at, "0,0");
        assert_eq!(anomalies[0].anchor.as_deref(), Some("0,0"));
        assert_eq!(anomalies[0].control, "1,1");
        assert_eq!(anomalies[0].end, "5,5");
        assert_eq!(anomalies[0].position, 3);
    }

    #[test]
    fn test_anchor_mismatch_is_anomaly() {
        let mut interp = PathInterpreter::new("M 0,0 C 1,1 5,5 5,5").unwrap();
        assert_eq!(interp.next().unwrap().unwrap(), Record::Vertex("5,5".into()));
        assert_eq!(interp.anomalies()[0].at, "1,1");
    }

    #[test]
    fn test_anchor_follows_segments() {
        let mut interp =
            PathInterpreter::new("M 0,0 C 0,0 1,1 1,1 1,1 2,2 2,2 2,2 3,3 3,3").unwrap();
        let out: Vec<_> = interp.by_ref().map(Result::unwrap).collect();
        assert_eq!(
            out,
            vec![
                Record::Vertex("1,1".into()),
                Record::Vertex("2,2".into()),
                Record::Vertex("3,3".into()),
            ]
        );
        assert!(interp.anomalies().is_empty());
    }

    #[test]
    fn test_curve_without_anchor() {
        let mut interp = PathInterpreter::new("C 0,0 1,1 1,1").unwrap();
        assert_eq!(interp.next().unwrap().unwrap(), Record::Vertex("1,1".into()));
        assert_eq!(interp.anomalies()[0].anchor, None);
    }

    #[test]
    fn test_close_resumes_command() {
        let out = records("M 0,0 C 1,1 1,1 2,2 Z C 3,3 3,3 4,4");
        let out: Vec<_> = out.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            out,
            vec![
                Record::Vertex("2,2".into()),
                Record::Terminator,
                Record::Vertex("4,4".into()),
            ]
        );
    }

    #[test]
    fn test_close_at_end() {
        let out = records("M 0,0 C 0,0 1,1 1,1 Z");
        assert_eq!(out.len(), 2);
        assert_eq!(*out[1].as_ref().unwrap(), Record::Terminator);
    }

    #[test]
    fn test_close_then_move() {
        let out = records("M 0,0 C 0,0 1,1 1,1 Z M 9,9 C 9,9 8,8 8,8 Z");
        let out: Vec<_> = out.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            out,
            vec![
                Record::Vertex("1,1".into()),
                Record::Terminator,
                Record::Vertex("8,8".into()),
                Record::Terminator,
            ]
        );
    }

    #[test]
    fn test_unknown_initial_command() {
        let mut interp = PathInterpreter::new("L 0,0 1,1").unwrap();
        match interp.next() {
            Some(Err(PathError::UnknownCommand { command, position })) => {
                assert_eq!(command, "L");
                assert_eq!(position, 0);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(interp.next().is_none());
    }

    #[test]
    fn test_unknown_command_after_close() {
        let out = records("M 0,0 C 0,0 1,1 1,1 Z Q 2,2 3,3");
        assert_eq!(out.len(), 3);
        assert!(matches!(
            out[2],
            Err(PathError::UnknownCommand { position: 7, .. })
        ));
    }

    #[test]
    fn test_lone_command_emits_nothing() {
        assert!(records("M").is_empty());
        assert!(records("Q").is_empty());
    }

    #[test]
    fn test_move_without_command() {
        let out = records("M 0,0");
        assert!(matches!(
            out[..],
            [Err(PathError::UnexpectedEnd { expected: "command", position: 2 })]
        ));
    }

    #[test]
    fn test_truncated_segment() {
        let out = records("M 0,0 C 0,0 1,1");
        assert!(matches!(
            out[..],
            [Err(PathError::UnexpectedEnd { expected: "end point", position: 5 })]
        ));
    }

    #[test]
    fn test_ends_after_vertex_run() {
        let out = records("M 0,0 C 0,0 1,1 1,1 1,1 2,2 2,2");
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(Result::is_ok));
    }

    #[test]
    fn test_fused_after_error() {
        let mut interp = PathInterpreter::new("M 0,0 C 0,0").unwrap();
        assert!(interp.next().unwrap().is_err());
        assert!(interp.next().is_none());
        assert!(interp.next().is_none());
    }
}
