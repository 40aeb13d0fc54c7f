use crate::core::models::snapshot::Snapshot;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("Unexpected end of file inside a frame (around line {line})")]
    TruncatedFrame { line: usize },
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidAtomCount { value: String },
    #[error("Invalid coordinate (value: '{value}')")]
    InvalidCoordinate { value: String },
    #[error("Atom record requires a label and three coordinates")]
    MissingFields,
}

/// Streaming reader over a concatenated-frame XYZ trajectory.
///
/// Frames are pulled one at a time: each call to [`read_frame`] consumes one
/// `count / title / atom lines` block and yields the parsed [`Snapshot`].
/// Clean end of input (no bytes, or only trailing blank lines, before a count
/// line) terminates the sequence with `Ok(None)`; a malformed or truncated
/// block mid-stream is a hard error rather than a silent end of trajectory.
///
/// [`read_frame`]: XyzTrajectoryReader::read_frame
pub struct XyzTrajectoryReader<R: BufRead> {
    reader: R,
    line: usize,
}

impl<R: BufRead> XyzTrajectoryReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    fn next_line(&mut self, buf: &mut String) -> Result<bool, XyzError> {
        buf.clear();
        let bytes = self.reader.read_line(buf)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.line += 1;
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(true)
    }

    /// Reads the next frame, or `Ok(None)` at clean end of input.
    ///
    /// # Errors
    ///
    /// Returns [`XyzError::Parse`] for a malformed atom count or atom record,
    /// [`XyzError::TruncatedFrame`] if the input ends inside a block, and
    /// [`XyzError::Io`] for underlying read failures.
    pub fn read_frame(&mut self) -> Result<Option<Snapshot>, XyzError> {
        let mut buf = String::new();

        // Skip blank separator lines; end of input here is normal termination.
        loop {
            if !self.next_line(&mut buf)? {
                return Ok(None);
            }
            if !buf.trim().is_empty() {
                break;
            }
        }

        let count: usize = buf.trim().parse().map_err(|_| XyzError::Parse {
            line: self.line,
            kind: XyzParseErrorKind::InvalidAtomCount {
                value: buf.trim().to_string(),
            },
        })?;

        let mut title = String::new();
        if !self.next_line(&mut title)? {
            return Err(XyzError::TruncatedFrame { line: self.line });
        }

        let mut labels = Vec::with_capacity(count);
        let mut coords = Vec::with_capacity(count);
        for _ in 0..count {
            if !self.next_line(&mut buf)? {
                return Err(XyzError::TruncatedFrame { line: self.line });
            }
            let mut fields = buf.split_whitespace();
            let label = fields.next().ok_or(XyzError::Parse {
                line: self.line,
                kind: XyzParseErrorKind::MissingFields,
            })?;
            let mut axis = [0.0f64; 3];
            for slot in axis.iter_mut() {
                let field = fields.next().ok_or(XyzError::Parse {
                    line: self.line,
                    kind: XyzParseErrorKind::MissingFields,
                })?;
                *slot = field.parse().map_err(|_| XyzError::Parse {
                    line: self.line,
                    kind: XyzParseErrorKind::InvalidCoordinate {
                        value: field.to_string(),
                    },
                })?;
            }
            labels.push(label.to_string());
            coords.push(Point3::new(axis[0], axis[1], axis[2]));
        }

        Ok(Some(Snapshot::new(title, labels, coords)))
    }
}

impl<R: BufRead> Iterator for XyzTrajectoryReader<R> {
    type Item = Result<Snapshot, XyzError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_frame().transpose()
    }
}

/// Writer producing the same fixed-width XYZ layout the reader consumes:
/// atom count, title, then one `label x y z` record per atom with
/// six-decimal fixed-precision coordinates.
pub struct XyzTrajectoryWriter<W: Write> {
    writer: W,
}

impl<W: Write> XyzTrajectoryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serializes one frame.
    pub fn write_frame(&mut self, snapshot: &Snapshot) -> Result<(), XyzError> {
        writeln!(self.writer, " {}", snapshot.len())?;
        writeln!(self.writer, "{}", snapshot.title)?;
        for (label, coord) in snapshot.atoms() {
            writeln!(
                self.writer,
                "\t\t{} {:14.6} {:14.6} {:14.6}",
                label, coord.x, coord.y, coord.z
            )?;
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W, XyzError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_FRAMES: &str = " 3\nwater step 1\n\
        \t\tO       0.000000       0.000000       0.000000\n\
        \t\tH       0.960000       0.000000       0.000000\n\
        \t\tH      -0.240000       0.930000       0.000000\n \
        3\nwater step 2\n\
        \t\tO       0.010000       0.000000       0.000000\n\
        \t\tH       0.950000       0.000000       0.000000\n\
        \t\tH      -0.230000       0.930000       0.000000\n";

    #[test]
    fn reads_all_frames_then_signals_end() {
        let mut reader = XyzTrajectoryReader::new(Cursor::new(TWO_FRAMES));

        let first = reader.read_frame().unwrap().unwrap();
        assert_eq!(first.title, "water step 1");
        assert_eq!(first.len(), 3);
        assert_eq!(first.labels[0], "O");
        assert_eq!(first.coords[1], Point3::new(0.96, 0.0, 0.0));

        let second = reader.read_frame().unwrap().unwrap();
        assert_eq!(second.title, "water step 2");

        assert!(reader.read_frame().unwrap().is_none());
        // Exhaustion is stable, not an error.
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn iterator_yields_each_frame_once() {
        let reader = XyzTrajectoryReader::new(Cursor::new(TWO_FRAMES));
        let frames: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn trailing_blank_lines_are_clean_end_of_input() {
        let input = format!("{}\n\n", TWO_FRAMES);
        let mut reader = XyzTrajectoryReader::new(Cursor::new(input));
        assert!(reader.read_frame().unwrap().is_some());
        assert!(reader.read_frame().unwrap().is_some());
        assert!(reader.read_frame().unwrap().is_none());
    }

    #[test]
    fn malformed_count_line_is_a_parse_error() {
        let mut reader = XyzTrajectoryReader::new(Cursor::new("three\ntitle\n"));
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::InvalidAtomCount { .. }
            }
        ));
    }

    #[test]
    fn non_numeric_coordinate_is_a_parse_error() {
        let input = " 1\ntitle\nO 0.0 zero 0.0\n";
        let mut reader = XyzTrajectoryReader::new(Cursor::new(input));
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                kind: XyzParseErrorKind::InvalidCoordinate { .. },
                ..
            }
        ));
    }

    #[test]
    fn truncated_frame_is_an_error_not_end_of_input() {
        let input = " 3\ntitle\nO 0.0 0.0 0.0\n";
        let mut reader = XyzTrajectoryReader::new(Cursor::new(input));
        let err = reader.read_frame().unwrap_err();
        assert!(matches!(err, XyzError::TruncatedFrame { .. }));
    }

    #[test]
    fn round_trip_preserves_six_decimal_coordinates() {
        let mut snapshot = Snapshot::new(
            "round trip",
            vec!["O".to_string(), "H".to_string()],
            vec![
                Point3::new(1.234567, -2.345678, 3.456789),
                Point3::new(-0.000001, 12.5, -7.125),
            ],
        );
        snapshot.augment("p+", Point3::new(0.111111, 0.222222, 0.333333));

        let mut writer = XyzTrajectoryWriter::new(Vec::new());
        writer.write_frame(&snapshot).unwrap();
        let bytes = writer.into_inner().unwrap();

        let mut reader = XyzTrajectoryReader::new(Cursor::new(bytes));
        let rebuilt = reader.read_frame().unwrap().unwrap();
        assert_eq!(rebuilt.title, "round trip");
        assert_eq!(rebuilt.labels, snapshot.labels);
        for (a, b) in rebuilt.coords.iter().zip(snapshot.coords.iter()) {
            assert!((a - b).norm() < 1e-6);
        }
        assert_eq!(
            rebuilt.coords.last().unwrap(),
            &Point3::new(0.111111, 0.222222, 0.333333)
        );
    }

    #[test]
    fn writer_layout_matches_expected_columns() {
        let snapshot = Snapshot::new(
            "layout",
            vec!["O".to_string()],
            vec![Point3::new(1.0, -2.0, 3.5)],
        );
        let mut writer = XyzTrajectoryWriter::new(Vec::new());
        writer.write_frame(&snapshot).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(
            text,
            " 1\nlayout\n\t\tO       1.000000      -2.000000       3.500000\n"
        );
    }
}
