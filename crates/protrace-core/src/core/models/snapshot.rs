use nalgebra::Point3;

/// Represents one trajectory frame: a title plus an ordered sequence of
/// labeled atom coordinates.
///
/// Labels and coordinates are parallel sequences with index correspondence;
/// the XYZ reader guarantees equal lengths on construction. A snapshot is
/// immutable after creation except for [`Snapshot::augment`], which appends
/// the computed indicator as one synthetic pseudo-atom before the frame is
/// written back out.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// The comment/title line of the frame.
    pub title: String,
    /// Element labels, in file order.
    pub labels: Vec<String>,
    /// Coordinates in Angstroms, in file order.
    pub coords: Vec<Point3<f64>>,
}

impl Snapshot {
    /// Creates a snapshot from parallel label and coordinate sequences.
    ///
    /// # Panics
    ///
    /// Panics if the sequences have different lengths; upstream readers are
    /// expected to reject such records before construction.
    pub fn new(title: impl Into<String>, labels: Vec<String>, coords: Vec<Point3<f64>>) -> Self {
        assert_eq!(
            labels.len(),
            coords.len(),
            "snapshot labels and coordinates must be index-aligned"
        );
        Self {
            title: title.into(),
            labels,
            coords,
        }
    }

    /// Number of atoms in the frame.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if the frame contains no atoms.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Iterates over `(label, coordinate)` pairs in file order.
    pub fn atoms(&self) -> impl Iterator<Item = (&str, &Point3<f64>)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.coords.iter())
    }

    /// Appends one synthetic atom to the frame.
    pub fn augment(&mut self, label: &str, coord: Point3<f64>) {
        self.labels.push(label.to_string());
        self.coords.push(coord);
    }
}
