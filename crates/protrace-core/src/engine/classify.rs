use crate::core::models::atom::AtomKind;
use crate::core::models::snapshot::Snapshot;
use nalgebra::Point3;
use tracing::debug;

/// Ephemeral per-frame view of a snapshot's atoms partitioned by role.
///
/// Every source atom lands in exactly one bucket, and each bucket preserves
/// the snapshot's original atom order. Original indices are not retained; the
/// downstream algorithm operates purely on coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedAtoms {
    pub oxygens: Vec<Point3<f64>>,
    pub nitrogens: Vec<Point3<f64>>,
    pub hydrogens: Vec<Point3<f64>>,
    pub others: Vec<Point3<f64>>,
}

impl ClassifiedAtoms {
    /// Total number of classified atoms across all buckets.
    pub fn len(&self) -> usize {
        self.oxygens.len() + self.nitrogens.len() + self.hydrogens.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions a snapshot's atoms into role buckets.
///
/// Pure and infallible: unrecognized labels bucket as "other" instead of
/// failing, so spectator species pass through the analysis untouched.
pub fn classify(snapshot: &Snapshot) -> ClassifiedAtoms {
    let mut atoms = ClassifiedAtoms::default();
    for (label, coord) in snapshot.atoms() {
        match AtomKind::from_label(label) {
            AtomKind::Oxygen => atoms.oxygens.push(*coord),
            AtomKind::Nitrogen => atoms.nitrogens.push(*coord),
            AtomKind::Hydrogen => atoms.hydrogens.push(*coord),
            AtomKind::Other => {
                debug!(label, "unrecognized atom label bucketed as 'other'");
                atoms.others.push(*coord);
            }
        }
    }
    atoms
}
