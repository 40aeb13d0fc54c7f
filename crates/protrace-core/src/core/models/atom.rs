/// Label written for the synthetic indicator pseudo-atom appended to each
/// output frame.
pub const INDICATOR_LABEL: &str = "p+";

/// Represents the role of an atom in the proton-transfer analysis.
///
/// Roles are derived from the element label of an XYZ record. Only oxygen,
/// nitrogen, and hydrogen participate in the indicator algorithm; everything
/// else is carried through unchanged as [`AtomKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AtomKind {
    /// Proton-donor/acceptor heavy atom with stable valence 2 (water-like).
    Oxygen,
    /// Proton-donor/acceptor heavy atom with stable valence 3 (ammonia-like).
    Nitrogen,
    /// Potentially transferring proton.
    Hydrogen,
    /// Any other element; spectator for the indicator algorithm.
    #[default]
    Other,
}

impl AtomKind {
    /// Classifies an XYZ element label into an [`AtomKind`].
    ///
    /// Matching is case-insensitive on the trimmed label. The policy for
    /// unrecognized labels is deliberately permissive: they classify as
    /// [`AtomKind::Other`] rather than failing, so mixed clusters containing
    /// spectator species (e.g., counter-ions) can still be processed.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            l if l.eq_ignore_ascii_case("O") => AtomKind::Oxygen,
            l if l.eq_ignore_ascii_case("N") => AtomKind::Nitrogen,
            l if l.eq_ignore_ascii_case("H") => AtomKind::Hydrogen,
            _ => AtomKind::Other,
        }
    }
}
