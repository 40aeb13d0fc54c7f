use crate::core::indicator::{normalization_factor, projected_ratio, switching_weight};
use crate::engine::classify::ClassifiedAtoms;
use crate::engine::config::IndicatorConfig;
use crate::engine::donor::{find_donor, find_lone_hydrogen};
use crate::engine::error::IndicatorError;
use nalgebra::Point3;
use tracing::trace;

/// How a frame's indicator coordinate was resolved.
///
/// Every frame resolves through exactly one of these paths; the fourth
/// conceptual outcome (no donor and no dissociated hydrogen) is
/// [`IndicatorError::Undetermined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// No donor anywhere; the indicator is a fully dissociated hydrogen.
    LoneHydrogen,
    /// A donor exists but no acceptor sits within the search radius; no
    /// transfer is in progress and the indicator is the donor itself.
    DonorNoAcceptor,
    /// A donor with nearby acceptors; the indicator is the weighted
    /// interpolation between donor and acceptors.
    DonorTransfer,
}

/// One frame's computed indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub position: Point3<f64>,
    pub path: ResolutionPath,
}

/// Acceptor candidates: every heavy atom within the search radius of the
/// donor, excluding the donor itself via the zero self-distance check.
///
/// The oxygen bound is inclusive and the nitrogen bound exclusive; the
/// asymmetry is kept as-is because the calibrated numerical fixtures were
/// produced with it.
fn acceptor_candidates(
    donor: &Point3<f64>,
    atoms: &ClassifiedAtoms,
    config: &IndicatorConfig,
) -> Vec<Point3<f64>> {
    let mut acceptors = Vec::new();
    for ox in &atoms.oxygens {
        let d_sq = (ox - donor).norm_squared();
        if d_sq > 0.0 && d_sq <= config.acceptor_radius_sq {
            acceptors.push(*ox);
        }
    }
    for n in &atoms.nitrogens {
        let d_sq = (n - donor).norm_squared();
        if d_sq > 0.0 && d_sq < config.acceptor_radius_sq {
            acceptors.push(*n);
        }
    }
    acceptors
}

/// Hydrogens covalently bonded to the donor. The O-H cutoff applies to both
/// donor species; the deployed formula deliberately does not switch to the
/// N-H cutoff for nitrogen donors.
fn bonded_hydrogens(
    donor: &Point3<f64>,
    atoms: &ClassifiedAtoms,
    config: &IndicatorConfig,
) -> Vec<Point3<f64>> {
    atoms
        .hydrogens
        .iter()
        .filter(|h| (*h - donor).norm_squared() < config.oh_cutoff_sq)
        .copied()
        .collect()
}

fn interpolate(donor: Point3<f64>, atoms: &ClassifiedAtoms, config: &IndicatorConfig) -> Indicator {
    let acceptors = acceptor_candidates(&donor, atoms, config);
    if acceptors.is_empty() {
        // No transfer in progress; the charge sits on the donor.
        return Indicator {
            position: donor,
            path: ResolutionPath::DonorNoAcceptor,
        };
    }

    let hydrogens = bonded_hydrogens(&donor, atoms, config);
    let normalization = normalization_factor(&acceptors, &hydrogens, &donor);

    let mut weighted = donor.coords;
    for acceptor in &acceptors {
        for hydrogen in &hydrogens {
            let weight = switching_weight(projected_ratio(acceptor, hydrogen, &donor));
            weighted += weight * acceptor.coords;
        }
    }
    trace!(
        acceptors = acceptors.len(),
        bonded = hydrogens.len(),
        normalization,
        "interpolating indicator"
    );

    Indicator {
        position: Point3::from(weighted / normalization),
        path: ResolutionPath::DonorTransfer,
    }
}

/// Computes the proton-indicator coordinate for one classified frame.
///
/// # Errors
///
/// Returns [`IndicatorError::Undetermined`] when the frame has neither a
/// donor heavy atom nor a dissociated hydrogen to anchor the indicator.
pub fn compute_indicator(
    atoms: &ClassifiedAtoms,
    config: &IndicatorConfig,
) -> Result<Indicator, IndicatorError> {
    match find_donor(atoms, config) {
        Some(donor) => Ok(interpolate(donor, atoms, config)),
        None => find_lone_hydrogen(atoms, config)
            .map(|position| Indicator {
                position,
                path: ResolutionPath::LoneHydrogen,
            })
            .ok_or(IndicatorError::Undetermined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn config() -> IndicatorConfig {
        IndicatorConfig::default()
    }

    fn hydronium(center: Point3<f64>) -> ClassifiedAtoms {
        ClassifiedAtoms {
            oxygens: vec![center],
            hydrogens: vec![
                center + Vector3::new(0.98, 0.0, 0.0),
                center + Vector3::new(-0.49, 0.85, 0.0),
                center + Vector3::new(-0.49, -0.85, 0.0),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn donor_without_acceptors_is_its_own_indicator() {
        let center = Point3::new(2.0, -1.0, 0.5);
        let atoms = hydronium(center);
        let indicator = compute_indicator(&atoms, &config()).unwrap();
        assert_eq!(indicator.position, center);
        assert_eq!(indicator.path, ResolutionPath::DonorNoAcceptor);
    }

    #[test]
    fn acceptors_without_bonded_hydrogens_degenerate_to_the_donor() {
        // A bare oxygen "donor" is impossible physically, so drive the
        // degenerate case directly through the interpolation.
        let donor = Point3::origin();
        let atoms = ClassifiedAtoms {
            oxygens: vec![donor, Point3::new(2.5, 0.0, 0.0)],
            ..Default::default()
        };
        let indicator = interpolate(donor, &atoms, &config());
        assert_eq!(indicator.position, donor);
        assert_eq!(indicator.path, ResolutionPath::DonorTransfer);
    }

    #[test]
    fn acceptor_pulls_the_indicator_along_the_transfer_axis() {
        let donor = Point3::origin();
        let acceptor = Point3::new(2.4, 0.0, 0.0);
        let mut atoms = hydronium(donor);
        atoms.oxygens.push(acceptor);

        let indicator = compute_indicator(&atoms, &config()).unwrap();
        assert_eq!(indicator.path, ResolutionPath::DonorTransfer);
        // The weighted average sits strictly between donor and acceptor.
        assert!(indicator.position.x > 0.0);
        assert!(indicator.position.x < acceptor.x);
        assert!(indicator.position.y.abs() < 1e-9);
    }

    #[test]
    fn indicator_matches_hand_computed_interpolation() {
        let donor = Point3::origin();
        let acceptor = Point3::new(2.4, 0.0, 0.0);
        let hydrogen = Point3::new(0.98, 0.0, 0.0);
        let atoms = ClassifiedAtoms {
            oxygens: vec![donor, acceptor],
            hydrogens: vec![hydrogen],
            ..Default::default()
        };

        let ratio = 0.98 / 2.4;
        let weight = switching_weight(ratio);
        let expected_x = weight * 2.4 / (1.0 + weight);

        let indicator = interpolate(donor, &atoms, &config());
        assert!((indicator.position.x - expected_x).abs() < 1e-12);
    }

    #[test]
    fn oxygen_acceptor_bound_is_inclusive_nitrogen_exclusive() {
        let donor = Point3::origin();
        let cfg = config();
        let on_radius = Point3::new(cfg.acceptor_radius_sq.sqrt(), 0.0, 0.0);

        let mut with_oxygen = hydronium(donor);
        with_oxygen.oxygens.push(on_radius);
        assert_eq!(
            compute_indicator(&with_oxygen, &cfg).unwrap().path,
            ResolutionPath::DonorTransfer
        );

        let mut with_nitrogen = hydronium(donor);
        with_nitrogen.nitrogens.push(on_radius);
        assert_eq!(
            compute_indicator(&with_nitrogen, &cfg).unwrap().path,
            ResolutionPath::DonorNoAcceptor
        );
    }

    #[test]
    fn lone_hydrogen_fallback_resolves_frames_without_a_donor() {
        let ox = Point3::origin();
        let free = Point3::new(6.0, 6.0, 6.0);
        let atoms = ClassifiedAtoms {
            oxygens: vec![ox],
            hydrogens: vec![
                ox + Vector3::new(0.96, 0.0, 0.0),
                ox + Vector3::new(-0.24, 0.93, 0.0),
                free,
            ],
            ..Default::default()
        };
        let indicator = compute_indicator(&atoms, &config()).unwrap();
        assert_eq!(indicator.position, free);
        assert_eq!(indicator.path, ResolutionPath::LoneHydrogen);
    }

    #[test]
    fn neither_donor_nor_lone_hydrogen_is_undetermined() {
        // Plain water: two bonded hydrogens, no surplus, nothing dissociated.
        let ox = Point3::origin();
        let atoms = ClassifiedAtoms {
            oxygens: vec![ox],
            hydrogens: vec![
                ox + Vector3::new(0.96, 0.0, 0.0),
                ox + Vector3::new(-0.24, 0.93, 0.0),
            ],
            ..Default::default()
        };
        assert!(matches!(
            compute_indicator(&atoms, &config()),
            Err(IndicatorError::Undetermined)
        ));
    }
}
