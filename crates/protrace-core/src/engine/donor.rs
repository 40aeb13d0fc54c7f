use crate::engine::classify::ClassifiedAtoms;
use crate::engine::config::IndicatorConfig;
use nalgebra::Point3;

/// Hydrogens bonded to an over-coordinated oxygen (hydronium-like).
const OXYGEN_SURPLUS_HYDROGENS: usize = 3;
/// Hydrogens bonded to an over-coordinated nitrogen (ammonium-like).
const NITROGEN_SURPLUS_HYDROGENS: usize = 4;

fn bonded_hydrogen_count(
    heavy: &Point3<f64>,
    hydrogens: &[Point3<f64>],
    cutoff_sq: f64,
) -> usize {
    hydrogens
        .iter()
        .filter(|h| (*h - heavy).norm_squared() < cutoff_sq)
        .count()
}

/// Locates the donor: the heavy atom carrying one more covalently bonded
/// hydrogen than its stable valence allows (exactly 3 for oxygen, exactly 4
/// for nitrogen).
///
/// Oxygen candidates are scanned before nitrogen candidates, and within each
/// species the first qualifying atom in classification order wins. The
/// ordering is the deterministic tie-break for (physically implausible)
/// frames with more than one candidate. Absence is a normal outcome: in a
/// charge-neutral cluster with a single excess proton, most frames have the
/// proton fully resident on one molecule or none at all.
pub fn find_donor(atoms: &ClassifiedAtoms, config: &IndicatorConfig) -> Option<Point3<f64>> {
    atoms
        .oxygens
        .iter()
        .find(|ox| {
            bonded_hydrogen_count(ox, &atoms.hydrogens, config.oh_cutoff_sq)
                == OXYGEN_SURPLUS_HYDROGENS
        })
        .or_else(|| {
            atoms.nitrogens.iter().find(|n| {
                bonded_hydrogen_count(n, &atoms.hydrogens, config.nh_cutoff_sq)
                    == NITROGEN_SURPLUS_HYDROGENS
            })
        })
        .copied()
}

/// Fallback for frames with no donor: a fully dissociated proton.
///
/// Returns the first hydrogen farther than the O-H cutoff from every oxygen,
/// else the first farther than the N-H cutoff from every nitrogen. `None`
/// means every hydrogen is bonded to some heavy atom and the indicator is
/// undetermined for the frame.
pub fn find_lone_hydrogen(
    atoms: &ClassifiedAtoms,
    config: &IndicatorConfig,
) -> Option<Point3<f64>> {
    atoms
        .hydrogens
        .iter()
        .find(|h| {
            atoms
                .oxygens
                .iter()
                .all(|ox| (*h - ox).norm_squared() > config.oh_cutoff_sq)
        })
        .or_else(|| {
            atoms.hydrogens.iter().find(|h| {
                atoms
                    .nitrogens
                    .iter()
                    .all(|n| (*h - n).norm_squared() > config.nh_cutoff_sq)
            })
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IndicatorConfig {
        IndicatorConfig::default()
    }

    /// Three hydrogens at ~0.98 A around a heavy atom at `center`.
    fn hydronium_hydrogens(center: Point3<f64>) -> Vec<Point3<f64>> {
        vec![
            center + nalgebra::Vector3::new(0.98, 0.0, 0.0),
            center + nalgebra::Vector3::new(-0.49, 0.85, 0.0),
            center + nalgebra::Vector3::new(-0.49, -0.85, 0.0),
        ]
    }

    #[test]
    fn oxygen_with_three_bonded_hydrogens_is_the_donor() {
        let center = Point3::new(1.0, 2.0, 3.0);
        let atoms = ClassifiedAtoms {
            oxygens: vec![center],
            hydrogens: hydronium_hydrogens(center),
            ..Default::default()
        };
        assert_eq!(find_donor(&atoms, &config()), Some(center));
    }

    #[test]
    fn oxygen_with_two_bonded_hydrogens_is_not_a_donor() {
        let center = Point3::origin();
        let mut hydrogens = hydronium_hydrogens(center);
        hydrogens[2] = Point3::new(5.0, 5.0, 5.0); // pull one H out of range
        let atoms = ClassifiedAtoms {
            oxygens: vec![center],
            hydrogens,
            ..Default::default()
        };
        assert_eq!(find_donor(&atoms, &config()), None);
    }

    #[test]
    fn oxygen_candidates_win_over_nitrogen_candidates() {
        let ox = Point3::new(0.0, 0.0, 0.0);
        let n = Point3::new(20.0, 0.0, 0.0);
        let mut hydrogens = hydronium_hydrogens(ox);
        // Four hydrogens around the nitrogen as well.
        hydrogens.extend(hydronium_hydrogens(n));
        hydrogens.push(n + nalgebra::Vector3::new(0.0, 0.0, 0.99));
        let atoms = ClassifiedAtoms {
            oxygens: vec![ox],
            nitrogens: vec![n],
            hydrogens,
            ..Default::default()
        };
        assert_eq!(find_donor(&atoms, &config()), Some(ox));
    }

    #[test]
    fn nitrogen_with_four_bonded_hydrogens_qualifies_without_oxygen_candidates() {
        let n = Point3::new(-3.0, 1.0, 0.5);
        let mut hydrogens = hydronium_hydrogens(n);
        hydrogens.push(n + nalgebra::Vector3::new(0.0, 0.0, 0.99));
        let atoms = ClassifiedAtoms {
            nitrogens: vec![n],
            hydrogens,
            ..Default::default()
        };
        assert_eq!(find_donor(&atoms, &config()), Some(n));
    }

    #[test]
    fn first_qualifying_oxygen_in_order_is_returned() {
        let first = Point3::new(0.0, 0.0, 0.0);
        let second = Point3::new(10.0, 0.0, 0.0);
        let mut hydrogens = hydronium_hydrogens(first);
        hydrogens.extend(hydronium_hydrogens(second));
        let atoms = ClassifiedAtoms {
            oxygens: vec![first, second],
            hydrogens,
            ..Default::default()
        };
        assert_eq!(find_donor(&atoms, &config()), Some(first));
    }

    #[test]
    fn lone_hydrogen_must_clear_every_oxygen() {
        let ox = Point3::origin();
        let bonded = Point3::new(0.98, 0.0, 0.0);
        let free = Point3::new(8.0, 8.0, 8.0);
        let atoms = ClassifiedAtoms {
            oxygens: vec![ox],
            hydrogens: vec![bonded, free],
            ..Default::default()
        };
        assert_eq!(find_lone_hydrogen(&atoms, &config()), Some(free));
    }

    #[test]
    fn nitrogen_clearance_is_the_second_chance() {
        // The only hydrogen is bonded to a nitrogen but clear of all oxygens,
        // so the oxygen pass already claims it as lone.
        let n = Point3::origin();
        let h = Point3::new(1.0, 0.0, 0.0);
        let atoms = ClassifiedAtoms {
            nitrogens: vec![n],
            hydrogens: vec![h],
            ..Default::default()
        };
        assert_eq!(find_lone_hydrogen(&atoms, &config()), Some(h));
    }

    #[test]
    fn fully_bonded_hydrogens_yield_no_lone_candidate() {
        let ox = Point3::origin();
        let atoms = ClassifiedAtoms {
            oxygens: vec![ox],
            hydrogens: vec![
                ox + nalgebra::Vector3::new(0.96, 0.0, 0.0),
                ox + nalgebra::Vector3::new(-0.24, 0.93, 0.0),
            ],
            ..Default::default()
        };
        assert_eq!(find_lone_hydrogen(&atoms, &config()), None);
    }
}
