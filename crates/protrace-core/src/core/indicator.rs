use nalgebra::Point3;

/// Quintic Hermite-smoothed step used as the proton-transfer weight.
///
/// Evaluates to 1 for `x < 0`, 0 for `x >= 1`, and the smoothstep polynomial
/// `-6x^5 + 15x^4 - 10x^3 + 1` in between, giving zero first and second
/// derivatives at both endpoints so the indicator moves continuously as
/// bonds break and form.
#[inline]
pub fn switching_weight(x: f64) -> f64 {
    if x >= 1.0 {
        0.0
    } else if x < 0.0 {
        1.0
    } else {
        -6.0 * x.powi(5) + 15.0 * x.powi(4) - 10.0 * x.powi(3) + 1.0
    }
}

/// Signed projection of the hydrogen displacement onto the donor->acceptor
/// axis, normalized by the squared donor-acceptor distance.
///
/// A value of 0 means the hydrogen sits on the donor; 1 means it has reached
/// the acceptor along the transfer axis.
#[inline]
pub fn projected_ratio(
    acceptor: &Point3<f64>,
    hydrogen: &Point3<f64>,
    donor: &Point3<f64>,
) -> f64 {
    let axis = acceptor - donor;
    (hydrogen - donor).dot(&axis) / axis.norm_squared()
}

/// Normalization factor of the indicator interpolation:
/// `1 + sum over acceptors j and bonded hydrogens m of g(P(j, m, donor))`.
pub fn normalization_factor(
    acceptors: &[Point3<f64>],
    hydrogens: &[Point3<f64>],
    donor: &Point3<f64>,
) -> f64 {
    let mut factor = 1.0;
    for acceptor in acceptors {
        for hydrogen in hydrogens {
            factor += switching_weight(projected_ratio(acceptor, hydrogen, donor));
        }
    }
    factor
}
