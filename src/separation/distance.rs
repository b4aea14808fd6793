//! Great-circle separation between two catalog positions.

use crate::star::radec_to_uvec;

/// Angular separation in degrees between `(ra1, dec1)` and `(ra2, dec2)`,
/// all in degrees.
///
/// Evaluated as `atan2(|a × b|, a · b)` on the two unit vectors. This is the
/// Vincenty form of the spherical law of cosines: it stays well-conditioned
/// for coincident and antipodal points, so no clamping is needed. Inputs are
/// assumed finite and are not otherwise validated.
#[inline]
pub fn angular_distance_deg(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let a = radec_to_uvec(ra1, dec1);
    let b = radec_to_uvec(ra2, dec2);
    a.cross(&b).norm().atan2(a.dot(&b)).to_degrees()
}
