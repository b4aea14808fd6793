/// A single catalog entry.
/// Coordinates are in degrees exactly as read from the catalog; no epoch or
/// proper-motion correction is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRecord {
    pub id: i64,
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl StarRecord {
    pub fn new(id: i64, ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            id,
            ra_deg,
            dec_deg,
        }
    }

    /// Unit vector pointing to the star's position on the celestial sphere.
    pub fn uvec(&self) -> nalgebra::Vector3<f64> {
        radec_to_uvec(self.ra_deg, self.dec_deg)
    }
}

/// Unit vector for a right ascension / declination pair given in degrees.
pub fn radec_to_uvec(ra_deg: f64, dec_deg: f64) -> nalgebra::Vector3<f64> {
    // fast cosine, sine at once:
    let (rasin, racos) = ra_deg.to_radians().sin_cos();
    let (decsin, deccos) = dec_deg.to_radians().sin_cos();
    nalgebra::Vector3::new(deccos * racos, deccos * rasin, decsin)
}
