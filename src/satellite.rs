use crate::prelude::{GnssType, Prn};

/// A satellite in view, identified by its PRN and the [GnssType]
/// that PRN was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Satellite {
    prn: Prn,
    gnss: GnssType,
}

impl Satellite {
    /// Builds a [Satellite] from a platform reported PRN.
    pub fn from_prn(prn: impl Into<Prn>) -> Self {
        let prn = prn.into();
        Self {
            prn,
            gnss: prn.gnss_type(),
        }
    }

    pub fn prn(&self) -> Prn {
        self.prn
    }

    pub fn gnss(&self) -> GnssType {
        self.gnss
    }
}

impl PartialOrd for Satellite {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Satellites are grouped per [GnssType], then ordered by PRN.
impl Ord for Satellite {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.gnss
            .cmp(&other.gnss)
            .then_with(|| self.prn.cmp(&other.prn))
    }
}

impl std::fmt::Display for Satellite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, ID {}", self.gnss, self.prn)
    }
}

/// Sorts satellites by [GnssType] first, then by PRN.
pub fn sort_by_gnss_then_id(satellites: &mut [Satellite]) {
    satellites.sort();
}
