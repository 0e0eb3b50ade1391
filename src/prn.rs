//! PRN to constellation identification
use std::ops::RangeInclusive;

use crate::prelude::GnssType;

/// PRNs reported for GLONASS vehicles.
/// This is an observed convention, not a complete mapping table.
pub const GLONASS_PRN_RANGE: RangeInclusive<i32> = GLONASS_PRN_FIRST..=GLONASS_PRN_LAST;

const GLONASS_PRN_FIRST: i32 = 65;
const GLONASS_PRN_LAST: i32 = 88;

/// Identifies the [GnssType] of a satellite from its PRN.
/// Any PRN is accepted: unknown, negative or out of range values
/// are assumed to be [GnssType::Navstar], because no other
/// PRN to constellation mapping is known.
pub const fn classify(prn: i32) -> GnssType {
    if prn >= GLONASS_PRN_FIRST && prn <= GLONASS_PRN_LAST {
        GnssType::Glonass
    } else {
        GnssType::Navstar
    }
}

/// Pseudo Random Noise code number, as reported by the platform
/// for each satellite in view.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prn(i32);

impl Prn {
    pub const fn new(prn: i32) -> Self {
        Self(prn)
    }

    pub const fn value(&self) -> i32 {
        self.0
    }

    /// [GnssType] this PRN is identified as, see [classify].
    pub const fn gnss_type(&self) -> GnssType {
        classify(self.0)
    }

    /// True if this PRN lies within [GLONASS_PRN_RANGE]
    pub const fn is_glonass_range(&self) -> bool {
        self.gnss_type().is_glonass()
    }
}

impl From<i32> for Prn {
    fn from(prn: i32) -> Self {
        Self(prn)
    }
}

impl From<Prn> for i32 {
    fn from(prn: Prn) -> Self {
        prn.0
    }
}

impl std::fmt::Display for Prn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
