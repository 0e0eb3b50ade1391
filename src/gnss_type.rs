use crate::prelude::{Constellation, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Global Navigation Satellite System a satellite belongs to,
/// as identified from its PRN.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GnssType {
    /// US NAVSTAR (GPS). Also our assumption whenever
    /// the PRN is not recognized.
    #[default]
    #[cfg_attr(
        feature = "serde",
        serde(
            alias = "navstar",
            alias = "NAVSTAR",
            alias = "gps",
            alias = "GPS"
        )
    )]
    Navstar,
    /// Russian GLONASS
    #[cfg_attr(feature = "serde", serde(alias = "glonass", alias = "GLONASS"))]
    Glonass,
}

impl GnssType {
    /// True if this is [GnssType::Navstar]
    pub const fn is_navstar(&self) -> bool {
        matches!(self, Self::Navstar)
    }
    /// True if this is [GnssType::Glonass]
    pub const fn is_glonass(&self) -> bool {
        matches!(self, Self::Glonass)
    }
}

impl std::fmt::Display for GnssType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Navstar => write!(f, "NAVSTAR"),
            Self::Glonass => write!(f, "GLONASS"),
        }
    }
}

impl std::str::FromStr for GnssType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "navstar" | "gps" => Ok(Self::Navstar),
            "glonass" => Ok(Self::Glonass),
            _ => Err(Error::UnknownGnssType(trimmed.to_string())),
        }
    }
}

impl From<GnssType> for Constellation {
    fn from(gnss: GnssType) -> Self {
        match gnss {
            GnssType::Navstar => Constellation::GPS,
            GnssType::Glonass => Constellation::Glonass,
        }
    }
}

impl TryFrom<Constellation> for GnssType {
    type Error = Error;
    fn try_from(constellation: Constellation) -> Result<Self, Self::Error> {
        match constellation {
            Constellation::GPS => Ok(Self::Navstar),
            Constellation::Glonass => Ok(Self::Glonass),
            other => Err(Error::UnsupportedConstellation(other)),
        }
    }
}
