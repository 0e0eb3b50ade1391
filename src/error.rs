use thiserror::Error;

use crate::prelude::Constellation;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Failed to parse [GnssType](crate::prelude::GnssType) from text.
    #[error("unknown gnss type \"{0}\"")]
    UnknownGnssType(String),

    /// Only GPS and Glonass have a [GnssType](crate::prelude::GnssType) counterpart.
    #[error("unsupported constellation: {0:?}")]
    UnsupportedConstellation(Constellation),

    #[error("invalid screen size \"{0}\"")]
    InvalidScreenSize(String),
}
