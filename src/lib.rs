#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod device;
mod error;
mod gnss_type;
mod prn;
mod satellite;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::DeviceConfig;
    pub use crate::device::{
        is_large_screen, is_rotation_vector_sensor_supported, DeviceCapabilities, ScreenLayout,
        ScreenSize, SdkLevel,
    };
    pub use crate::error::Error;
    pub use crate::gnss_type::GnssType;
    pub use crate::prn::{classify, Prn, GLONASS_PRN_RANGE};
    pub use crate::satellite::{sort_by_gnss_then_id, Satellite};
    // re-export
    pub use gnss::prelude::Constellation;
}

// pub export
pub use error::Error;
