//! Host device capabilities
use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capabilities of the host device that the application needs to probe.
/// Implement this on top of your platform native APIs.
pub trait DeviceCapabilities {
    /// True if the device can report the rotation vector sensor.
    fn supports_rotation_sensor(&self) -> bool;

    /// True if the application is running on a large screen.
    fn is_large_screen(&self) -> bool;
}

/// Platform API level
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SdkLevel(pub u32);

impl SdkLevel {
    /// First API level with the rotation vector sensor.
    pub const GINGERBREAD: Self = Self(9);

    /// True if the rotation vector sensor exists at this API level.
    pub fn supports_rotation_vector_sensor(&self) -> bool {
        *self >= Self::GINGERBREAD
    }
}

/// Screen size class, encoded in the low nibble of [ScreenLayout].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScreenSize {
    #[cfg_attr(feature = "serde", serde(alias = "undefined"))]
    Undefined,
    #[cfg_attr(feature = "serde", serde(alias = "small"))]
    Small,
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "normal"))]
    Normal,
    #[cfg_attr(feature = "serde", serde(alias = "large"))]
    Large,
    #[cfg_attr(feature = "serde", serde(alias = "xlarge"))]
    XLarge,
}

impl ScreenSize {
    /// Platform encoding of this size class
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Undefined => 0,
            Self::Small => 1,
            Self::Normal => 2,
            Self::Large => 3,
            Self::XLarge => 4,
        }
    }

    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(Self::Undefined),
            1 => Some(Self::Small),
            2 => Some(Self::Normal),
            3 => Some(Self::Large),
            4 => Some(Self::XLarge),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Small => write!(f, "small"),
            Self::Normal => write!(f, "normal"),
            Self::Large => write!(f, "large"),
            Self::XLarge => write!(f, "xlarge"),
        }
    }
}

impl std::str::FromStr for ScreenSize {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "undefined" => Ok(Self::Undefined),
            "small" => Ok(Self::Small),
            "normal" => Ok(Self::Normal),
            "large" => Ok(Self::Large),
            "xlarge" => Ok(Self::XLarge),
            _ => Err(Error::InvalidScreenSize(trimmed.to_string())),
        }
    }
}

/// Raw screen layout bit field, as reported by the platform.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenLayout(pub u32);

impl ScreenLayout {
    pub const SIZE_MASK: u32 = 0x0f;

    /// Size class bits, other layout flags discarded
    pub const fn size_bits(&self) -> u32 {
        self.0 & Self::SIZE_MASK
    }

    /// Decoded [ScreenSize], None for size classes we do not know of.
    pub fn size(&self) -> Option<ScreenSize> {
        ScreenSize::from_bits(self.size_bits())
    }

    /// True for [ScreenSize::Large] and anything above.
    pub const fn is_large(&self) -> bool {
        self.size_bits() >= ScreenSize::Large.bits()
    }
}

impl From<ScreenSize> for ScreenLayout {
    fn from(size: ScreenSize) -> Self {
        Self(size.bits())
    }
}

/// True if the rotation vector sensor is available at this API level.
pub fn is_rotation_vector_sensor_supported(sdk_level: u32) -> bool {
    SdkLevel(sdk_level).supports_rotation_vector_sensor()
}

/// True if this screen layout describes a large screen.
pub fn is_large_screen(screen_layout: u32) -> bool {
    ScreenLayout(screen_layout).is_large()
}
