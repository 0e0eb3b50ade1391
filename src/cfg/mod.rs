use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{DeviceCapabilities, ScreenLayout, ScreenSize, SdkLevel};

const fn default_sdk_level() -> u32 {
    SdkLevel::GINGERBREAD.0
}

const fn default_screen_layout() -> u32 {
    ScreenSize::Normal.bits()
}

/// Host [DeviceConfig], as reported by the platform.
/// Use this when you can't or don't want to implement [DeviceCapabilities]
/// on top of the native APIs directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceConfig {
    /// Platform API level
    #[cfg_attr(feature = "serde", serde(default = "default_sdk_level"))]
    pub sdk_level: u32,
    /// Raw screen layout bit field
    #[cfg_attr(feature = "serde", serde(default = "default_screen_layout"))]
    pub screen_layout: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            sdk_level: default_sdk_level(),
            screen_layout: default_screen_layout(),
        }
    }
}

impl DeviceConfig {
    /// Copies and returns [DeviceConfig] with updated API level
    pub fn with_sdk_level(&self, sdk_level: u32) -> Self {
        let mut s = *self;
        s.sdk_level = sdk_level;
        s
    }

    /// Copies and returns [DeviceConfig] with updated raw screen layout
    pub fn with_screen_layout(&self, screen_layout: u32) -> Self {
        let mut s = *self;
        s.screen_layout = screen_layout;
        s
    }

    /// Copies and returns [DeviceConfig] with updated [ScreenSize].
    /// Other screen layout flags are preserved.
    pub fn with_screen_size(&self, size: ScreenSize) -> Self {
        let mut s = *self;
        s.screen_layout = (s.screen_layout & !ScreenLayout::SIZE_MASK) | size.bits();
        s
    }

    pub fn sdk_level(&self) -> SdkLevel {
        SdkLevel(self.sdk_level)
    }

    pub fn screen_layout(&self) -> ScreenLayout {
        ScreenLayout(self.screen_layout)
    }
}

impl DeviceCapabilities for DeviceConfig {
    fn supports_rotation_sensor(&self) -> bool {
        let supported = self.sdk_level().supports_rotation_vector_sensor();
        debug!(
            "sdk level {}: rotation vector sensor supported={}",
            self.sdk_level, supported
        );
        supported
    }

    fn is_large_screen(&self) -> bool {
        let layout = self.screen_layout();
        let large = layout.is_large();
        match layout.size() {
            Some(size) => debug!("screen size {}: large={}", size, large),
            None => debug!(
                "unknown screen size class {:#x}: large={}",
                layout.size_bits(),
                large
            ),
        }
        large
    }
}
