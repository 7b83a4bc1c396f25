#![forbid(unsafe_code)]

//! User-facing tour settings.

use serde::{Deserialize, Serialize};

/// Tooltip text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Scale factor applied to the base text metrics.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        match self {
            FontSize::Small => 0.875,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.125,
        }
    }
}

/// Singleton user settings, persisted alongside progress.
///
/// Every field carries a serde default so records written by older builds
/// keep loading after new settings are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourSettings {
    /// Master switch. When off, tours never start and any active one is
    /// force-stopped.
    pub enabled: bool,
    /// Auto-start the welcome tour on the first authenticated visit.
    pub show_welcome_on_first_login: bool,
    /// Animation speed multiplier (0.5x to 2x). Transition durations divide
    /// by this, so larger is faster.
    pub animation_speed: f32,
    /// Play the completion chime.
    pub sound_enabled: bool,
    /// Force the high-contrast overlay palette.
    pub high_contrast: bool,
    /// Tooltip text size.
    pub font_size: FontSize,
    /// Emit announcements for screen readers.
    pub screen_reader_announcements: bool,
    /// Full keyboard navigation of the tooltip.
    pub keyboard_navigation: bool,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_welcome_on_first_login: true,
            animation_speed: 1.0,
            sound_enabled: true,
            high_contrast: false,
            font_size: FontSize::Medium,
            screen_reader_announcements: true,
            keyboard_navigation: true,
        }
    }
}

/// A partial settings update; `None` fields are left unchanged.
///
/// The shallow-merge counterpart of [`TourSettings`]: build one with the
/// setters and hand it to the store's `update_settings`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourSettingsPatch {
    pub enabled: Option<bool>,
    pub show_welcome_on_first_login: Option<bool>,
    pub animation_speed: Option<f32>,
    pub sound_enabled: Option<bool>,
    pub high_contrast: Option<bool>,
    pub font_size: Option<FontSize>,
    pub screen_reader_announcements: Option<bool>,
    pub keyboard_navigation: Option<bool>,
}

impl TourSettingsPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = Some(v);
        self
    }

    #[must_use]
    pub fn show_welcome_on_first_login(mut self, v: bool) -> Self {
        self.show_welcome_on_first_login = Some(v);
        self
    }

    #[must_use]
    pub fn animation_speed(mut self, v: f32) -> Self {
        self.animation_speed = Some(v);
        self
    }

    #[must_use]
    pub fn sound_enabled(mut self, v: bool) -> Self {
        self.sound_enabled = Some(v);
        self
    }

    #[must_use]
    pub fn high_contrast(mut self, v: bool) -> Self {
        self.high_contrast = Some(v);
        self
    }

    #[must_use]
    pub fn font_size(mut self, v: FontSize) -> Self {
        self.font_size = Some(v);
        self
    }

    #[must_use]
    pub fn screen_reader_announcements(mut self, v: bool) -> Self {
        self.screen_reader_announcements = Some(v);
        self
    }

    #[must_use]
    pub fn keyboard_navigation(mut self, v: bool) -> Self {
        self.keyboard_navigation = Some(v);
        self
    }

    /// Apply the patch onto existing settings.
    pub fn apply(&self, settings: &mut TourSettings) {
        if let Some(v) = self.enabled {
            settings.enabled = v;
        }
        if let Some(v) = self.show_welcome_on_first_login {
            settings.show_welcome_on_first_login = v;
        }
        if let Some(v) = self.animation_speed {
            settings.animation_speed = v;
        }
        if let Some(v) = self.sound_enabled {
            settings.sound_enabled = v;
        }
        if let Some(v) = self.high_contrast {
            settings.high_contrast = v;
        }
        if let Some(v) = self.font_size {
            settings.font_size = v;
        }
        if let Some(v) = self.screen_reader_announcements {
            settings.screen_reader_announcements = v;
        }
        if let Some(v) = self.keyboard_navigation {
            settings.keyboard_navigation = v;
        }
    }
}
