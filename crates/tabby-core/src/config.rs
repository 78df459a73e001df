// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration
//!
//! There is no process-wide theme: a [`Config`] is passed to the application
//! root, which applies it to its toolkit and hands it to each window it
//! creates.

use crate::draw::Rgb8;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::env::var;
use std::path::PathBuf;

/// Colour theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The palette of this theme
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = ();

    /// Parse `light` or `dark`, case-insensitive
    fn from_str(s: &str) -> Result<Self, ()> {
        if s.eq_ignore_ascii_case("light") {
            Ok(Theme::Light)
        } else if s.eq_ignore_ascii_case("dark") {
            Ok(Theme::Dark)
        } else {
            Err(())
        }
    }
}

/// Colours applied to the toolkit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Background of windows and buttons
    pub background: Rgb8,
    /// Background of text fields and lists
    pub background2: Rgb8,
    /// Label and text colour
    pub foreground: Rgb8,
    /// Colour of inactive controls
    pub inactive: Rgb8,
    /// Selection highlight
    pub selection: Rgb8,
    /// Tooltip background
    pub tooltip: Rgb8,
    /// Tooltip text
    pub tooltip_text: Rgb8,
}

impl Palette {
    /// Default light palette
    pub const LIGHT: Palette = Palette {
        background: Rgb8::grey(0xCE),
        background2: Rgb8::grey(0xFC),
        foreground: Rgb8::grey(0x3C),
        inactive: Rgb8::grey(0x55),
        selection: Rgb8::rgb(0x00, 0x00, 0x80),
        tooltip: Rgb8::grey(0x0A),
        tooltip_text: Rgb8::WHITE,
    };

    /// Default dark palette
    pub const DARK: Palette = Palette {
        background: Rgb8::grey(0x53),
        background2: Rgb8::grey(0x3A),
        foreground: Rgb8::WHITE,
        inactive: Rgb8::grey(0x26),
        selection: Rgb8::grey(0xD6),
        tooltip: Rgb8::rgb(0xFF, 0xFF, 0xCC),
        tooltip_text: Rgb8::BLACK,
    };
}

/// Application configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Colour theme
    #[cfg_attr(feature = "serde", serde(default))]
    pub theme: Theme,

    /// Drawing scheme name passed to the toolkit
    #[cfg_attr(feature = "serde", serde(default = "defaults::scheme"))]
    pub scheme: String,

    /// Whether controls draw a keyboard-focus indicator
    #[cfg_attr(feature = "serde", serde(default))]
    pub visible_focus: bool,

    /// Path of the PNG icon loaded by every window
    #[cfg_attr(feature = "serde", serde(default = "defaults::icon_path"))]
    pub icon_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: Theme::default(),
            scheme: defaults::scheme(),
            visible_focus: false,
            icon_path: defaults::icon_path(),
        }
    }
}

impl Config {
    /// Construct with the given theme (inline)
    #[inline]
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The active palette
    #[inline]
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn scheme() -> String {
        "gtk+".to_string()
    }

    pub fn icon_path() -> PathBuf {
        PathBuf::from("assets/icon.png")
    }
}

/// Application configuration options
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// Theme override. See `TABBY_THEME` doc.
    pub theme: Option<Theme>,
    /// Icon path override. See `TABBY_ICON` doc.
    pub icon_path: Option<PathBuf>,
}

impl Options {
    /// Construct a new instance, reading from environment variables
    ///
    /// The following environment variables are read:
    ///
    /// -   `TABBY_THEME`: `light` or `dark` (case-insensitive)
    /// -   `TABBY_ICON`: path to the window icon (PNG)
    ///
    /// Bad values are logged and ignored.
    pub fn from_env() -> Self {
        let mut options = Options::default();

        if let Ok(v) = var("TABBY_THEME") {
            match v.parse() {
                Ok(theme) => options.theme = Some(theme),
                Err(()) => {
                    log::error!("from_env: bad var TABBY_THEME={v}");
                    log::error!("from_env: supported themes: light, dark");
                }
            }
        }

        if let Ok(v) = var("TABBY_ICON") {
            options.icon_path = Some(v.into());
        }

        options
    }

    /// Apply overrides to `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(path) = self.icon_path.as_ref() {
            config.icon_path = path.clone();
        }
    }

    /// The default configuration with overrides applied
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        self.apply(&mut config);
        config
    }
}
